use chrono::NaiveDate;
use egui_kittest::Harness;
use kittest::Queryable;
use rowbook_ui::RowbookApp;
use rowbook_ui::state::State;

/// Fixed date used by every UI test.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date")
}

pub struct TestCtx<'a> {
    harness: Harness<'a, RowbookApp>,
}

impl<'a> TestCtx<'a> {
    pub fn new_app() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = RowbookApp::new(State::test(today()));
        let harness = Harness::new_eframe(|_| app);

        Self { harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RowbookApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, RowbookApp> {
        &self.harness
    }

    pub fn has_label(&self, text: &str) -> bool {
        self.harness.query_all_by_label_contains(text).next().is_some()
    }

    /// Clicks the single node labelled exactly `label`, then settles two frames.
    pub fn click(&mut self, label: &str) {
        if let Some(node) = self.harness.query_by_label(label) {
            node.click();
        }
        self.harness.step();
        self.harness.step();
    }
}
