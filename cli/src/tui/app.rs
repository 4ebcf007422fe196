use descarga_core::{Report, ReportKind, ReportUseCase, SavedDay};
use ratatui::widgets::TableState;

pub struct App {
    pub banca_name: String,
    pub kind: ReportKind,
    pub weekly: Vec<Report>,
    pub monthly: Vec<Report>,
    // 0 is the newest period
    week_index: usize,
    month_index: usize,
    pub state: TableState,
}

impl App {
    pub fn new(days: &[SavedDay], banca_name: impl Into<String>) -> App {
        let usecase = ReportUseCase::new(days);
        let mut app = App {
            banca_name: banca_name.into(),
            kind: ReportKind::Weekly,
            weekly: usecase.weekly_groups(),
            monthly: usecase.monthly_groups(),
            week_index: 0,
            month_index: 0,
            state: TableState::default(),
        };
        app.reset_selection();
        app
    }

    pub fn reports(&self) -> &[Report] {
        match self.kind {
            ReportKind::Weekly => &self.weekly,
            ReportKind::Monthly => &self.monthly,
        }
    }

    pub fn index(&self) -> usize {
        match self.kind {
            ReportKind::Weekly => self.week_index,
            ReportKind::Monthly => self.month_index,
        }
    }

    fn index_mut(&mut self) -> &mut usize {
        match self.kind {
            ReportKind::Weekly => &mut self.week_index,
            ReportKind::Monthly => &mut self.month_index,
        }
    }

    pub fn current(&self) -> Option<&Report> {
        self.reports().get(self.index())
    }

    pub fn selected_day(&self) -> Option<&SavedDay> {
        let report = self.current()?;
        report.days.get(self.state.selected()?)
    }

    pub fn has_older(&self) -> bool {
        self.index() + 1 < self.reports().len()
    }

    pub fn has_newer(&self) -> bool {
        self.index() > 0
    }

    pub fn older(&mut self) {
        if self.has_older() {
            *self.index_mut() += 1;
            self.reset_selection();
        }
    }

    pub fn newer(&mut self) {
        if self.has_newer() {
            *self.index_mut() -= 1;
            self.reset_selection();
        }
    }

    pub fn toggle_kind(&mut self) {
        self.kind = match self.kind {
            ReportKind::Weekly => ReportKind::Monthly,
            ReportKind::Monthly => ReportKind::Weekly,
        };
        self.reset_selection();
    }

    pub fn next_day(&mut self) {
        let len = self.current().map_or(0, |r| r.days.len());
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous_day(&mut self) {
        let len = self.current().map_or(0, |r| r.days.len());
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn reset_selection(&mut self) {
        let has_days = self.current().is_some_and(|r| !r.is_empty());
        self.state.select(if has_days { Some(0) } else { None });
    }
}
