//! Relative due-date windows offered as quick picks for the period filter

use chrono::{Days, NaiveDate};

use super::DateRangeValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueWindow {
    UpTo30Days,
    From30To60Days,
    From60To90Days,
}

impl DueWindow {
    pub const ALL: [DueWindow; 3] = [
        DueWindow::UpTo30Days,
        DueWindow::From30To60Days,
        DueWindow::From60To90Days,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DueWindow::UpTo30Days => "Até 30 dias",
            DueWindow::From30To60Days => "30 a 60 dias",
            DueWindow::From60To90Days => "60 a 90 dias",
        }
    }

    /// Looks a window up by its label, ignoring case and surrounding spaces.
    pub fn from_label(label: &str) -> Option<DueWindow> {
        let label = label.trim().to_lowercase();
        DueWindow::ALL
            .into_iter()
            .find(|window| window.label().to_lowercase() == label)
    }

    /// Offsets in days from the reference date, both inclusive.
    fn offsets(&self) -> (u64, u64) {
        match self {
            DueWindow::UpTo30Days => (0, 30),
            DueWindow::From30To60Days => (30, 60),
            DueWindow::From60To90Days => (60, 90),
        }
    }

    /// Smallest date range covering every selected window, counted from `today`.
    /// Returns `None` when nothing is selected.
    pub fn span(windows: &[DueWindow], today: NaiveDate) -> Option<DateRangeValue> {
        let start = windows.iter().map(|w| w.offsets().0).min()?;
        let end = windows.iter().map(|w| w.offsets().1).max()?;

        Some(DateRangeValue::new(
            today.checked_add_days(Days::new(start)),
            today.checked_add_days(Days::new(end)),
        ))
    }
}
