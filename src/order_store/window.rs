use chrono::{Days, Months, NaiveDate};

/// Relative period accepted by `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListWindow {
    Day,
    Week,
    Month,
}

impl ListWindow {
    /// Case-insensitive keyword lookup. Unknown keywords yield `None`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "day" => Some(ListWindow::Day),
            "week" => Some(ListWindow::Week),
            "month" => Some(ListWindow::Month),
            _ => None,
        }
    }

    /// Earliest date still inside the window ending on `today`.
    ///
    /// Month subtraction clamps to the end of the shorter month (31 March
    /// becomes 28 or 29 February).
    pub fn lower_bound(self, today: NaiveDate) -> NaiveDate {
        let lower = match self {
            ListWindow::Day => today.checked_sub_days(Days::new(1)),
            ListWindow::Week => today.checked_sub_days(Days::new(7)),
            ListWindow::Month => today.checked_sub_months(Months::new(1)),
        };
        lower.unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(self, today: NaiveDate, date: NaiveDate) -> bool {
        self.lower_bound(today) <= date && date <= today
    }
}
