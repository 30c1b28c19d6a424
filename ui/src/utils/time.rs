use jiff::{Zoned, civil::Date};

/// Today's date in the browser's timezone.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Format a stay date for display, e.g. `Mar 1, 2025`.
pub fn format_stay_date(date: Date) -> String {
    date.strftime("%b %-d, %Y").to_string()
}

/// Value of an `<input type="date">`: empty or `YYYY-MM-DD`.
pub fn parse_date_input(value: &str) -> Option<Date> {
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

pub fn date_input_value(date: Option<Date>) -> String {
    date.map(|date| date.to_string()).unwrap_or_default()
}
