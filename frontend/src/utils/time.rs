use chrono::NaiveDate;

/// Parses the value of an `<input type="date">`. Blank or malformed input is
/// treated as unset.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d %Y").to_string()
}
