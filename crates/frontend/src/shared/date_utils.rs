/// Utilities for date formatting
///
/// Orders carry a UTC timestamp; the event is a calendar day, so only the
/// date part is shown.
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Event date as `DD/MM/YYYY`
/// Example: 2025-03-15T00:00:00Z -> "15/03/2025"
pub fn format_event_date(date: &DateTime<Utc>) -> String {
    format_day(date.date_naive())
}

pub fn format_day(day: NaiveDate) -> String {
    day.format("%d/%m/%Y").to_string()
}

/// Сегодняшняя дата по часам браузера
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_event_date() {
        let date = Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(format_event_date(&date), "15/03/2025");
    }

    #[test]
    fn test_format_day_pads() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_day(day), "05/01/2024");
    }
}
