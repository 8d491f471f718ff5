//! Арифметика количеств по строке заказа.
//!
//! Listing, reconciliation and the receipt all go through these functions so
//! the three views can never disagree about what is still outstanding.

/// Остаток к получению: max(ordered − received, 0)
pub fn pending_quantity(ordered: u32, received: u32) -> u32 {
    ordered.saturating_sub(received)
}

/// Converts an arbitrary number into a line quantity.
///
/// NaN, infinities and anything `<= 0` become 0, fractions truncate toward
/// zero, values past `u32::MAX` saturate.
pub fn quantity_from_f64(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    if value >= u32::MAX as f64 {
        return u32::MAX;
    }
    value.trunc() as u32
}

/// Lenient parse of a quantity typed by a person or stored as text.
/// Empty or non-numeric input is 0.
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim()
        .parse::<f64>()
        .map(quantity_from_f64)
        .unwrap_or(0)
}

/// Received quantity entered during reconciliation, clamped to `0..=ordered`
pub fn clamp_received(raw: &str, ordered: u32) -> u32 {
    parse_quantity(raw).min(ordered)
}

/// Digits-only check for the submission form (an empty string is allowed)
pub fn is_digits_only(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

/// Serde helpers for the loosely-typed documents the store hands back
pub(crate) mod wire {
    use super::quantity_from_f64;
    use crate::enums::order_status::OrderStatus;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn number_of(value: &Value) -> f64 {
        match value {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Value::Bool(true) => 1.0,
            _ => 0.0,
        }
    }

    pub fn quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .map(|v| quantity_from_f64(number_of(v)))
            .unwrap_or(0))
    }

    pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let amount = value.as_ref().map(number_of).unwrap_or(0.0);
        Ok(if amount.is_finite() { amount } else { 0.0 })
    }

    /// RFC 3339 timestamp or a bare `YYYY-MM-DD` (midnight UTC)
    pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        Some(Utc.from_utc_datetime(&midnight))
    }

    /// Missing or unreadable dates fall back to the Unix epoch
    pub fn event_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(Value::as_str)
            .and_then(parse_event_date)
            .unwrap_or_default())
    }

    /// `"pending"` / `"completed"` in any case; everything else is pending
    pub fn status<'de, D>(deserializer: D) -> Result<OrderStatus, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|code| OrderStatus::from_code(&code.trim().to_lowercase()))
            .unwrap_or_default())
    }

    /// `null` reads as an empty list
    pub fn list_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_never_negative() {
        assert_eq!(pending_quantity(10, 4), 6);
        assert_eq!(pending_quantity(10, 10), 0);
        assert_eq!(pending_quantity(3, 7), 0);
        assert_eq!(pending_quantity(0, 0), 0);
    }

    #[test]
    fn test_pending_never_exceeds_ordered() {
        for ordered in [0u32, 1, 5, 40] {
            for received in [0u32, 1, 5, 40, 100] {
                let pending = pending_quantity(ordered, received);
                assert!(pending <= ordered);
                assert_eq!(pending, ordered.saturating_sub(received));
            }
        }
    }

    #[test]
    fn test_clamp_received_input() {
        assert_eq!(clamp_received("-5", 10), 0);
        assert_eq!(clamp_received("15", 10), 10);
        assert_eq!(clamp_received("abc", 10), 0);
        assert_eq!(clamp_received("", 10), 0);
        assert_eq!(clamp_received(" 7 ", 10), 7);
        assert_eq!(clamp_received("4.9", 10), 4);
    }

    #[test]
    fn test_parse_quantity_lenient() {
        assert_eq!(parse_quantity("12"), 12);
        assert_eq!(parse_quantity("NaN"), 0);
        assert_eq!(parse_quantity("1e2"), 100);
        assert_eq!(quantity_from_f64(f64::INFINITY), 0);
        assert_eq!(quantity_from_f64(1e12), u32::MAX);
    }

    #[test]
    fn test_digits_only() {
        assert!(is_digits_only(""));
        assert!(is_digits_only("0042"));
        assert!(!is_digits_only("4a"));
        assert!(!is_digits_only("-1"));
        assert!(!is_digits_only("1.5"));
        assert!(!is_digits_only("٣"));
    }

    #[test]
    fn test_parse_event_date() {
        let full = wire::parse_event_date("2025-03-15T00:00:00.000Z").unwrap();
        let bare = wire::parse_event_date("2025-03-15").unwrap();
        assert_eq!(full, bare);
        assert!(wire::parse_event_date("15/03/2025").is_none());
    }
}
