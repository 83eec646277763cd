use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Renders a backend timestamp for tables. Accepts RFC 3339, a naive
/// `YYYY-MM-DDTHH:MM:SS[.f]` or a bare date; anything else is shown as-is.
pub fn display_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_local().format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

pub fn display_optional(raw: Option<&str>) -> String {
    raw.map(display_timestamp).unwrap_or_else(|| "-".into())
}

/// Date part used when sorting and comparing due dates.
pub fn date_key(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

pub fn format_price(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("${:.2}", value),
        None => "-".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_to_minutes() {
        assert_eq!(display_timestamp("2024-03-05T09:30:12.123"), "2024-03-05 09:30");
        assert_eq!(display_timestamp("2024-03-05T09:30:00Z"), "2024-03-05 09:30");
        assert_eq!(display_timestamp("2024-03-05"), "2024-03-05");
        assert_eq!(display_timestamp("soon"), "soon");
        assert_eq!(display_optional(None), "-");
    }

    #[test]
    fn date_keys_and_prices() {
        assert_eq!(
            date_key("2024-03-05T09:30:00"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(date_key("never"), None);
        assert_eq!(format_price(Some(19.5)), "$19.50");
        assert_eq!(format_price(None), "-");
    }
}
