use chrono::{DateTime, NaiveDateTime};

const SESSION_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// "19/10/2026 - 20:30" for the formats the API emits; anything else is
/// shown as received.
pub fn format_start_time(raw: &str) -> String {
    parse_start_time(raw)
        .map(|t| t.format("%d/%m/%Y - %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.naive_local());
    }
    SESSION_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
}

/// Seat numbers as "7, 8".
pub fn seat_list(numbers: impl IntoIterator<Item = u32>) -> String {
    numbers
        .into_iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_has_two_decimals() {
        assert_eq!(format_price(9.5), "$9.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_start_time_formats() {
        assert_eq!(format_start_time("2026-10-19 20:30:00"), "19/10/2026 - 20:30");
        assert_eq!(format_start_time("2026-10-19T20:30:00+02:00"), "19/10/2026 - 20:30");
        assert_eq!(format_start_time("tonight"), "tonight");
    }

    #[test]
    fn test_seat_list() {
        assert_eq!(seat_list([7, 8]), "7, 8");
        assert_eq!(seat_list(Vec::new()), "");
    }
}
