use chrono::DateTime;

pub fn now_unix() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Publication timestamp for story cards, e.g. "2024-03-01 14:05".
pub fn format_datetime(secs: u64) -> String {
    DateTime::from_timestamp(secs as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(1700000000), "2023-11-14 22:13");
    }

    #[test]
    fn test_format_datetime_epoch() {
        assert_eq!(format_datetime(0), "1970-01-01 00:00");
    }
}
