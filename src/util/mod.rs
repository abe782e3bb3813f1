use chrono::{DateTime, Utc};

/// Format a timestamp as a human-readable age relative to now.
pub fn relative_time(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    if duration.num_seconds() < 60 {
        format!("{}s ago", duration.num_seconds().max(0))
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else {
        format!("{}d ago", duration.num_days())
    }
}

/// Subtitle for the fetch/pull/push states: when the remote was last
/// fetched, or a fixed sentinel if it never was.
pub fn format_last_fetched(last_fetched: Option<DateTime<Utc>>) -> String {
    match last_fetched {
        Some(timestamp) => format!("Last fetched {}", relative_time(timestamp)),
        None => "Never fetched".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_time_seconds() {
        let ts = Utc::now() - Duration::seconds(30);
        assert_eq!(relative_time(ts), "30s ago");
    }

    #[test]
    fn test_relative_time_minutes() {
        let ts = Utc::now() - Duration::minutes(5);
        assert_eq!(relative_time(ts), "5m ago");
    }

    #[test]
    fn test_relative_time_hours() {
        let ts = Utc::now() - Duration::hours(3);
        assert_eq!(relative_time(ts), "3h ago");
    }

    #[test]
    fn test_relative_time_days() {
        let ts = Utc::now() - Duration::days(2);
        assert_eq!(relative_time(ts), "2d ago");
    }

    #[test]
    fn test_future_timestamp_clamps_to_zero() {
        let ts = Utc::now() + Duration::seconds(30);
        assert_eq!(relative_time(ts), "0s ago");
    }

    #[test]
    fn test_last_fetched_present() {
        let ts = Utc::now() - Duration::minutes(10);
        assert_eq!(format_last_fetched(Some(ts)), "Last fetched 10m ago");
    }

    #[test]
    fn test_last_fetched_never() {
        assert_eq!(format_last_fetched(None), "Never fetched");
    }
}
