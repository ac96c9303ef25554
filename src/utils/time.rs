use chrono::{DateTime, Utc};

pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

pub fn elapsed_seconds(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_seconds()
}

pub fn is_expired(timestamp: DateTime<Utc>, timeout: i64, current_time: DateTime<Utc>) -> bool {
    elapsed_seconds(timestamp, current_time) > timeout
}
