use chrono::{DateTime, Utc};

/// Current wall-clock time as Unix seconds.
#[inline]
pub fn now_unix_seconds() -> i64 {
    Utc::now().timestamp()
}

/// Absolute expiry `max_age_secs` from `now`. Saturates instead of overflowing.
#[inline]
pub fn expiry_after(now: i64, max_age_secs: i64) -> i64 {
    now.saturating_add(max_age_secs)
}

/// Absolute expiry from a deadline.
#[inline]
pub fn expiry_at(deadline: DateTime<Utc>) -> i64 {
    deadline.timestamp()
}

/// Valid iff there is no expiry or `now <= expiry`.
#[inline]
pub fn is_live(expiry: Option<i64>, now: i64) -> bool {
    match expiry {
        None => true,
        Some(e) => now <= e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn expiry_boundary_is_inclusive() {
        assert!(is_live(None, i64::MAX));
        assert!(is_live(Some(100), 99));
        assert!(is_live(Some(100), 100));
        assert!(!is_live(Some(100), 101));
    }

    #[test]
    fn expiry_helpers() {
        assert_eq!(expiry_after(1_000, 60), 1_060);
        assert_eq!(expiry_after(i64::MAX - 1, 60), i64::MAX);
        let deadline = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(expiry_at(deadline), 1_893_456_000);
    }

    #[test]
    fn clock_is_after_2020() {
        assert!(now_unix_seconds() > 1_577_836_800);
    }
}
