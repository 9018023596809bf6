use chrono::{DateTime, NaiveDate, Utc};

use crate::member::MemberStatus;

/// Members whose expiry is at most this many days away are `Expiring`.
pub const EXPIRING_WINDOW_DAYS: i64 = 10;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whole days from `now` until midnight (UTC) of `expiry`, rounded up.
///
/// Any part of a day still ahead counts as a full day, so the expiry day
/// itself yields 0 for the whole of that day.
pub fn days_until_expiry(expiry: NaiveDate, now: DateTime<Utc>) -> i64 {
    let expiry_midnight = expiry.and_time(chrono::NaiveTime::MIN).and_utc();
    let millis = (expiry_midnight - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Classifies a membership by its expiry date.
///
/// - fewer than 0 days left: `Expired`
/// - 0 to 10 days left (inclusive): `Expiring`
/// - otherwise: `Active`
pub fn classify(expiry: NaiveDate, now: DateTime<Utc>) -> MemberStatus {
    let days = days_until_expiry(expiry, now);
    if days < 0 {
        MemberStatus::Expired
    } else if days <= EXPIRING_WINDOW_DAYS {
        MemberStatus::Expiring
    } else {
        MemberStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
    }

    fn today() -> NaiveDate {
        now().date_naive()
    }

    #[test]
    fn test_expiry_today_is_expiring() {
        assert_eq!(days_until_expiry(today(), now()), 0);
        assert_eq!(classify(today(), now()), MemberStatus::Expiring);
    }

    #[test]
    fn test_expiry_yesterday_is_expired() {
        assert_eq!(
            classify(today() - Duration::days(1), now()),
            MemberStatus::Expired
        );
    }

    #[test]
    fn test_ten_days_is_expiring() {
        assert_eq!(
            classify(today() + Duration::days(10), now()),
            MemberStatus::Expiring
        );
    }

    #[test]
    fn test_eleven_days_is_active() {
        assert_eq!(
            classify(today() + Duration::days(11), now()),
            MemberStatus::Active
        );
    }

    #[test]
    fn test_boundaries_hold_at_midnight() {
        let midnight = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let day = midnight.date_naive();
        assert_eq!(classify(day, midnight), MemberStatus::Expiring);
        assert_eq!(
            classify(day + Duration::days(10), midnight),
            MemberStatus::Expiring
        );
        assert_eq!(
            classify(day + Duration::days(11), midnight),
            MemberStatus::Active
        );
        assert_eq!(
            classify(day - Duration::days(1), midnight),
            MemberStatus::Expired
        );
    }

    #[test]
    fn test_far_past_and_future() {
        assert_eq!(
            classify(today() - Duration::days(400), now()),
            MemberStatus::Expired
        );
        assert_eq!(
            classify(today() + Duration::days(365), now()),
            MemberStatus::Active
        );
    }
}
