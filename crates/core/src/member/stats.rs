use crate::clock::Clock;
use crate::status::StatusCache;

use super::types::{DashboardStats, Member, MemberStatus};

/// Reduces members into dashboard counters in a single pass.
///
/// Stale status memos are purged first; each member is then classified
/// through the cache. `total_income` is the raw sum of `amount_paid`.
pub fn aggregate<C: Clock>(members: &[Member], statuses: &mut StatusCache<C>) -> DashboardStats {
    statuses.purge_expired();

    members
        .iter()
        .fold(DashboardStats::default(), |mut stats, member| {
            stats.total_members += 1;
            stats.total_income += member.amount_paid;

            match statuses.status(member.expiry_date) {
                MemberStatus::Active => stats.active_members += 1,
                MemberStatus::Expiring => stats.expiring_members += 1,
                MemberStatus::Expired => stats.expired_members += 1,
            }

            stats
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::member::MemberDraft;
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 18, 45, 0).unwrap()
    }

    fn member(expiry: NaiveDate, total: f64, paid: f64) -> Member {
        MemberDraft {
            name: "Test".to_string(),
            member_code: "100".to_string(),
            mobile: "9000000000".to_string(),
            training_type: "Cardio Training".to_string(),
            address: "Somewhere".to_string(),
            id_proof: "PAN".to_string(),
            batch: "Evening(5PM-10PM)".to_string(),
            plan_type: "1 month".to_string(),
            purchase_date: expiry - Duration::days(30),
            expiry_date: expiry,
            total_amount: total,
            amount_paid: paid,
            payment_details: "Cash".to_string(),
            profile_picture: None,
        }
        .into_member("m")
    }

    #[test]
    fn test_aggregate_scenario() {
        let today = now().date_naive();
        let members = vec![
            member(today + Duration::days(5), 100.0, 100.0),
            member(today - Duration::days(2), 200.0, 50.0),
        ];
        let mut statuses = StatusCache::with_clock(ManualClock::new(now()));

        let stats = aggregate(&members, &mut statuses);

        assert_eq!(
            stats,
            DashboardStats {
                total_members: 2,
                active_members: 0,
                expiring_members: 1,
                expired_members: 1,
                total_income: 150.0,
            }
        );
    }

    #[test]
    fn test_aggregate_empty() {
        let mut statuses = StatusCache::with_clock(ManualClock::new(now()));
        assert_eq!(aggregate(&[], &mut statuses), DashboardStats::default());
    }

    #[test]
    fn test_aggregate_counts_active() {
        let today = now().date_naive();
        let members = vec![
            member(today + Duration::days(30), 1200.0, 1200.0),
            member(today + Duration::days(90), 3000.0, 2500.5),
        ];
        let mut statuses = StatusCache::with_clock(ManualClock::new(now()));

        let stats = aggregate(&members, &mut statuses);

        assert_eq!(stats.active_members, 2);
        assert_eq!(stats.total_income, 3700.5);
    }

    #[test]
    fn test_aggregate_purges_stale_status_entries() {
        let clock = ManualClock::new(now());
        let mut statuses = StatusCache::with_clock(clock.clone());
        let today = now().date_naive();
        statuses.status(today + Duration::days(400));

        clock.advance(Duration::minutes(5));
        let members = vec![member(today + Duration::days(1), 10.0, 10.0)];
        aggregate(&members, &mut statuses);

        assert_eq!(statuses.len(), 1);
    }
}
