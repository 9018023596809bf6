//! Pretty output formatting.

use gymdesk_core::member::DashboardStats;
use gymdesk_core::money::format_inr;

use super::MemberRow;

/// Format a member for display.
pub fn format_member(row: &MemberRow<'_>) -> String {
    let member = row.member;
    let mut output = format!(
        "{} #{} [{}]\n  ID: {}\n  Mobile: {}\n  Plan: {} ({} to {})\n  Batch: {}\n  Paid: {} of {}",
        member.name,
        member.member_code,
        row.status,
        member.id,
        member.mobile,
        member.plan_type,
        member.purchase_date,
        member.expiry_date,
        member.batch,
        format_inr(member.amount_paid),
        format_inr(member.total_amount),
    );
    if member.due_amount > 0.0 {
        output.push_str(&format!("\n  Due: {}", format_inr(member.due_amount)));
    }
    output
}

/// Format members for display.
pub fn format_members(rows: &[MemberRow<'_>]) -> String {
    if rows.is_empty() {
        return "No members found.".to_string();
    }
    let mut output = format!("MEMBERS ({})\n", rows.len());
    output.push_str(&"-".repeat(40));
    for row in rows {
        output.push_str(&format!("\n{}", format_member(row)));
        output.push('\n');
    }
    output
}

/// Format dashboard stats for display.
pub fn format_stats(stats: &DashboardStats) -> String {
    format!(
        "DASHBOARD\n{}\n  Total members: {}\n  Active: {}\n  Expiring soon: {}\n  Expired: {}\n  Total income: {}",
        "-".repeat(40),
        stats.total_members,
        stats.active_members,
        stats.expiring_members,
        stats.expired_members,
        format_inr(stats.total_income),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gymdesk_core::member::{MemberDraft, MemberStatus};

    fn member(amount_paid: f64) -> gymdesk_core::member::Member {
        MemberDraft {
            name: "Anna Kumar".to_string(),
            member_code: "007".to_string(),
            mobile: "9876543210".to_string(),
            training_type: "General Training".to_string(),
            address: "12 MG Road".to_string(),
            id_proof: "Aadhaar".to_string(),
            batch: "Morning(5AM-10AM)".to_string(),
            plan_type: "1 month".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            total_amount: 1500.0,
            amount_paid,
            payment_details: String::new(),
            profile_picture: None,
        }
        .into_member("m-1")
    }

    #[test]
    fn test_format_member_shows_due_only_when_owed() {
        let owing = member(1000.0);
        let paid = member(1500.0);

        let owing = format_member(&MemberRow {
            member: &owing,
            status: MemberStatus::Active,
        });
        let paid = format_member(&MemberRow {
            member: &paid,
            status: MemberStatus::Active,
        });

        assert!(owing.starts_with("Anna Kumar #007 [active]"));
        assert!(owing.contains("Paid: ₹1,000.00 of ₹1,500.00"));
        assert!(owing.contains("Due: ₹500.00"));
        assert!(!paid.contains("Due:"));
    }

    #[test]
    fn test_format_members_empty() {
        assert_eq!(format_members(&[]), "No members found.");
    }

    #[test]
    fn test_format_stats() {
        let stats = DashboardStats {
            total_members: 3,
            active_members: 1,
            expiring_members: 1,
            expired_members: 1,
            total_income: 123456.5,
        };

        let output = format_stats(&stats);

        assert!(output.contains("Total members: 3"));
        assert!(output.contains("Expiring soon: 1"));
        assert!(output.contains("Total income: ₹1,23,456.50"));
    }
}
