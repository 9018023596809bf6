//! Currency arithmetic.
//!
//! Amounts travel as `f64` (the store keeps JSON numbers) but are treated as
//! two-decimal fixed point: every value that is stored or compared goes
//! through [`round2`] first.

/// Rounds to two decimal places, half-up, with an epsilon nudge so values
/// like `1.005` that are stored just below the midpoint still round up.
pub fn round2(amount: f64) -> f64 {
    (((amount + f64::EPSILON) * 100.0) + 0.5).floor() / 100.0
}

/// Amount still owed: `max(0, round2(total) - round2(paid))`, rounded again.
///
/// Never negative. Overpayment clamps to zero.
pub fn calculate_due(total: f64, paid: f64) -> f64 {
    let due = round2(total) - round2(paid);
    round2(due).max(0.0)
}

/// Formats an amount as Indian rupees with lakh/crore digit grouping,
/// e.g. `₹1,23,456.50`.
pub fn format_inr(amount: f64) -> String {
    let cents = (round2(amount.abs()) * 100.0).round() as u64;
    let rupees = (cents / 100).to_string();
    let paise = cents % 100;

    let grouped = if rupees.len() <= 3 {
        rupees
    } else {
        let (head, tail) = rupees.split_at(rupees.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}₹{grouped}.{paise:02}")
}
