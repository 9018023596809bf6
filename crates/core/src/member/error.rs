use thiserror::Error;

/// Errors that can occur when validating or interpreting member input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemberError {
    #[error("Name is required")]
    EmptyName,
    #[error("Member ID is required")]
    EmptyMemberCode,
    #[error("Mobile number is required")]
    EmptyMobile,
    #[error("Mobile number must be 10 digits")]
    InvalidMobile,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Expiry date must be on or after purchase date")]
    InvalidDateRange,
    #[error("Amounts must be finite numbers")]
    NonFiniteAmount,
    #[error("Total amount must be greater than 0")]
    NonPositiveTotal,
    #[error("Amount paid cannot be negative")]
    NegativePayment,
    #[error("Amount paid cannot exceed total amount")]
    Overpaid,
    #[error("Unknown status filter: {0}")]
    UnknownStatusFilter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_error_display() {
        assert_eq!(
            MemberError::InvalidMobile.to_string(),
            "Mobile number must be 10 digits"
        );
        assert_eq!(
            MemberError::MissingField("Batch").to_string(),
            "Batch is required"
        );
        assert_eq!(
            MemberError::Overpaid.to_string(),
            "Amount paid cannot exceed total amount"
        );
    }

    #[test]
    fn test_non_finite_amount_display() {
        assert_eq!(
            MemberError::NonFiniteAmount.to_string(),
            "Amounts must be finite numbers"
        );
    }

    #[test]
    fn test_unknown_status_filter_display() {
        assert_eq!(
            MemberError::UnknownStatusFilter("paused".to_string()).to_string(),
            "Unknown status filter: paused"
        );
    }
}
