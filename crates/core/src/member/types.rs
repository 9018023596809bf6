use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::MemberError;
use crate::money::calculate_due;
use crate::serde::deserialize_optional_string;

/// A gym customer record with its membership period and payment state.
///
/// `id` is assigned client-side at registration. Records that went through
/// the store also carry `_id`, the store-assigned identifier; when both are
/// present `_id` is the authoritative one (see
/// [`crate::storage::resolve_store_id`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default)]
    pub id: String,
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub secondary_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_picture: Option<String>,
    pub name: String,
    /// Caller-assigned membership number, intended unique.
    #[serde(rename = "mId")]
    pub member_code: String,
    pub mobile: String,
    pub training_type: String,
    pub address: String,
    pub id_proof: String,
    pub batch: String,
    pub plan_type: String,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub total_amount: f64,
    pub amount_paid: f64,
    #[serde(default)]
    pub due_amount: f64,
    #[serde(default)]
    pub payment_details: String,
}

impl Member {
    /// Reopens this record as an editable draft (used by edit and renew).
    pub fn to_draft(&self) -> MemberDraft {
        MemberDraft {
            name: self.name.clone(),
            member_code: self.member_code.clone(),
            mobile: self.mobile.clone(),
            training_type: self.training_type.clone(),
            address: self.address.clone(),
            id_proof: self.id_proof.clone(),
            batch: self.batch.clone(),
            plan_type: self.plan_type.clone(),
            purchase_date: self.purchase_date,
            expiry_date: self.expiry_date,
            total_amount: self.total_amount,
            amount_paid: self.amount_paid,
            payment_details: self.payment_details.clone(),
            profile_picture: self.profile_picture.clone(),
        }
    }

    /// Replaces every editable field with the draft's, keeping both
    /// identifiers, and recomputes the due amount.
    pub fn apply_draft(&mut self, draft: MemberDraft) {
        let secondary_id = self.secondary_id.take();
        let id = std::mem::take(&mut self.id);
        *self = draft.into_member(id);
        self.secondary_id = secondary_id;
    }

    /// Sets the payment amounts and recomputes the due amount.
    pub fn set_payment(&mut self, total_amount: f64, amount_paid: f64) {
        self.total_amount = total_amount;
        self.amount_paid = amount_paid;
        self.due_amount = calculate_due(total_amount, amount_paid);
    }
}

/// The editable part of a member: everything except identifiers and the
/// derived due amount.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDraft {
    pub name: String,
    pub member_code: String,
    pub mobile: String,
    pub training_type: String,
    pub address: String,
    pub id_proof: String,
    pub batch: String,
    pub plan_type: String,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub total_amount: f64,
    pub amount_paid: f64,
    pub payment_details: String,
    pub profile_picture: Option<String>,
}

impl MemberDraft {
    /// Builds a member with the given client-side id. The due amount is
    /// always derived, never taken from the caller.
    pub fn into_member(self, id: impl Into<String>) -> Member {
        let due_amount = calculate_due(self.total_amount, self.amount_paid);
        Member {
            id: id.into(),
            secondary_id: None,
            profile_picture: self.profile_picture,
            name: self.name,
            member_code: self.member_code,
            mobile: self.mobile,
            training_type: self.training_type,
            address: self.address,
            id_proof: self.id_proof,
            batch: self.batch,
            plan_type: self.plan_type,
            purchase_date: self.purchase_date,
            expiry_date: self.expiry_date,
            total_amount: self.total_amount,
            amount_paid: self.amount_paid,
            due_amount,
            payment_details: self.payment_details,
        }
    }
}

/// Derived membership state. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Expiring,
    Expired,
}

impl MemberStatus {
    /// Returns the lowercase label used on the wire and in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Expiring => "expiring",
            MemberStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status filter for member listings. `All` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(MemberStatus),
}

impl StatusFilter {
    /// Returns true if a member with `status` passes this filter.
    pub fn matches(&self, status: MemberStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = MemberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Only(MemberStatus::Active)),
            "expiring" => Ok(StatusFilter::Only(MemberStatus::Expiring)),
            "expired" => Ok(StatusFilter::Only(MemberStatus::Expired)),
            other => Err(MemberError::UnknownStatusFilter(other.to_string())),
        }
    }
}

impl From<Option<MemberStatus>> for StatusFilter {
    fn from(status: Option<MemberStatus>) -> Self {
        status.map_or(StatusFilter::All, StatusFilter::Only)
    }
}

/// Dashboard aggregate, recomputed on demand from the member collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_members: usize,
    pub active_members: usize,
    pub expiring_members: usize,
    pub expired_members: usize,
    /// Sum of `amountPaid` across all members.
    pub total_income: f64,
}
