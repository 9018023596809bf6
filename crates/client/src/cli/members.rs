//! Member CLI arguments.

use chrono::NaiveDate;
use clap::Args;
use gymdesk_core::member::MemberDraft;

/// Fields for registering a member.
#[derive(Debug, Clone, Args)]
pub struct MemberArgs {
    /// Full name.
    #[arg(long)]
    pub name: String,
    /// Membership number, e.g. 007.
    #[arg(long)]
    pub member_code: String,
    /// Ten-digit mobile number.
    #[arg(long)]
    pub mobile: String,
    /// Training type.
    #[arg(long, default_value = "General Training")]
    pub training_type: String,
    /// Postal address.
    #[arg(long)]
    pub address: String,
    /// Identity document shown at registration.
    #[arg(long)]
    pub id_proof: String,
    /// Training batch.
    #[arg(long)]
    pub batch: String,
    /// Plan label, e.g. "3 months".
    #[arg(long)]
    pub plan_type: String,
    /// Purchase date (YYYY-MM-DD).
    #[arg(long)]
    pub purchase_date: NaiveDate,
    /// Expiry date (YYYY-MM-DD).
    #[arg(long)]
    pub expiry_date: NaiveDate,
    /// Plan price.
    #[arg(long)]
    pub total_amount: f64,
    /// Amount paid so far.
    #[arg(long, default_value = "0")]
    pub amount_paid: f64,
    /// Free-form payment notes.
    #[arg(long, default_value = "")]
    pub payment_details: String,
    /// Profile picture URL.
    #[arg(long)]
    pub profile_picture: Option<String>,
}

impl From<MemberArgs> for MemberDraft {
    fn from(args: MemberArgs) -> Self {
        MemberDraft {
            name: args.name,
            member_code: args.member_code,
            mobile: args.mobile,
            training_type: args.training_type,
            address: args.address,
            id_proof: args.id_proof,
            batch: args.batch,
            plan_type: args.plan_type,
            purchase_date: args.purchase_date,
            expiry_date: args.expiry_date,
            total_amount: args.total_amount,
            amount_paid: args.amount_paid,
            payment_details: args.payment_details,
            profile_picture: args.profile_picture,
        }
    }
}

/// Optional edits to an existing member. Unset fields keep their value.
#[derive(Debug, Clone, Default, Args)]
pub struct MemberChanges {
    /// New name.
    #[arg(long)]
    pub name: Option<String>,
    /// New membership number.
    #[arg(long)]
    pub member_code: Option<String>,
    /// New mobile number.
    #[arg(long)]
    pub mobile: Option<String>,
    /// New training type.
    #[arg(long)]
    pub training_type: Option<String>,
    /// New address.
    #[arg(long)]
    pub address: Option<String>,
    /// New identity document.
    #[arg(long)]
    pub id_proof: Option<String>,
    /// New batch.
    #[arg(long)]
    pub batch: Option<String>,
    /// New plan label.
    #[arg(long)]
    pub plan_type: Option<String>,
    /// New purchase date.
    #[arg(long)]
    pub purchase_date: Option<NaiveDate>,
    /// New expiry date.
    #[arg(long)]
    pub expiry_date: Option<NaiveDate>,
    /// New plan price.
    #[arg(long)]
    pub total_amount: Option<f64>,
    /// New amount paid.
    #[arg(long)]
    pub amount_paid: Option<f64>,
    /// New payment notes.
    #[arg(long)]
    pub payment_details: Option<String>,
    /// New profile picture URL.
    #[arg(long)]
    pub profile_picture: Option<String>,
}

impl MemberChanges {
    /// Overwrites the draft's fields with every change that was given.
    pub fn apply(self, draft: &mut MemberDraft) {
        set(&mut draft.name, self.name);
        set(&mut draft.member_code, self.member_code);
        set(&mut draft.mobile, self.mobile);
        set(&mut draft.training_type, self.training_type);
        set(&mut draft.address, self.address);
        set(&mut draft.id_proof, self.id_proof);
        set(&mut draft.batch, self.batch);
        set(&mut draft.plan_type, self.plan_type);
        set(&mut draft.purchase_date, self.purchase_date);
        set(&mut draft.expiry_date, self.expiry_date);
        set(&mut draft.total_amount, self.total_amount);
        set(&mut draft.amount_paid, self.amount_paid);
        set(&mut draft.payment_details, self.payment_details);
        if self.profile_picture.is_some() {
            draft.profile_picture = self.profile_picture;
        }
    }
}

/// A new membership period with its payment.
#[derive(Debug, Clone, Args)]
pub struct RenewArgs {
    /// Start of the new period (YYYY-MM-DD).
    #[arg(long)]
    pub purchase_date: NaiveDate,
    /// End of the new period (YYYY-MM-DD).
    #[arg(long)]
    pub expiry_date: NaiveDate,
    /// Price of the new plan.
    #[arg(long)]
    pub total_amount: f64,
    /// Amount paid for the new plan.
    #[arg(long, default_value = "0")]
    pub amount_paid: f64,
    /// New plan label. Keeps the current one when omitted.
    #[arg(long)]
    pub plan_type: Option<String>,
    /// Payment notes for the renewal.
    #[arg(long)]
    pub payment_details: Option<String>,
}

impl RenewArgs {
    /// Replaces the draft's period and payment with the renewal's.
    pub fn apply(self, draft: &mut MemberDraft) {
        draft.purchase_date = self.purchase_date;
        draft.expiry_date = self.expiry_date;
        draft.total_amount = self.total_amount;
        draft.amount_paid = self.amount_paid;
        set(&mut draft.plan_type, self.plan_type);
        set(&mut draft.payment_details, self.payment_details);
    }
}

fn set<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}
