//! gymdesk_core - pure domain logic for gym membership management.
//!
//! Everything in this crate is free of I/O. Time enters through the
//! [`clock::Clock`] trait and the remote store through the
//! [`storage::MemberStore`] trait, both implemented by the client crate.

pub mod clock;
pub mod member;
pub mod money;
pub mod serde;
pub mod status;
pub mod storage;
