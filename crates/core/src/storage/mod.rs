mod error;
mod http_mapping;
mod identity;
mod traits;

pub use error::{Result, StoreError};
pub use http_mapping::{
    check_content_type, error_message, is_html_content_type, is_json_content_type,
    status_to_store_error,
};
pub use identity::{normalize_member, normalize_members, resolve_store_id, strip_secondary_id};
pub use traits::MemberStore;
