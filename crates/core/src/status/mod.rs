mod cache;
mod classify;

pub use cache::{StatusCache, STATUS_CACHE_TTL_SECONDS};
pub use classify::{classify, days_until_expiry, EXPIRING_WINDOW_DAYS};
