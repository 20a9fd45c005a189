pub mod accounts;
pub mod context;
pub mod password;
pub mod sessions;
pub mod token;

pub use context::RequestContext;

/// Current unix time in seconds.
pub fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
