//! Member synchronization
//!
//! Reconciles the local SQLite mirror against the remote API's paginated
//! member listing: field mapping, status/date normalization, the derived
//! engagement score, and upserts of members, interests and participations.

pub mod mapper;
pub mod service;

pub use service::{MemberSource, SyncService};
