//! HTTP client for the remote inChurch/Ampeli API
//!
//! Wraps the remote member/authentication service behind typed methods:
//!
//! - **auth**: register/login with local precondition checks and a fixed
//!   set of outcome codes
//! - **users**: user CRUD and lookups
//! - **members**: member CRUD plus the paginated listing the synchronizer
//!   pages through
//! - **recommendations**: LLM recommendation endpoints
//!
//! Transport failures and non-2xx statuses surface as [`ClientError`]
//! variants keyed by status code; nothing in this crate inspects error
//! message text.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod members;
pub mod recommendations;
pub mod types;
pub mod users;

pub use auth::{AuthErrorKind, AuthOutcome};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::AmpeliClient;
pub use types::{
    RemoteInterest, RemoteMember, RemoteMemberPage, RemoteParticipation, RemoteUser,
};
