//! Client side of Learn Words: the HTTP API client and the Admin and Learn
//! views built on `learn-words-core`.

pub mod admin;
pub mod api;
pub mod learn;

pub use admin::AdminView;
pub use api::{ApiClient, ClientError, DEFAULT_API_URL};
pub use learn::LearnView;
