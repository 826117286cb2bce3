//! Power Platform admin API client
//!
//! Thin authenticated HTTP layer consumed by the resource controllers through
//! the per-service client traits. No retry or backoff happens here; every
//! failure is returned to the caller as an [`ApiError`].

pub mod auth;
pub mod client;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;

pub use auth::AuthManager;
pub use client::ApiClient;
pub use constants::CloudEndpoints;
pub use error::{ApiError, ApiResult};
pub use logging::{ApiLogger, RequestContext};
pub use models::{CredentialSet, TokenInfo};
