pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod provider;
pub mod services;

pub use error::{Diagnostic, ProviderError, Severity};
pub use provider::{PlanAction, ProviderClient, ProviderData, ReadOutcome};
pub use services::connection::ConnectionResource;
pub use services::tenant_settings::TenantSettingsDataSource;
