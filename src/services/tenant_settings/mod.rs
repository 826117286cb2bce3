//! Tenant settings data source: a singleton, read-only settings tree

pub mod client;
pub mod convert;
pub mod datasource;
pub mod dto;
pub mod models;
pub mod schema;

pub use client::{HttpTenantSettingsClient, TenantSettingsClient};
pub use convert::convert_from_tenant_settings_dto;
pub use datasource::TenantSettingsDataSource;
pub use dto::TenantSettingsDto;
pub use models::TenantSettingsDataSourceModel;
pub use schema::tenant_settings_schema;
