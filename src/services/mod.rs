pub mod connection;
mod nullable;
pub mod tenant_settings;
