//! Connection resource: full create/read/update/delete/import lifecycle

pub mod client;
pub mod convert;
pub mod dto;
pub mod import;
pub mod models;
pub mod resource;
pub mod schema;

pub use client::{ConnectionsClient, HttpConnectionsClient};
pub use convert::convert_from_connection_dto;
pub use dto::{ConnectionDto, ConnectionPayloadDto};
pub use import::ConnectionKey;
pub use models::{ConnectionRemoteState, ConnectionResourceModel};
pub use resource::ConnectionResource;
pub use schema::connection_schema;
