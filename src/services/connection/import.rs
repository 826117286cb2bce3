//! Compound key of a connection and its import id encoding
//!
//! An import id is `<environment_id>/<connector_name>/<connection_id>`.

use std::fmt;
use std::str::FromStr;

use super::models::ConnectionResourceModel;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionKey {
    pub environment_id: String,
    pub connector_name: String,
    pub connection_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError(pub String);

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseKeyError {}

impl ConnectionKey {
    pub const SEPARATOR: char = '/';

    pub fn new(
        environment_id: impl Into<String>,
        connector_name: impl Into<String>,
        connection_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            connector_name: connector_name.into(),
            connection_id: connection_id.into(),
        }
    }

    /// Seed state for an import; everything else is filled in by Read
    pub fn into_model(self) -> ConnectionResourceModel {
        ConnectionResourceModel::new(self.environment_id, self.connector_name)
            .with_id(self.connection_id)
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.environment_id,
            self.connector_name,
            self.connection_id,
            sep = Self::SEPARATOR
        )
    }
}

impl FromStr for ConnectionKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(Self::SEPARATOR).collect();
        let [environment_id, connector_name, connection_id] = parts.as_slice() else {
            return Err(ParseKeyError(format!(
                "expected <environment_id>/<connector_name>/<connection_id>, got {} segment(s)",
                parts.len()
            )));
        };

        if let Some(position) = [environment_id, connector_name, connection_id]
            .iter()
            .position(|segment| segment.trim().is_empty())
        {
            let field = ["environment_id", "connector_name", "connection_id"][position];
            return Err(ParseKeyError(format!("{} must not be empty", field)));
        }

        Ok(Self::new(
            environment_id.trim(),
            connector_name.trim(),
            connection_id.trim(),
        ))
    }
}
