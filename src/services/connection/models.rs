use serde::{Deserialize, Serialize};

/// Local state of a connection resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionResourceModel {
    /// Assigned by the service on create; `None` in a plan until then
    pub id: Option<String>,
    /// Connector name, e.g. `shared_sql`
    pub name: String,
    pub environment_id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub status: Vec<String>,
}

impl ConnectionResourceModel {
    pub fn new(environment_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// The fields of a connection the service is authoritative for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRemoteState {
    pub id: String,
    /// `None` when the response does not name its connector
    pub name: Option<String>,
    pub display_name: String,
    pub status: Vec<String>,
}
