use serde::{Deserialize, Serialize};

use crate::services::nullable::null_as_default;

/// A connection as returned by the PowerApps API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionDto {
    /// Connection id
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Full resource path, ending in `/connections/<name>`
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: ConnectionPropertiesDto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionPropertiesDto {
    /// Connector path, e.g. `/providers/Microsoft.PowerApps/apis/shared_sql`
    #[serde(deserialize_with = "null_as_default")]
    pub api_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub statuses: Vec<ConnectionStatusDto>,
    pub environment: Option<ConnectionEnvironmentDto>,
    pub created_time: Option<String>,
    pub last_modified_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionStatusDto {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub target: Option<String>,
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionEnvironmentDto {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Body of the create and update calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionPayloadDto {
    pub properties: ConnectionPayloadPropertiesDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionPayloadPropertiesDto {
    pub display_name: String,
    pub environment: ConnectionPayloadEnvironmentDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionPayloadEnvironmentDto {
    /// Environment addressing path, `/providers/<namespace>/environments/<id>`
    pub id: String,
    pub name: String,
}

impl ConnectionPayloadDto {
    pub fn new(environment_id: &str, display_name: &str) -> Self {
        Self {
            properties: ConnectionPayloadPropertiesDto {
                display_name: display_name.to_string(),
                environment: ConnectionPayloadEnvironmentDto {
                    id: crate::api::constants::environment_path(environment_id),
                    name: environment_id.to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_embeds_environment_path() {
        let payload = serde_json::to_value(ConnectionPayloadDto::new("env1", "My DB")).unwrap();
        assert_eq!(
            payload,
            json!({
                "properties": {
                    "displayName": "My DB",
                    "environment": {
                        "id": "/providers/Microsoft.PowerApps/environments/env1",
                        "name": "env1"
                    }
                }
            })
        );
    }

    #[test]
    fn test_decode_connection() {
        let dto: ConnectionDto = serde_json::from_value(json!({
            "name": "4b1b8a0e",
            "id": "/providers/Microsoft.PowerApps/apis/shared_sql/connections/4b1b8a0e",
            "type": "Microsoft.PowerApps/apis/connections",
            "properties": {
                "apiId": "/providers/Microsoft.PowerApps/apis/shared_sql",
                "displayName": "My DB",
                "statuses": [{ "status": "Error", "target": "token" }],
                "environment": {
                    "id": "/providers/Microsoft.PowerApps/environments/env1",
                    "name": "env1"
                },
                "createdBy": { "id": "ignored" }
            }
        }))
        .unwrap();

        assert_eq!(dto.properties.display_name, "My DB");
        assert_eq!(dto.properties.statuses[0].status, "Error");
        assert_eq!(dto.properties.environment.unwrap().name, "env1");
    }

    #[test]
    fn test_decode_connection_with_null_fields() {
        let dto: ConnectionDto = serde_json::from_value(json!({
            "name": "c1",
            "id": null,
            "properties": {
                "apiId": null,
                "displayName": null,
                "statuses": null,
                "environment": null
            }
        }))
        .unwrap();

        assert_eq!(dto.name, "c1");
        assert_eq!(dto.id, "");
        assert_eq!(dto.properties.display_name, "");
        assert!(dto.properties.statuses.is_empty());
        assert!(dto.properties.environment.is_none());
    }
}
