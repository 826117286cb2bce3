use crate::provider::schema::{Attribute, AttributeType, Schema};

pub fn connection_schema() -> Schema {
    Schema::new(
        "Manages a \"Connection\"",
        "Manages a [Connection](https://learn.microsoft.com/en-us/power-apps/maker/\
         canvas-apps/add-manage-connections). A connection integrates an external \
         data source or service with the apps and flows of an environment.",
        vec![
            (
                "id",
                Attribute::computed_string("Unique connection id").use_state_for_unknown(),
            ),
            (
                "environment_id",
                Attribute::required_string("Environment id where the connection is to be created")
                    .requires_replace(),
            ),
            (
                "name",
                Attribute::required_string(
                    "Name of the connector the connection belongs to, e.g. `shared_sql`",
                )
                .requires_replace(),
            ),
            (
                "display_name",
                Attribute::optional_computed_string("Display name of the connection"),
            ),
            (
                "status",
                Attribute::computed_list(AttributeType::String, "List of connection statuses"),
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::connection::ConnectionResourceModel;

    #[test]
    fn test_schema_matches_state_layout() {
        let state = serde_json::to_value(ConnectionResourceModel::default()).unwrap();
        assert!(connection_schema().shape_mismatches(&state).is_empty());
    }

    #[test]
    fn test_addressing_attributes_force_replacement() {
        let schema = connection_schema();
        let replacing: Vec<&str> = schema
            .attributes
            .iter()
            .filter(|(_, attribute)| attribute.requires_replace)
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(replacing, vec!["environment_id", "name"]);
        assert!(!schema.attribute("display_name").unwrap().requires_replace);
    }
}
