mod common;

use std::sync::Arc;

use common::{
    FailOn, FakeConnectionsClient, FakeTenantSettingsClient, StoredConnection, provider_data,
};
use powerplatform_provider::provider::ProviderData;
use powerplatform_provider::services::connection::{ConnectionResource, ConnectionResourceModel};
use powerplatform_provider::{PlanAction, ProviderError, ReadOutcome};

fn configured() -> (ConnectionResource, Arc<FakeConnectionsClient>) {
    let connections = Arc::new(FakeConnectionsClient::new());
    let mut resource = ConnectionResource::new();
    resource
        .configure(Some(&provider_data(
            Arc::new(FakeTenantSettingsClient::default()),
            connections.clone(),
        )))
        .unwrap();
    (resource, connections)
}

fn plan() -> ConnectionResourceModel {
    ConnectionResourceModel::new("env1", "shared_sql").with_display_name("My DB")
}

#[test]
fn test_type_name_is_prefixed() {
    assert_eq!(ConnectionResource::new().type_name(), "powerplatform_connection");
}

#[test]
fn test_configure_rejects_foreign_provider_data() {
    let mut resource = ConnectionResource::new();
    let err = resource.configure(Some(&ProviderData::new(7u32))).unwrap_err();

    assert!(matches!(err, ProviderError::Configuration { .. }));
    assert!(!resource.is_configured());
}

#[tokio::test]
async fn test_create_before_configure_fails() {
    let err = ConnectionResource::new().create(plan()).await.unwrap_err();
    assert!(matches!(err, ProviderError::NotConfigured { .. }));
}

#[tokio::test]
async fn test_create_then_read_round_trip() {
    let (resource, connections) = configured();

    let created = resource.create(plan()).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("conn1"));
    assert_eq!(created.name, "shared_sql");
    assert_eq!(created.environment_id, "env1");
    assert_eq!(created.display_name.as_deref(), Some("My DB"));
    assert_eq!(created.status, vec!["Connected".to_string()]);

    let payload = connections.created.lock().unwrap()[0].clone();
    assert_eq!(payload.properties.display_name, "My DB");
    assert_eq!(
        payload.properties.environment.id,
        "/providers/Microsoft.PowerApps/environments/env1"
    );

    let read = resource.read(created.clone()).await.unwrap();
    assert_eq!(read, ReadOutcome::Found(created));
}

#[tokio::test]
async fn test_create_without_display_name_sends_empty() {
    let (resource, connections) = configured();

    let created = resource
        .create(ConnectionResourceModel::new("env1", "shared_sql"))
        .await
        .unwrap();

    assert_eq!(connections.created.lock().unwrap()[0].properties.display_name, "");
    assert_eq!(created.display_name.as_deref(), Some(""));
}

#[tokio::test]
async fn test_create_failure_produces_no_state() {
    let (resource, connections) = configured();
    connections.fail_on(FailOn::Create);

    let err = resource.create(plan()).await.unwrap_err();
    assert!(matches!(err, ProviderError::RemoteCreate { .. }));
    assert_eq!(err.to_diagnostic().summary, "Failed to create powerplatform_connection");
    assert!(connections.connections.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_read_reflects_drift() {
    let (resource, connections) = configured();
    let created = resource.create(plan()).await.unwrap();

    connections.insert(
        "conn1",
        StoredConnection {
            environment_id: "env1".into(),
            connector_name: "shared_sql".into(),
            display_name: "Renamed".into(),
            statuses: vec!["Error".into()],
        },
    );

    let state = resource.read(created).await.unwrap().found().unwrap();
    assert_eq!(state.display_name.as_deref(), Some("Renamed"));
    assert_eq!(state.status, vec!["Error".to_string()]);
}

#[tokio::test]
async fn test_read_of_deleted_connection_removes_it() {
    let (resource, connections) = configured();
    let created = resource.create(plan()).await.unwrap();
    connections.remove("conn1");

    let outcome = resource.read(created).await.unwrap();
    assert!(outcome.is_removed());
}

#[tokio::test]
async fn test_read_failure_keeps_error() {
    let (resource, connections) = configured();
    let created = resource.create(plan()).await.unwrap();
    connections.fail_on(FailOn::Get);

    let err = resource.read(created).await.unwrap_err();
    assert!(matches!(err, ProviderError::RemoteRead { .. }));
}

#[tokio::test]
async fn test_read_without_id_fails() {
    let (resource, _) = configured();
    let err = resource.read(plan()).await.unwrap_err();
    assert!(matches!(err, ProviderError::MissingAttribute { .. }));
}

#[tokio::test]
async fn test_update_changes_display_name_in_place() {
    let (resource, connections) = configured();
    let created = resource.create(plan()).await.unwrap();

    let mut next = created.clone();
    next.id = None;
    next.display_name = Some("Prod DB".into());

    assert_eq!(resource.plan_change(Some(&created), &next), PlanAction::Update);

    let updated = resource.update(next, &created).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.environment_id, "env1");
    assert_eq!(updated.name, "shared_sql");
    assert_eq!(updated.display_name.as_deref(), Some("Prod DB"));
    assert_eq!(connections.connections.lock().unwrap()["conn1"].display_name, "Prod DB");
}

#[tokio::test]
async fn test_update_failure_leaves_remote_untouched() {
    let (resource, connections) = configured();
    let created = resource.create(plan()).await.unwrap();
    connections.fail_on(FailOn::Update);

    let next = created.clone().with_display_name("Prod DB");
    let err = resource.update(next, &created).await.unwrap_err();

    assert!(matches!(err, ProviderError::RemoteUpdate { .. }));
    assert_eq!(connections.connections.lock().unwrap()["conn1"].display_name, "My DB");
}

#[tokio::test]
async fn test_changing_environment_forces_replacement() {
    let (resource, _) = configured();
    let created = resource.create(plan()).await.unwrap();

    let mut moved = created.clone();
    moved.environment_id = "env2".into();

    assert_eq!(
        resource.plan_change(Some(&created), &moved),
        PlanAction::Replace(vec!["environment_id".to_string()])
    );

    let err = resource.update(moved, &created).await.unwrap_err();
    assert!(matches!(
        err,
        ProviderError::RequiresReplace { ref attribute, .. } if attribute == "environment_id"
    ));
}

#[tokio::test]
async fn test_changing_connector_forces_replacement() {
    let (resource, _) = configured();
    let created = resource.create(plan()).await.unwrap();

    let mut other = created.clone();
    other.name = "shared_office365".into();

    assert_eq!(
        resource.plan_change(Some(&created), &other),
        PlanAction::Replace(vec!["name".to_string()])
    );
}

#[tokio::test]
async fn test_plan_without_prior_creates_and_unchanged_is_noop() {
    let (resource, _) = configured();
    assert_eq!(resource.plan_change(None, &plan()), PlanAction::Create);

    let created = resource.create(plan()).await.unwrap();
    let mut unchanged = created.clone();
    unchanged.display_name = None;
    assert_eq!(resource.plan_change(Some(&created), &unchanged), PlanAction::NoOp);
    assert_eq!(resource.plan_change(Some(&created), &created), PlanAction::NoOp);
}

#[tokio::test]
async fn test_delete_removes_remote_connection() {
    let (resource, connections) = configured();
    let created = resource.create(plan()).await.unwrap();

    resource.delete(&created).await.unwrap();
    assert!(!connections.contains("conn1"));
    assert!(resource.read(created).await.unwrap().is_removed());
}

#[tokio::test]
async fn test_delete_failure_retains_state() {
    let (resource, connections) = configured();
    let created = resource.create(plan()).await.unwrap();
    connections.fail_on(FailOn::Delete);

    let err = resource.delete(&created).await.unwrap_err();
    assert!(matches!(err, ProviderError::RemoteDelete { .. }));
    assert!(connections.contains("conn1"));

    // Caller still holds the state and can retry
    connections.clear_failure();
    resource.delete(&created).await.unwrap();
    assert!(!connections.contains("conn1"));
}

#[tokio::test]
async fn test_import_then_read_matches_created_state() {
    let (resource, _) = configured();
    let created = resource.create(plan()).await.unwrap();

    let seed = resource.import_state("env1/shared_sql/conn1").unwrap();
    assert_eq!(seed.id.as_deref(), Some("conn1"));
    assert_eq!(seed.display_name, None);

    let imported = resource.read(seed).await.unwrap().found().unwrap();
    assert_eq!(imported, created);
}

#[test]
fn test_import_rejects_malformed_ids() {
    let resource = ConnectionResource::new();
    for id in ["", "env1", "env1/shared_sql", "env1//conn1", "a/b/c/d"] {
        let err = resource.import_state(id).unwrap_err();
        assert!(
            matches!(err, ProviderError::InvalidImportId { .. }),
            "expected {:?} to be rejected",
            id
        );
    }
}

#[test]
fn test_schema_marks_addressing_fields_for_replacement() {
    let schema = ConnectionResource::new().schema();

    assert!(schema.attribute("environment_id").unwrap().requires_replace);
    assert!(schema.attribute("name").unwrap().requires_replace);
    assert!(!schema.attribute("display_name").unwrap().requires_replace);
    assert!(schema.attribute("id").unwrap().use_state_for_unknown);
}
