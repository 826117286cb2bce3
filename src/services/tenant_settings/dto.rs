//! Wire shape of the `listTenantSettings` response
//!
//! Every field defaults when absent and unknown fields are ignored, so new
//! settings added by the service never break decoding. An explicit `null`
//! decodes as the zero value, for groups and leaves alike.

use serde::{Deserialize, Serialize};

use crate::services::nullable::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenantSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub walk_me_opt_out: bool,
    #[serde(rename = "disableNPSCommentsReachout", deserialize_with = "null_as_default")]
    pub disable_nps_comments_reachout: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_newsletter_sendout: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_environment_creation_by_non_admin_users: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_portals_creation_by_non_admin_users: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_survey_feedback: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_trial_environment_creation_by_non_admin_users: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_capacity_allocation_by_environment_admins: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_support_tickets_visible_by_all_users: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub power_platform: PowerPlatformSettingsDto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerPlatformSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub search: SearchSettingsDto,
    #[serde(deserialize_with = "null_as_default")]
    pub teams_integration: TeamsIntegrationSettingsDto,
    #[serde(deserialize_with = "null_as_default")]
    pub power_apps: PowerAppsSettingsDto,
    #[serde(deserialize_with = "null_as_default")]
    pub power_automate: PowerAutomateSettingsDto,
    #[serde(deserialize_with = "null_as_default")]
    pub environments: EnvironmentsSettingsDto,
    #[serde(deserialize_with = "null_as_default")]
    pub governance: GovernanceSettingsDto,
    #[serde(deserialize_with = "null_as_default")]
    pub licensing: LicensingSettingsDto,
    #[serde(deserialize_with = "null_as_default")]
    pub power_pages: PowerPagesSettingsDto,
    #[serde(deserialize_with = "null_as_default")]
    pub champions: ChampionsSettingsDto,
    #[serde(deserialize_with = "null_as_default")]
    pub intelligence: IntelligenceSettingsDto,
    #[serde(deserialize_with = "null_as_default")]
    pub model_experimentation: ModelExperimentationSettingsDto,
    #[serde(deserialize_with = "null_as_default")]
    pub catalog_settings: CatalogSettingsDto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub disable_docs_search: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_community_search: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_bing_video_search: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamsIntegrationSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub share_with_colleagues_user_limit: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerAppsSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub disable_share_with_everyone: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_guests_to_make: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_members_indicator: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_maker_match: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_unused_license_assignment: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_create_from_image: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_create_from_figma: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_connection_sharing_with_everyone: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerAutomateSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub disable_copilot: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentsSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub disable_preferred_data_location_for_teams_environment: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub disable_admin_digest: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_developer_environment_creation_by_non_admin_users: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_default_environment_routing: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub policy: PolicySettingsDto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicySettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub enable_desktop_flow_data_policy_management: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicensingSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub disable_billing_policy_creation_by_non_admin_users: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_tenant_capacity_report_for_environment_admins: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub storage_capacity_consumption_warning_threshold: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_tenant_licensing_report_for_environment_admins: bool,
    #[serde(
        rename = "disableUseOfUnassignedAIBuilderCredits",
        deserialize_with = "null_as_default"
    )]
    pub disable_use_of_unassigned_ai_builder_credits: bool,
}

/// Present in the response but carries no settings yet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerPagesSettingsDto {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionsSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub disable_champions_invitation_reachout: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_skills_match_invitation_reachout: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntelligenceSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub disable_copilot: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_open_ai_bot_publishing: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelExperimentationSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub enable_model_data_sharing: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_data_logging: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSettingsDto {
    #[serde(deserialize_with = "null_as_default")]
    pub power_catalog_audience_setting: String,
}
