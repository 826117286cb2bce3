use serde::{Deserialize, Serialize};

/// Local state of the tenant settings data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSettingsDataSourceModel {
    /// Synthetic, assigned at read time; has no meaning remotely
    pub id: String,
    pub walk_me_opt_out: bool,
    pub disable_nps_comments_reachout: bool,
    pub disable_newsletter_sendout: bool,
    pub disable_environment_creation_by_non_admin_users: bool,
    pub disable_portals_creation_by_non_admin_users: bool,
    pub disable_survey_feedback: bool,
    pub disable_trial_environment_creation_by_non_admin_users: bool,
    pub disable_capacity_allocation_by_environment_admins: bool,
    pub disable_support_tickets_visible_by_all_users: bool,
    pub power_platform: PowerPlatformSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerPlatformSettings {
    pub search: SearchSettings,
    pub teams_integration: TeamsIntegrationSettings,
    pub power_apps: PowerAppsSettings,
    pub power_automate: PowerAutomateSettings,
    pub environments: EnvironmentsSettings,
    pub governance: GovernanceSettings,
    pub licensing: LicensingSettings,
    pub power_pages: PowerPagesSettings,
    pub champions: ChampionsSettings,
    pub intelligence: IntelligenceSettings,
    pub model_experimentation: ModelExperimentationSettings,
    pub catalog_settings: CatalogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub disable_docs_search: bool,
    pub disable_community_search: bool,
    pub disable_bing_video_search: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsIntegrationSettings {
    pub share_with_colleagues_user_limit: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerAppsSettings {
    pub disable_share_with_everyone: bool,
    pub enable_guests_to_make: bool,
    pub disable_members_indicator: bool,
    pub disable_maker_match: bool,
    pub disable_unused_license_assignment: bool,
    pub disable_create_from_image: bool,
    pub disable_create_from_figma: bool,
    pub disable_connection_sharing_with_everyone: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerAutomateSettings {
    pub disable_copilot: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentsSettings {
    pub disable_preferred_data_location_for_teams_environment: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceSettings {
    pub disable_admin_digest: bool,
    pub disable_developer_environment_creation_by_non_admin_users: bool,
    pub enable_default_environment_routing: bool,
    pub policy: PolicySettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySettings {
    pub enable_desktop_flow_data_policy_management: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensingSettings {
    pub disable_billing_policy_creation_by_non_admin_users: bool,
    pub enable_tenant_capacity_report_for_environment_admins: bool,
    pub storage_capacity_consumption_warning_threshold: i64,
    pub enable_tenant_licensing_report_for_environment_admins: bool,
    pub disable_use_of_unassigned_ai_builder_credits: bool,
}

/// Serializes as `{}`, never as null
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerPagesSettings {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionsSettings {
    pub disable_champions_invitation_reachout: bool,
    pub disable_skills_match_invitation_reachout: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelligenceSettings {
    pub disable_copilot: bool,
    pub enable_open_ai_bot_publishing: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelExperimentationSettings {
    pub enable_model_data_sharing: bool,
    pub disable_data_logging: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    pub power_catalog_audience_setting: String,
}
