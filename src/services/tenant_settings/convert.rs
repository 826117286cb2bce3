//! DTO to state conversion for tenant settings
//!
//! One `From` impl per settings group; the top-level conversion is their
//! composition. Conversion is total and pure: the same DTO always yields the
//! same state, which is what lets the engine recognise a no-op read.

use super::dto::*;
use super::models::*;

impl From<&SearchSettingsDto> for SearchSettings {
    fn from(dto: &SearchSettingsDto) -> Self {
        Self {
            disable_docs_search: dto.disable_docs_search,
            disable_community_search: dto.disable_community_search,
            disable_bing_video_search: dto.disable_bing_video_search,
        }
    }
}

impl From<&TeamsIntegrationSettingsDto> for TeamsIntegrationSettings {
    fn from(dto: &TeamsIntegrationSettingsDto) -> Self {
        Self {
            share_with_colleagues_user_limit: dto.share_with_colleagues_user_limit,
        }
    }
}

impl From<&PowerAppsSettingsDto> for PowerAppsSettings {
    fn from(dto: &PowerAppsSettingsDto) -> Self {
        Self {
            disable_share_with_everyone: dto.disable_share_with_everyone,
            enable_guests_to_make: dto.enable_guests_to_make,
            disable_members_indicator: dto.disable_members_indicator,
            disable_maker_match: dto.disable_maker_match,
            disable_unused_license_assignment: dto.disable_unused_license_assignment,
            disable_create_from_image: dto.disable_create_from_image,
            disable_create_from_figma: dto.disable_create_from_figma,
            disable_connection_sharing_with_everyone: dto.disable_connection_sharing_with_everyone,
        }
    }
}

impl From<&PowerAutomateSettingsDto> for PowerAutomateSettings {
    fn from(dto: &PowerAutomateSettingsDto) -> Self {
        Self {
            disable_copilot: dto.disable_copilot,
        }
    }
}

impl From<&EnvironmentsSettingsDto> for EnvironmentsSettings {
    fn from(dto: &EnvironmentsSettingsDto) -> Self {
        Self {
            disable_preferred_data_location_for_teams_environment: dto
                .disable_preferred_data_location_for_teams_environment,
        }
    }
}

impl From<&PolicySettingsDto> for PolicySettings {
    fn from(dto: &PolicySettingsDto) -> Self {
        Self {
            enable_desktop_flow_data_policy_management: dto
                .enable_desktop_flow_data_policy_management,
        }
    }
}

impl From<&GovernanceSettingsDto> for GovernanceSettings {
    fn from(dto: &GovernanceSettingsDto) -> Self {
        Self {
            disable_admin_digest: dto.disable_admin_digest,
            disable_developer_environment_creation_by_non_admin_users: dto
                .disable_developer_environment_creation_by_non_admin_users,
            enable_default_environment_routing: dto.enable_default_environment_routing,
            policy: PolicySettings::from(&dto.policy),
        }
    }
}

impl From<&LicensingSettingsDto> for LicensingSettings {
    fn from(dto: &LicensingSettingsDto) -> Self {
        Self {
            disable_billing_policy_creation_by_non_admin_users: dto
                .disable_billing_policy_creation_by_non_admin_users,
            enable_tenant_capacity_report_for_environment_admins: dto
                .enable_tenant_capacity_report_for_environment_admins,
            storage_capacity_consumption_warning_threshold: dto
                .storage_capacity_consumption_warning_threshold,
            enable_tenant_licensing_report_for_environment_admins: dto
                .enable_tenant_licensing_report_for_environment_admins,
            disable_use_of_unassigned_ai_builder_credits: dto
                .disable_use_of_unassigned_ai_builder_credits,
        }
    }
}

impl From<&PowerPagesSettingsDto> for PowerPagesSettings {
    fn from(_: &PowerPagesSettingsDto) -> Self {
        Self {}
    }
}

impl From<&ChampionsSettingsDto> for ChampionsSettings {
    fn from(dto: &ChampionsSettingsDto) -> Self {
        Self {
            disable_champions_invitation_reachout: dto.disable_champions_invitation_reachout,
            disable_skills_match_invitation_reachout: dto.disable_skills_match_invitation_reachout,
        }
    }
}

impl From<&IntelligenceSettingsDto> for IntelligenceSettings {
    fn from(dto: &IntelligenceSettingsDto) -> Self {
        Self {
            disable_copilot: dto.disable_copilot,
            enable_open_ai_bot_publishing: dto.enable_open_ai_bot_publishing,
        }
    }
}

impl From<&ModelExperimentationSettingsDto> for ModelExperimentationSettings {
    fn from(dto: &ModelExperimentationSettingsDto) -> Self {
        Self {
            enable_model_data_sharing: dto.enable_model_data_sharing,
            disable_data_logging: dto.disable_data_logging,
        }
    }
}

impl From<&CatalogSettingsDto> for CatalogSettings {
    fn from(dto: &CatalogSettingsDto) -> Self {
        Self {
            power_catalog_audience_setting: dto.power_catalog_audience_setting.clone(),
        }
    }
}

impl From<&PowerPlatformSettingsDto> for PowerPlatformSettings {
    fn from(dto: &PowerPlatformSettingsDto) -> Self {
        Self {
            search: (&dto.search).into(),
            teams_integration: (&dto.teams_integration).into(),
            power_apps: (&dto.power_apps).into(),
            power_automate: (&dto.power_automate).into(),
            environments: (&dto.environments).into(),
            governance: (&dto.governance).into(),
            licensing: (&dto.licensing).into(),
            power_pages: (&dto.power_pages).into(),
            champions: (&dto.champions).into(),
            intelligence: (&dto.intelligence).into(),
            model_experimentation: (&dto.model_experimentation).into(),
            catalog_settings: (&dto.catalog_settings).into(),
        }
    }
}

/// Convert a fetched DTO into state. The id is left empty; the data source
/// assigns one after a successful read.
pub fn convert_from_tenant_settings_dto(dto: &TenantSettingsDto) -> TenantSettingsDataSourceModel {
    TenantSettingsDataSourceModel {
        id: String::new(),
        walk_me_opt_out: dto.walk_me_opt_out,
        disable_nps_comments_reachout: dto.disable_nps_comments_reachout,
        disable_newsletter_sendout: dto.disable_newsletter_sendout,
        disable_environment_creation_by_non_admin_users: dto
            .disable_environment_creation_by_non_admin_users,
        disable_portals_creation_by_non_admin_users: dto
            .disable_portals_creation_by_non_admin_users,
        disable_survey_feedback: dto.disable_survey_feedback,
        disable_trial_environment_creation_by_non_admin_users: dto
            .disable_trial_environment_creation_by_non_admin_users,
        disable_capacity_allocation_by_environment_admins: dto
            .disable_capacity_allocation_by_environment_admins,
        disable_support_tickets_visible_by_all_users: dto
            .disable_support_tickets_visible_by_all_users,
        power_platform: (&dto.power_platform).into(),
    }
}
