use crate::provider::schema::{Attribute, Schema};

fn group(description: &str, leaves: Vec<(&str, Attribute)>) -> Attribute {
    Attribute::computed_nested(description, leaves)
}

fn flag(description: &str) -> Attribute {
    Attribute::computed_bool(description)
}

/// Every attribute is computed; the data source never accepts input
pub fn tenant_settings_schema() -> Schema {
    Schema::new(
        "Power Platform Tenant Settings Data Source",
        "Power Platform Tenant Settings Data Source",
        vec![
            ("id", Attribute::computed_string("Id")),
            ("walk_me_opt_out", flag("Walk Me Opt Out")),
            ("disable_nps_comments_reachout", flag("Disable NPS Comments Reachout")),
            ("disable_newsletter_sendout", flag("Disable Newsletter Sendout")),
            (
                "disable_environment_creation_by_non_admin_users",
                flag("Disable Environment Creation By Non Admin Users"),
            ),
            (
                "disable_portals_creation_by_non_admin_users",
                flag("Disable Portals Creation By Non Admin Users"),
            ),
            ("disable_survey_feedback", flag("Disable Survey Feedback")),
            (
                "disable_trial_environment_creation_by_non_admin_users",
                flag("Disable Trial Environment Creation By Non Admin Users"),
            ),
            (
                "disable_capacity_allocation_by_environment_admins",
                flag("Disable Capacity Allocation By Environment Admins"),
            ),
            (
                "disable_support_tickets_visible_by_all_users",
                flag("Disable Support Tickets Visible By All Users"),
            ),
            ("power_platform", power_platform()),
        ],
    )
}

fn power_platform() -> Attribute {
    group(
        "Power Platform",
        vec![
            (
                "search",
                group(
                    "Search",
                    vec![
                        ("disable_docs_search", flag("Disable Docs Search")),
                        ("disable_community_search", flag("Disable Community Search")),
                        ("disable_bing_video_search", flag("Disable Bing Video Search")),
                    ],
                ),
            ),
            (
                "teams_integration",
                group(
                    "Teams Integration",
                    vec![(
                        "share_with_colleagues_user_limit",
                        Attribute::computed_int64("Share With Colleagues User Limit"),
                    )],
                ),
            ),
            (
                "power_apps",
                group(
                    "Power Apps",
                    vec![
                        ("disable_share_with_everyone", flag("Disable Share With Everyone")),
                        ("enable_guests_to_make", flag("Enable Guests To Make")),
                        ("disable_members_indicator", flag("Disable Members Indicator")),
                        ("disable_maker_match", flag("Disable Maker Match")),
                        (
                            "disable_unused_license_assignment",
                            flag("Disable Unused License Assignment"),
                        ),
                        ("disable_create_from_image", flag("Disable Create From Image")),
                        ("disable_create_from_figma", flag("Disable Create From Figma")),
                        (
                            "disable_connection_sharing_with_everyone",
                            flag("Disable Connection Sharing With Everyone"),
                        ),
                    ],
                ),
            ),
            (
                "power_automate",
                group("Power Automate", vec![("disable_copilot", flag("Disable Copilot"))]),
            ),
            (
                "environments",
                group(
                    "Environments",
                    vec![(
                        "disable_preferred_data_location_for_teams_environment",
                        flag("Disable Preferred Data Location For Teams Environment"),
                    )],
                ),
            ),
            (
                "governance",
                group(
                    "Governance",
                    vec![
                        ("disable_admin_digest", flag("Disable Admin Digest")),
                        (
                            "disable_developer_environment_creation_by_non_admin_users",
                            flag("Disable Developer Environment Creation By Non Admin Users"),
                        ),
                        (
                            "enable_default_environment_routing",
                            flag("Enable Default Environment Routing"),
                        ),
                        (
                            "policy",
                            group(
                                "Policy",
                                vec![(
                                    "enable_desktop_flow_data_policy_management",
                                    flag("Enable Desktop Flow Data Policy Management"),
                                )],
                            ),
                        ),
                    ],
                ),
            ),
            (
                "licensing",
                group(
                    "Licensing",
                    vec![
                        (
                            "disable_billing_policy_creation_by_non_admin_users",
                            flag("Disable Billing Policy Creation By Non Admin Users"),
                        ),
                        (
                            "enable_tenant_capacity_report_for_environment_admins",
                            flag("Enable Tenant Capacity Report For Environment Admins"),
                        ),
                        (
                            "storage_capacity_consumption_warning_threshold",
                            Attribute::computed_int64(
                                "Storage Capacity Consumption Warning Threshold",
                            ),
                        ),
                        (
                            "enable_tenant_licensing_report_for_environment_admins",
                            flag("Enable Tenant Licensing Report For Environment Admins"),
                        ),
                        (
                            "disable_use_of_unassigned_ai_builder_credits",
                            flag("Disable Use Of Unassigned AI Builder Credits"),
                        ),
                    ],
                ),
            ),
            ("power_pages", group("Power Pages", vec![])),
            (
                "champions",
                group(
                    "Champions",
                    vec![
                        (
                            "disable_champions_invitation_reachout",
                            flag("Disable Champions Invitation Reachout"),
                        ),
                        (
                            "disable_skills_match_invitation_reachout",
                            flag("Disable Skills Match Invitation Reachout"),
                        ),
                    ],
                ),
            ),
            (
                "intelligence",
                group(
                    "Intelligence",
                    vec![
                        ("disable_copilot", flag("Disable Copilot")),
                        ("enable_open_ai_bot_publishing", flag("Enable Open AI Bot Publishing")),
                    ],
                ),
            ),
            (
                "model_experimentation",
                group(
                    "Model Experimentation",
                    vec![
                        ("enable_model_data_sharing", flag("Enable Model Data Sharing")),
                        ("disable_data_logging", flag("Disable Data Logging")),
                    ],
                ),
            ),
            (
                "catalog_settings",
                group(
                    "Catalog Settings",
                    vec![(
                        "power_catalog_audience_setting",
                        Attribute::computed_string("Power Catalog Audience Setting"),
                    )],
                ),
            ),
        ],
    )
}
