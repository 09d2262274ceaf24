//! Fixed names shared between the workflow documents and the synthesized stack.

/// Marker written for "serve at the hosted zone root".
pub const APEX_MARKER: &str = "@";
/// Inputs accepted as the apex marker.
pub const APEX_SENTINELS: [&str; 2] = [APEX_MARKER, "root"];

/// Returns `true` when `label` means "no subdomain".
#[must_use]
pub fn is_apex(label: &str) -> bool {
    APEX_SENTINELS.iter().any(|s| s.eq_ignore_ascii_case(label.trim()))
}

pub mod anchors {
    pub const PROJECT_ENV: &str = "PROJECT_ENV";
    pub const PROJECT_KEY: &str = "PROJECT_KEY";
    pub const PROJECT_NONCE: &str = "PROJECT_NONCE";
    pub const API_HOSTED_ZONE: &str = "CDK_ENV_API_HOSTED_ZONE";
    pub const WEB_HOSTED_ZONE: &str = "CDK_ENV_WEB_HOSTED_ZONE";
    pub const API_SUBDOMAIN: &str = "CDK_ENV_API_SUBDOMAIN";
    pub const WEB_SUBDOMAIN: &str = "CDK_ENV_WEB_SUBDOMAIN";
    pub const PROJECT_SPONSOR: &str = "PROJECT_SPONSOR";
    pub const PROJECT_SERVICE: &str = "PROJECT_SERVICE";
    pub const SERVICE_TEAM: &str = "SERVICE_TEAM";
    pub const SERVICE_EMAIL: &str = "SERVICE_EMAIL";

    /// Trigger list labels.
    pub const TAGS_LABEL: &str = "tags";
    pub const BRANCHES_LABEL: &str = "branches";
}

pub mod tags {
    pub const BUILD_TYPE: &str = "buildType";
    pub const ROLE: &str = "role";
}

pub mod roles {
    pub const API: &str = "api";
    pub const HOSTING: &str = "hosting";
    pub const NETWORKING: &str = "networking";
}

/// Variables the compute unit receives from the synthesis environment when set.
pub const FUNCTION_PASSTHROUGH_VARS: [&str; 11] = [
    "LOG_LEVEL",
    "MODULE_LOGGER",
    "MODULE_LOG_LEVEL",
    "MONGODB_URI",
    "PROJECT_COMMIT",
    anchors::PROJECT_ENV,
    anchors::PROJECT_KEY,
    "PROJECT_SECRET",
    anchors::PROJECT_SERVICE,
    anchors::PROJECT_SPONSOR,
    "SECRET_MONGODB_URI",
];
