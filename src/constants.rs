/// Store slot names. Kept identical to the keys the deployed site persists
/// under, so previously saved content stays readable.
pub const PROJECTS_SLOT: &str = "admin-projects";
pub const SKILLS_SLOT: &str = "admin-skills";
pub const SITE_CONFIG_SLOT: &str = "admin-site-config";
pub const AUTH_TOKEN_SLOT: &str = "admin-auth-token";

/// Session token issued when login succeeds with no password configured.
pub const OPEN_ACCESS_TOKEN: &str = "no-password-set";

/// Minimum length accepted when configuring the admin password.
pub const MIN_PASSWORD_LEN: usize = 6;
