use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Documented default record. Missing fields of the stored record resolve
/// against this in exactly one place (serde struct-level default plus
/// [`SiteConfig::resolve`]), never inline at read sites.
static DEFAULTS: Lazy<SiteConfig> = Lazy::new(|| SiteConfig {
    hero_title: String::new(),
    hero_subtitle: String::new(),
    hero_description: String::new(),
    whatsapp_number: String::new(),
    email: String::new(),
    github: String::new(),
    linkedin: String::new(),
    github_username: String::new(),
    about_title: "About Me".to_string(),
    about_description: "Developer passionate about technology and innovation. \
        I work with modern web development, Python automation and maker \
        projects with Arduino."
        .to_string(),
    cta_title: "Let's talk?".to_string(),
    cta_description: "I'm available to talk about projects, answer questions \
        or just chat about technology"
        .to_string(),
    footer_text: "Powered by open source".to_string(),
    admin_password: None,
});

/// Single record holding all site copy and contact fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_description: String,
    pub whatsapp_number: String,
    pub email: String,
    /// GitHub handle shown on the contact links.
    pub github: String,
    pub linkedin: String,
    /// Separate handle for API lookups, when it differs from `github`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub github_username: String,
    pub about_title: String,
    pub about_description: String,
    pub cta_title: String,
    pub cta_description: String,
    pub footer_text: String,
    /// Checksum of the admin password. Absent means the editing surface is
    /// open to anyone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

impl SiteConfig {
    /// Effective configuration: the stored record, or the default record
    /// when nothing was stored yet.
    pub fn resolve(stored: Option<SiteConfig>) -> SiteConfig {
        stored.unwrap_or_default()
    }
}

/// Partial update applied over the stored record; `None` fields are left
/// untouched. The admin password checksum is managed by the credential gate
/// only and is deliberately not patchable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfigPatch {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_description: Option<String>,
    pub whatsapp_number: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub github_username: Option<String>,
    pub about_title: Option<String>,
    pub about_description: Option<String>,
    pub cta_title: Option<String>,
    pub cta_description: Option<String>,
    pub footer_text: Option<String>,
}

impl SiteConfigPatch {
    pub fn apply(self, config: &mut SiteConfig) {
        if let Some(v) = self.hero_title {
            config.hero_title = v;
        }
        if let Some(v) = self.hero_subtitle {
            config.hero_subtitle = v;
        }
        if let Some(v) = self.hero_description {
            config.hero_description = v;
        }
        if let Some(v) = self.whatsapp_number {
            config.whatsapp_number = v;
        }
        if let Some(v) = self.email {
            config.email = v;
        }
        if let Some(v) = self.github {
            config.github = v;
        }
        if let Some(v) = self.linkedin {
            config.linkedin = v;
        }
        if let Some(v) = self.github_username {
            config.github_username = v;
        }
        if let Some(v) = self.about_title {
            config.about_title = v;
        }
        if let Some(v) = self.about_description {
            config.about_description = v;
        }
        if let Some(v) = self.cta_title {
            config.cta_title = v;
        }
        if let Some(v) = self.cta_description {
            config.cta_description = v;
        }
        if let Some(v) = self.footer_text {
            config.footer_text = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_stored_records_resolve_over_defaults() {
        let stored: SiteConfig =
            serde_json::from_str(r#"{"heroTitle": "Hi, I'm Ana"}"#).unwrap();

        assert_eq!(stored.hero_title, "Hi, I'm Ana");
        assert_eq!(stored.about_title, "About Me");
        assert!(stored.admin_password.is_none());
    }

    #[test]
    fn resolve_of_nothing_is_the_default_record() {
        assert_eq!(SiteConfig::resolve(None), SiteConfig::default());
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut config = SiteConfig::default();
        let patch = SiteConfigPatch {
            email: Some("ana@example.com".to_string()),
            ..SiteConfigPatch::default()
        };

        patch.apply(&mut config);
        assert_eq!(config.email, "ana@example.com");
        assert_eq!(config.cta_title, "Let's talk?");
    }

    #[test]
    fn absent_password_is_not_serialized() {
        let json = serde_json::to_value(SiteConfig::default()).unwrap();
        assert!(json.get("adminPassword").is_none());
    }
}
