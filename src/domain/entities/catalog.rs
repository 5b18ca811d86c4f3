use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Project grouping shown as a filter chip. Unknown persisted values
/// resolve to `Web` instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ProjectCategory {
    #[default]
    Web,
    Programming,
    Maker,
}

impl ProjectCategory {
    pub fn from_key(key: &str) -> Self {
        match key {
            "Programming" => ProjectCategory::Programming,
            "Maker" => ProjectCategory::Maker,
            _ => ProjectCategory::Web,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::Programming => "Programming",
            ProjectCategory::Maker => "Maker",
        }
    }
}

impl<'de> Deserialize<'de> for ProjectCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(ProjectCategory::from_key(&key))
    }
}

/// Finite icon set for project and skill cards. Unknown persisted keys
/// resolve to the baseline `Code` icon instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ProjectIcon {
    #[default]
    Code,
    Desktop,
    Database,
    Lightning,
    DeviceMobile,
    Gear,
    Cpu,
}

impl ProjectIcon {
    pub fn from_key(key: &str) -> Self {
        match key {
            "Desktop" => ProjectIcon::Desktop,
            "Database" => ProjectIcon::Database,
            "Lightning" => ProjectIcon::Lightning,
            "DeviceMobile" => ProjectIcon::DeviceMobile,
            "Gear" => ProjectIcon::Gear,
            "Cpu" => ProjectIcon::Cpu,
            _ => ProjectIcon::Code,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ProjectIcon::Code => "Code",
            ProjectIcon::Desktop => "Desktop",
            ProjectIcon::Database => "Database",
            ProjectIcon::Lightning => "Lightning",
            ProjectIcon::DeviceMobile => "DeviceMobile",
            ProjectIcon::Gear => "Gear",
            ProjectIcon::Cpu => "Cpu",
        }
    }
}

impl<'de> Deserialize<'de> for ProjectIcon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(ProjectIcon::from_key(&key))
    }
}

/// Card background presets. Serialized as the utility-class strings the
/// frontend theme uses, so previously stored content keeps rendering
/// unchanged. Unknown keys resolve to `Primary`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Gradient {
    #[default]
    #[serde(rename = "from-primary/30 via-accent/20 to-secondary/30")]
    Primary,
    #[serde(rename = "from-accent/30 via-primary/20 to-secondary/30")]
    Accent,
    #[serde(rename = "from-secondary/30 via-primary/20 to-accent/30")]
    Secondary,
    #[serde(rename = "from-primary/30 via-secondary/20 to-accent/30")]
    PrimaryMix,
    #[serde(rename = "from-accent/30 via-secondary/20 to-primary/30")]
    AccentMix,
    #[serde(rename = "from-secondary/30 via-accent/20 to-primary/30")]
    SecondaryMix,
}

impl Gradient {
    pub fn from_key(key: &str) -> Self {
        match key {
            "from-accent/30 via-primary/20 to-secondary/30" => Gradient::Accent,
            "from-secondary/30 via-primary/20 to-accent/30" => Gradient::Secondary,
            "from-primary/30 via-secondary/20 to-accent/30" => Gradient::PrimaryMix,
            "from-accent/30 via-secondary/20 to-primary/30" => Gradient::AccentMix,
            "from-secondary/30 via-accent/20 to-primary/30" => Gradient::SecondaryMix,
            _ => Gradient::Primary,
        }
    }

    pub fn css_classes(&self) -> &'static str {
        match self {
            Gradient::Primary => "from-primary/30 via-accent/20 to-secondary/30",
            Gradient::Accent => "from-accent/30 via-primary/20 to-secondary/30",
            Gradient::Secondary => "from-secondary/30 via-primary/20 to-accent/30",
            Gradient::PrimaryMix => "from-primary/30 via-secondary/20 to-accent/30",
            Gradient::AccentMix => "from-accent/30 via-secondary/20 to-primary/30",
            Gradient::SecondaryMix => "from-secondary/30 via-accent/20 to-primary/30",
        }
    }
}

impl<'de> Deserialize<'de> for Gradient {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Gradient::from_key(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icon_keys_fall_back_to_code() {
        assert_eq!(ProjectIcon::from_key("Gear"), ProjectIcon::Gear);
        assert_eq!(ProjectIcon::from_key("Sparkles"), ProjectIcon::Code);
        assert_eq!(ProjectIcon::from_key(""), ProjectIcon::Code);
    }

    #[test]
    fn unknown_gradient_keys_fall_back_to_primary() {
        assert_eq!(Gradient::from_key("nonsense"), Gradient::Primary);
        assert_eq!(
            Gradient::from_key("from-secondary/30 via-accent/20 to-primary/30"),
            Gradient::SecondaryMix
        );
    }

    #[test]
    fn gradients_round_trip_through_their_css_keys() {
        let gradient = Gradient::AccentMix;
        let json = serde_json::to_string(&gradient).unwrap();
        assert_eq!(json, "\"from-accent/30 via-secondary/20 to-primary/30\"");
        assert_eq!(serde_json::from_str::<Gradient>(&json).unwrap(), gradient);
    }

    #[test]
    fn unknown_persisted_variants_deserialize_to_the_baseline() {
        assert_eq!(
            serde_json::from_str::<ProjectIcon>("\"Rocket\"").unwrap(),
            ProjectIcon::Code
        );
        assert_eq!(
            serde_json::from_str::<ProjectCategory>("\"Gaming\"").unwrap(),
            ProjectCategory::Web
        );
    }

    #[test]
    fn keys_and_lookups_agree() {
        for icon in [
            ProjectIcon::Code,
            ProjectIcon::Desktop,
            ProjectIcon::Database,
            ProjectIcon::Lightning,
            ProjectIcon::DeviceMobile,
            ProjectIcon::Gear,
            ProjectIcon::Cpu,
        ] {
            assert_eq!(ProjectIcon::from_key(icon.key()), icon);
        }
    }
}
