//! Page-level configuration.
//!
//! Everything has a default matching the portfolio markup; a page can override
//! any field with a JSON block:
//!
//! ```html
//! <script type="application/json" id="decor-config">
//!   { "background": { "variant": "icosahedra", "seed": 7 } }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::Result;

/// Id of the optional `<script type="application/json">` block.
pub const CONFIG_ELEMENT_ID: &str = "decor-config";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecorConfig {
    pub log_level: String,
    pub background: BackgroundConfig,
    pub hero_canvas_id: String,
    pub profile_canvas_id: String,
    pub preview_selector: String,
    pub preview_attribute: String,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            background: BackgroundConfig::default(),
            hero_canvas_id: "hero-3d-model".into(),
            profile_canvas_id: "profile-3d".into(),
            preview_selector: ".project-3d-preview".into(),
            preview_attribute: "data-project".into(),
        }
    }
}

impl DecorConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Falls back to `Info` for anything `log` does not recognise.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundVariant {
    #[default]
    Cards,
    Icosahedra,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackgroundConfig {
    pub container_id: String,
    pub variant: BackgroundVariant,
    pub windows: usize,
    pub components: usize,
    pub particles: usize,
    /// Fixed seed for reproducible layouts; random per page load when unset.
    pub seed: Option<u64>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            container_id: "3d-background".into(),
            variant: BackgroundVariant::Cards,
            windows: 5,
            components: 10,
            particles: 20,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(DecorConfig::from_json("{}").unwrap(), DecorConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = DecorConfig::from_json(
            r#"{ "log_level": "debug", "background": { "variant": "icosahedra", "seed": 7 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.level(), log::Level::Debug);
        assert_eq!(cfg.background.variant, BackgroundVariant::Icosahedra);
        assert_eq!(cfg.background.seed, Some(7));
        assert_eq!(cfg.background.windows, 5);
        assert_eq!(cfg.hero_canvas_id, "hero-3d-model");
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let cfg = DecorConfig {
            log_level: "chatty".into(),
            ..Default::default()
        };
        assert_eq!(cfg.level(), log::Level::Info);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DecorConfig::from_json("{ background: ").is_err());
    }
}
