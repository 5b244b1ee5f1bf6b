use serde::{Deserialize, Serialize};
use shared_ui::theme::ThemeMode;
use std::sync::OnceLock;

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Site config baked in from `config.toml` at the crate root.
const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

/// Brand labels shown in the page header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandConfig {
    #[serde(default = "default_brand_name")]
    pub name: String,
    #[serde(default = "default_brand_accent")]
    pub accent: String,
}

fn default_brand_name() -> String {
    "Pet's".to_string()
}

fn default_brand_accent() -> String {
    "Love".to_string()
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
            accent: default_brand_accent(),
        }
    }
}

/// Initial presentation mode.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ThemeConfig {
    #[serde(default)]
    pub dark: bool,
}

impl ThemeConfig {
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.dark)
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// Parse the embedded config once. Falls back to defaults if it is invalid.
pub fn site_config() -> &'static SiteConfig {
    CONFIG.get_or_init(|| match SiteConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => {
            tracing::info!(?config, "site config loaded");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
            SiteConfig::default()
        }
    })
}
