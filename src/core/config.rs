use crate::encoders::algorithms::checksum::Variant;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A named human-readable part, e.g. `bc` for Bitcoin mainnet.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HrpConfig {
    /// The human-readable part itself
    pub hrp: String,
    /// What the prefix is used for
    #[serde(default)]
    pub description: Option<String>,
    /// Checksum variant to use with this prefix (falls back to the global default)
    #[serde(default)]
    pub variant: Option<Variant>,
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Variant used when neither the command line nor the preset picks one.
    /// `None` when the file does not set it.
    #[serde(default)]
    pub default_variant: Option<Variant>,
    /// Preset used by `encode` when no hrp is given
    #[serde(default)]
    pub default_preset: Option<String>,
}

impl Settings {
    /// The configured default variant, or Bech32 when none is set.
    pub fn variant(&self) -> Variant {
        self.default_variant.unwrap_or_default()
    }
}

/// Collection of hrp presets loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct HrpRegistry {
    /// Map of preset names to their configurations
    #[serde(default)]
    pub hrps: HashMap<String, HrpConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// An hrp resolved from a preset name or a literal, with its variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHrp {
    pub hrp: String,
    pub variant: Variant,
}

impl HrpRegistry {
    /// Parses preset configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in presets bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../hrps.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in presets (from library)
    /// 2. `~/.config/bech32-text/hrps.toml` (user overrides)
    /// 3. `./hrps.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching preset names.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("bech32-text").join("hrps.toml");
            config.merge_from_path(&user_config_path);
        }

        config.merge_from_path(std::path::Path::new("hrps.toml"));

        Ok(config)
    }

    fn merge_from_path(&mut self, path: &std::path::Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => {
                debug!(path = %path.display(), presets = other.hrps.len(), "loaded hrp overrides");
                self.merge(other);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load hrp config");
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Presets from `other` replace presets with the same name. Settings that
    /// `other` sets explicitly replace these settings.
    pub fn merge(&mut self, other: HrpRegistry) {
        for (name, preset) in other.hrps {
            self.hrps.insert(name, preset);
        }
        if other.settings.default_variant.is_some() {
            self.settings.default_variant = other.settings.default_variant;
        }
        if other.settings.default_preset.is_some() {
            self.settings.default_preset = other.settings.default_preset;
        }
    }

    /// Retrieves a preset by name.
    pub fn get_preset(&self, name: &str) -> Option<&HrpConfig> {
        self.hrps.get(name)
    }

    /// Resolves a preset name to its hrp, or treats `name` as a literal hrp.
    ///
    /// An explicit `variant` wins over the preset's, which wins over the
    /// global default.
    pub fn resolve_hrp(&self, name: &str, variant: Option<Variant>) -> ResolvedHrp {
        match self.get_preset(name) {
            Some(preset) => ResolvedHrp {
                hrp: preset.hrp.clone(),
                variant: variant
                    .or(preset.variant)
                    .unwrap_or(self.settings.variant()),
            },
            None => ResolvedHrp {
                hrp: name.to_string(),
                variant: variant.unwrap_or(self.settings.variant()),
            },
        }
    }
}
