//! Startup configuration. Load from TOML or env.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::console::{ConsoleMode, Provider};

/// Startup configuration (profile identity + console defaults).
///
/// Precedence: env `HABITOS_CONFIG` path > `config/habitos.toml` > defaults,
/// with a `HABITOS`-prefixed environment layer on top (e.g.
/// `HABITOS_DISPLAY_NAME`; `__` separates nested keys).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Display name for the profile.
    pub display_name: String,
    /// Default console provider ("claude" | "gemini").
    pub provider: String,
    /// Default console mode ("default" | "warlord" | "architect" | ...).
    pub console_mode: String,
    /// Seed the store with the starter habit set and pattern library.
    #[serde(default)]
    pub seed_demo_data: bool,
}

impl CoreConfig {
    /// Load config from file and environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("HABITOS_CONFIG").unwrap_or_else(|_| "config/habitos".to_string());
        let builder = config::Config::builder()
            .set_default("display_name", "Operator")?
            .set_default("provider", "claude")?
            .set_default("console_mode", "default")?
            .set_default("seed_demo_data", false)?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(
                config::Environment::with_prefix("HABITOS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        built.try_deserialize()
    }

    /// Parsed provider; unknown values fall back to the default.
    pub fn default_provider(&self) -> Provider {
        Provider::from_str(&self.provider).unwrap_or_default()
    }

    /// Parsed console mode; unknown values fall back to the default.
    pub fn default_mode(&self) -> ConsoleMode {
        ConsoleMode::from_str(&self.console_mode).unwrap_or_default()
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            display_name: "Operator".to_string(),
            provider: "claude".to_string(),
            console_mode: "default".to_string(),
            seed_demo_data: false,
        }
    }
}
