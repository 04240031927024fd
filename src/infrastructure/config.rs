use std::path::Path;

use config::ConfigError;
use serde::Deserialize;

use crate::{presentation::config::keybindings::KeyBindings, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Latencies simulated by the mocked data source
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DataSourceConfig {
    #[serde(default = "default_fetch_all_delay_ms")]
    pub fetch_all_delay_ms: u64,
    #[serde(default = "default_fetch_by_id_delay_ms")]
    pub fetch_by_id_delay_ms: u64,
}

fn default_fetch_all_delay_ms() -> u64 {
    1000
}

fn default_fetch_by_id_delay_ms() -> u64 {
    500
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            fetch_all_delay_ms: default_fetch_all_delay_ms(),
            fetch_by_id_delay_ms: default_fetch_by_id_delay_ms(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub data_source: DataSourceConfig,
}

impl Config {
    /// Loads the embedded defaults overlaid with any config file found in the config directory.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir())
    }

    /// Loads the embedded defaults overlaid with any config file found in `config_dir`.
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_default_keybindings(&default_config);
        Ok(cfg)
    }

    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    fn merge_default_keybindings(&mut self, defaults: &Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
    }
}
