use std::{path::PathBuf, time::Duration};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1200;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    /// Simulated network latency of a submit
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// Lifetime of non-loading toasts
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            keybindings: keybindings::KeyBindings::default(),
            styles: styles::Styles::default(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl Config {
    /// Embedded defaults overridden by any config file in the config
    /// directory. A missing file is not an error.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?
            .set_default("submit_delay_ms", default_config.submit_delay_ms)?
            .set_default("toast_duration_ms", default_config.toast_duration_ms)?;

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
        cfg.merge_defaults(default_config);
        Ok(cfg)
    }

    /// The configuration shipped with the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Fill in every keybinding and style the user did not set
    pub fn merge_defaults(&mut self, defaults: Config) {
        for (keyseq, action) in defaults.keybindings.0 {
            self.keybindings.entry(keyseq).or_insert(action);
        }
        for (style_key, style) in defaults.styles.0 {
            self.styles.entry(style_key).or_insert(style);
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
