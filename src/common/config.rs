/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::time::Duration;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Configuration for the Hail runtime.
///
/// This struct contains all configurable values for the crate, loaded
/// from TOML files in XDG-compliant directories. Every field has a
/// default, so a partial file overrides only what it names.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HailConfig {
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// Limits and capacity configuration
    pub limits: LimitsConfig,
    /// Default values configuration
    pub defaults: DefaultsConfig,
}

/// Timeout-related configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Default per-cell shutdown timeout in milliseconds
    pub cell_shutdown_timeout_ms: u64,
    /// Default system-wide shutdown timeout in milliseconds
    pub system_shutdown_timeout_ms: u64,
}

/// Limits and capacity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Default MPSC channel size for a cell's inbox
    pub cell_inbox_capacity: usize,
    /// Dummy channel size for closed/default channels
    pub dummy_channel_size: usize,
}

/// Default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Default cell name when none provided
    pub cell_name: String,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            cell_shutdown_timeout_ms: 10_000,
            system_shutdown_timeout_ms: 30_000,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            cell_inbox_capacity: 255,
            dummy_channel_size: 1,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            cell_name: "cell".to_string(),
        }
    }
}

impl HailConfig {
    /// Convert per-cell shutdown timeout to Duration
    pub const fn cell_shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.cell_shutdown_timeout_ms)
    }

    /// Convert system shutdown timeout to Duration
    pub const fn system_shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.system_shutdown_timeout_ms)
    }

    /// Load configuration from XDG-compliant locations
    ///
    /// This function attempts to load configuration from
    /// `$XDG_CONFIG_HOME/hail/config.toml`, falling back to the platform's
    /// conventional configuration directory.
    ///
    /// If no configuration file is found, returns the default configuration.
    /// If a configuration file exists but is malformed, logs an error and
    /// uses defaults.
    pub fn load() -> Self {
        use tracing::{error, info};

        let xdg_dirs = match xdg::BaseDirectories::with_prefix("hail") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        let config_path = xdg_dirs.find_config_file("config.toml");

        if let Some(path) = config_path {
            info!("Loading configuration from: {}", path.display());
            match std::fs::read_to_string(&path) {
                Ok(config_str) => match toml::from_str::<Self>(&config_str) {
                    Ok(config) => {
                        info!("Successfully loaded configuration");
                        config
                    }
                    Err(e) => {
                        error!(
                            "Failed to parse configuration file {}: {}",
                            path.display(),
                            e
                        );
                        Self::default()
                    }
                },
                Err(e) => {
                    error!(
                        "Failed to read configuration file {}: {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            }
        } else {
            info!("No configuration file found, using defaults");
            Self::default()
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: HailConfig = HailConfig::load();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HailConfig::default();
        assert_eq!(config.limits.cell_inbox_capacity, 255);
        assert_eq!(config.limits.dummy_channel_size, 1);
        assert_eq!(config.timeouts.cell_shutdown_timeout_ms, 10_000);
        assert_eq!(config.timeouts.system_shutdown_timeout_ms, 30_000);
        assert_eq!(config.defaults.cell_name, "cell");
    }

    #[test]
    fn test_partial_file_overrides_only_named_keys() {
        let parsed: HailConfig = toml::from_str(
            r#"
            [limits]
            cell_inbox_capacity = 16
            "#,
        )
        .expect("partial config should parse");
        assert_eq!(parsed.limits.cell_inbox_capacity, 16);
        assert_eq!(parsed.limits.dummy_channel_size, 1);
        assert_eq!(parsed.timeouts.system_shutdown_timeout_ms, 30_000);
    }

    #[test]
    fn test_timeout_conversion() {
        let config = HailConfig::default();
        assert_eq!(config.system_shutdown_timeout(), Duration::from_millis(30_000));
        assert_eq!(config.cell_shutdown_timeout(), Duration::from_millis(10_000));
    }
}
