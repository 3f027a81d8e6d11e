//! Bootstrap configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! A browser bundle has no process environment at run time, so overrides are
//! read from compile-time variables when the bundle is built:
//!
//! - `CIRCUIT_TRAINER_MOUNT_ID`: id of the host element to mount into.
//! - `CIRCUIT_TRAINER_LOG`: `error`, `warn`, `info`, `debug`, or `trace`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

/// Element id the application mounts into when nothing else is configured.
pub const DEFAULT_MOUNT_ID: &str = "app";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub mount_id: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_owned(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Configuration baked in at build time.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("CIRCUIT_TRAINER_MOUNT_ID"),
            option_env!("CIRCUIT_TRAINER_LOG"),
        )
    }

    /// Build from raw override values. Blank or unknown values keep defaults.
    pub fn from_values(mount_id: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            mount_id: mount_id
                .map(|id| id.trim().trim_start_matches('#'))
                .filter(|id| !id.is_empty())
                .map_or(defaults.mount_id, str::to_owned),
            log_level: parse_log_level(log_level).unwrap_or(defaults.log_level),
        }
    }
}

fn parse_log_level(raw: Option<&str>) -> Option<log::Level> {
    let Ok(level) = log::Level::from_str(raw?.trim()) else {
        return None;
    };
    Some(level)
}
