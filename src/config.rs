//! Runtime configuration read from environment variables.
//!
//! - `FACTORY_LOG_PATH`: log file (unset or empty disables logging)
//! - `FACTORY_LOG`: tracing filter directive (default "info")
//! - `FACTORY_TICK_MS`: frame interval in milliseconds (default 16)
//! - `FACTORY_SHOW_GRID`: initial overlay visibility (default on)
//! - `FACTORY_KEY_RELEASE_MS`: movement auto-release timeout (default 150)
//! - `FACTORY_ENEMIES`: spawn the chasing enemies (default on)

use crate::types::TICK_MS;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_KEY_RELEASE_MS: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_path: Option<String>,
    pub log_filter: String,
    pub tick_ms: u32,
    pub show_grid: bool,
    pub key_release_timeout_ms: u32,
    pub enemies: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            tick_ms: TICK_MS,
            show_grid: true,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_MS,
            enemies: true,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unparseable values fall back to defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = var("FACTORY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = var("FACTORY_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        let tick_ms = var("FACTORY_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(defaults.tick_ms)
            .max(1);

        let show_grid = var("FACTORY_SHOW_GRID")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.show_grid);

        let enemies = var("FACTORY_ENEMIES")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.enemies);

        let key_release_timeout_ms = var("FACTORY_KEY_RELEASE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.key_release_timeout_ms);

        Self {
            log_path,
            log_filter,
            tick_ms,
            show_grid,
            key_release_timeout_ms,
            enemies,
        }
    }
}

/// Anything but an explicit "off" value enables the flag.
fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "0" | "false" | "off" | "no")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(AppConfig::from_vars(|_| None), AppConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = AppConfig::from_vars(lookup(&[
            ("FACTORY_LOG_PATH", " /tmp/factory.log "),
            ("FACTORY_LOG", "debug"),
            ("FACTORY_TICK_MS", "33"),
            ("FACTORY_SHOW_GRID", "false"),
            ("FACTORY_KEY_RELEASE_MS", "400"),
            ("FACTORY_ENEMIES", "off"),
        ]));
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/factory.log"));
        assert_eq!(cfg.log_filter, "debug");
        assert_eq!(cfg.tick_ms, 33);
        assert!(!cfg.show_grid);
        assert_eq!(cfg.key_release_timeout_ms, 400);
        assert!(!cfg.enemies);
    }

    #[test]
    fn flags_only_turn_off_on_explicit_values() {
        for off in ["0", "false", "OFF", " no "] {
            assert!(!parse_flag(off), "{off:?}");
        }
        for on in ["1", "true", "yes", "whatever"] {
            assert!(parse_flag(on), "{on:?}");
        }
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = AppConfig::from_vars(lookup(&[
            ("FACTORY_LOG_PATH", "   "),
            ("FACTORY_TICK_MS", "fast"),
            ("FACTORY_KEY_RELEASE_MS", "-3"),
        ]));
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.tick_ms, TICK_MS);
        assert_eq!(cfg.key_release_timeout_ms, DEFAULT_KEY_RELEASE_MS);
    }

    #[test]
    fn zero_tick_is_clamped() {
        let cfg = AppConfig::from_vars(lookup(&[("FACTORY_TICK_MS", "0")]));
        assert_eq!(cfg.tick_ms, 1);
    }
}
