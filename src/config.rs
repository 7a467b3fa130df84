/*!
 * Manager Configuration
 * Defaults and environment overrides for the signal manager
 *
 * Environment variables:
 * - SIGNAL_INITIAL_CAPACITY: Signals to reserve room for (default: 16)
 * - SIGNAL_DISPATCH_LOG: off | summary | per_receiver (default: summary)
 * - SIGNAL_COLLECT_STATS: 1 | 0 | true | false (default: true)
 */

use crate::core::{SignalError, SignalResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ENV_INITIAL_CAPACITY: &str = "SIGNAL_INITIAL_CAPACITY";
pub const ENV_DISPATCH_LOG: &str = "SIGNAL_DISPATCH_LOG";
pub const ENV_COLLECT_STATS: &str = "SIGNAL_COLLECT_STATS";

/// Default number of signals a manager reserves room for
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// How much a manager logs per send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchLogging {
    Off,
    /// One debug line per send
    #[default]
    Summary,
    /// Summary plus one trace line per receiver
    PerReceiver,
}

impl FromStr for DispatchLogging {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(DispatchLogging::Off),
            "summary" => Ok(DispatchLogging::Summary),
            "per_receiver" | "per-receiver" => Ok(DispatchLogging::PerReceiver),
            other => Err(SignalError::InvalidArgument(
                format!("unknown dispatch logging mode '{}'", other).into(),
            )),
        }
    }
}

impl fmt::Display for DispatchLogging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchLogging::Off => f.write_str("off"),
            DispatchLogging::Summary => f.write_str("summary"),
            DispatchLogging::PerReceiver => f.write_str("per_receiver"),
        }
    }
}

/// Signal manager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerConfig {
    pub initial_capacity: usize,
    pub dispatch_logging: DispatchLogging,
    pub collect_stats: bool,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            dispatch_logging: DispatchLogging::default(),
            collect_stats: true,
        }
    }
}

impl ManagerConfig {
    /// Defaults overridden by whichever `SIGNAL_*` variables are set
    pub fn from_env() -> SignalResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by the values `lookup` returns
    pub fn from_vars<F>(lookup: F) -> SignalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_INITIAL_CAPACITY) {
            config.initial_capacity = raw.trim().parse().map_err(|_| {
                SignalError::InvalidArgument(
                    format!("{} must be a non-negative integer, got '{}'", ENV_INITIAL_CAPACITY, raw)
                        .into(),
                )
            })?;
        }

        if let Some(raw) = lookup(ENV_DISPATCH_LOG) {
            config.dispatch_logging = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_COLLECT_STATS) {
            config.collect_stats = parse_flag(ENV_COLLECT_STATS, &raw)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, raw: &str) -> SignalResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SignalError::InvalidArgument(
            format!("{} must be a boolean flag, got '{}'", key, raw).into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_vars() {
        let config = ManagerConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, ManagerConfig::default());
        assert_eq!(config.dispatch_logging, DispatchLogging::Summary);
    }

    #[test]
    fn test_overrides() {
        let config = ManagerConfig::from_vars(vars(&[
            (ENV_INITIAL_CAPACITY, "64"),
            (ENV_DISPATCH_LOG, "Per_Receiver"),
            (ENV_COLLECT_STATS, "off"),
        ]))
        .unwrap();

        assert_eq!(config.initial_capacity, 64);
        assert_eq!(config.dispatch_logging, DispatchLogging::PerReceiver);
        assert!(!config.collect_stats);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ManagerConfig::from_vars(vars(&[(ENV_INITIAL_CAPACITY, "-1")])),
            Err(SignalError::InvalidArgument(_))
        ));
        assert!(ManagerConfig::from_vars(vars(&[(ENV_DISPATCH_LOG, "loud")])).is_err());
        assert!(ManagerConfig::from_vars(vars(&[(ENV_COLLECT_STATS, "maybe")])).is_err());
    }

    #[test]
    fn test_logging_mode_display_round_trip() {
        for mode in [DispatchLogging::Off, DispatchLogging::Summary, DispatchLogging::PerReceiver] {
            assert_eq!(mode.to_string().parse::<DispatchLogging>().unwrap(), mode);
        }
    }
}
