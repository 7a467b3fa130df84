/*!
 * Signal Manager Builder
 * Builder pattern for SignalManager construction
 */

use super::manager::SignalManager;
use crate::config::{DispatchLogging, ManagerConfig};

/// Builder for SignalManager
#[derive(Debug, Clone, Default)]
pub struct SignalManagerBuilder {
    config: ManagerConfig,
}

impl SignalManagerBuilder {
    /// Create a builder starting from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration, e.g. one read with `ManagerConfig::from_env`
    pub fn with_config(mut self, config: ManagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Reserve room for `capacity` signals up front
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn with_dispatch_logging(mut self, logging: DispatchLogging) -> Self {
        self.config.dispatch_logging = logging;
        self
    }

    /// Skip dispatch counters; `SignalManager::stats` then reports zeros
    pub fn without_stats(mut self) -> Self {
        self.config.collect_stats = false;
        self
    }

    pub fn build(self) -> SignalManager {
        SignalManager::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_applies_settings() {
        let manager = SignalManagerBuilder::new()
            .with_capacity(4)
            .with_dispatch_logging(DispatchLogging::Off)
            .without_stats()
            .build();

        let config = manager.config();
        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.dispatch_logging, DispatchLogging::Off);
        assert!(!config.collect_stats);
    }

    #[test]
    fn test_with_config_then_override() {
        let base = ManagerConfig {
            initial_capacity: 128,
            ..ManagerConfig::default()
        };
        let manager = SignalManagerBuilder::new()
            .with_config(base)
            .with_dispatch_logging(DispatchLogging::PerReceiver)
            .build();

        assert_eq!(manager.config().initial_capacity, 128);
        assert_eq!(manager.config().dispatch_logging, DispatchLogging::PerReceiver);
        assert!(manager.config().collect_stats);
    }
}
