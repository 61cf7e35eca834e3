//! # Engine Configuration
//!
//! Settings for logging, collision response and input buffering, loadable
//! from TOML or RON through the [`Config`] trait.
//!
//! ```toml
//! log_level = "debug"
//!
//! [physics]
//! hit_policy = "last_wins"
//!
//! [events]
//! queue_capacity = 128
//! ```

use serde::{Deserialize, Serialize};

use crate::events::{EventError, EventQueue, DEFAULT_QUEUE_CAPACITY};
use crate::physics::HitPolicy;

// Re-export from the config module for convenience
pub use crate::config::{Config, ConfigError};

/// # Physics Configuration
///
/// How a frame's collision hits are turned into a response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Aggregation of multiple simultaneous hits
    pub hit_policy: HitPolicy,
}

impl PhysicsConfig {
    /// Set the hit aggregation policy
    pub fn with_hit_policy(mut self, policy: HitPolicy) -> Self {
        self.hit_policy = policy;
        self
    }
}

/// # Event Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Maximum key events buffered between frames
    pub queue_capacity: usize,
}

impl EventConfig {
    /// Set the queue capacity
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Build an event queue with the configured capacity
    pub fn build_queue(&self) -> Result<EventQueue, EventError> {
        EventQueue::with_capacity(self.queue_capacity)
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// # Engine Configuration
///
/// Top-level configuration applications load at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine (used when `RUST_LOG` is unset)
    pub log_level: String,
    /// Collision response settings
    pub physics: PhysicsConfig,
    /// Input buffering settings
    pub events: EventConfig,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            physics: PhysicsConfig::default(),
            events: EventConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set physics configuration
    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    /// Set event configuration
    pub fn with_events(mut self, events: EventConfig) -> Self {
        self.events = events;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level: {}",
                self.log_level
            )));
        }

        if self.events.queue_capacity == 0 {
            return Err(ConfigError::Invalid(
                "event queue capacity must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_defaults_validate() {
        let config = EngineConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.physics.hit_policy, HitPolicy::All);
        assert_eq!(config.events.queue_capacity, DEFAULT_QUEUE_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = EngineConfig::new().with_log_level("loud");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = EngineConfig::new().with_events(EventConfig::default().with_queue_capacity(0));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: EngineConfig = toml::from_str("[physics]\nhit_policy = \"last_wins\"\n").unwrap();
        assert_eq!(config.physics.hit_policy, HitPolicy::LastWins);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.events.queue_capacity, DEFAULT_QUEUE_CAPACITY);
    }

    #[test]
    fn test_load_handwritten_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "log_level = \"debug\"\n\n[events]\nqueue_capacity = 128").unwrap();

        let config = EngineConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.events.queue_capacity, 128);
        assert_eq!(config.physics, PhysicsConfig::default());
    }

    #[test]
    fn test_toml_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("engine.toml");
        let config = EngineConfig::new()
            .with_log_level("debug")
            .with_physics(PhysicsConfig::default().with_hit_policy(HitPolicy::FirstWins))
            .with_events(EventConfig::default().with_queue_capacity(8));

        config.save_to_file(&path).unwrap();
        let loaded = EngineConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("engine.ron");
        let config = EngineConfig::new().with_physics(PhysicsConfig::default().with_hit_policy(HitPolicy::LastWins));

        config.save_to_file(&path).unwrap();
        let loaded = EngineConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().with_extension("yaml");

        let err = EngineConfig::default().save_to_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = EngineConfig::load_from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_build_queue_uses_capacity() {
        let queue = EventConfig::default().with_queue_capacity(3).build_queue().unwrap();
        assert_eq!(queue.capacity(), 3);
    }
}
