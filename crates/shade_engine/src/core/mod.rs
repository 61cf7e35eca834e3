//! # Core Engine Module
//!
//! Shared configuration for the engine subsystems.
//!
//! ## Organization
//!
//! - **Config**: Engine-wide settings (logging, physics, events)
//! - **Foundation**: Low-level utilities (math, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    EngineConfig,
    EventConfig,
    PhysicsConfig,
    Config,
    ConfigError,
};
