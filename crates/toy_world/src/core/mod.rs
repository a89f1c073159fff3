//! # Core Module
//!
//! Shared abstractions used throughout the crate.
//!
//! ## Organization
//!
//! - **Config**: Physics configuration loaded from TOML or RON
//! - **Foundation**: Low-level utilities (math, collections, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    BroadPhaseConfig,
    BroadPhaseKind,
    PhysicsConfig,
    Config,
    ConfigError,
};
