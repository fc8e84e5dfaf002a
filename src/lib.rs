//! # Hoard
//!
//! Magic-item treasure generation for tabletop role-playing games.
//!
//! ## Architecture Overview
//!
//! Hoard turns weighted rule-table lookups into fully specified magical items.
//! The crate is organised around a few key concepts:
//!
//! - **Items**: the data model for generated treasure (`Item`, `Magic`,
//!   `Intelligence`, `SpecialAbility`)
//! - **Selectors**: narrow traits over the external rule tables, collections
//!   and alias registry
//! - **Generators**: power-tier item generators (rings, potions, magical armor)
//!   and the intelligence generator
//! - **Wrappers**: curse decoration, intelligence decoration and the mundane
//!   proxy, composed over the shared `MagicalItemGenerator` contract
//!
//! Every source of randomness lives behind a collaborator trait, so the
//! generators themselves are deterministic given their collaborators.

pub mod generation;
pub mod items;
pub mod selectors;
pub mod utils;

// Core module re-exports
pub use generation::*;
pub use items::*;
pub use selectors::*;
pub use utils::*;

/// Core error type for the Hoard generation engine.
#[derive(thiserror::Error, Debug)]
pub enum HoardError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The caller asked for something the engine cannot generate
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A table, collection or matching row does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Table data does not have the shape a rule expects
    #[error("Data inconsistency: {0}")]
    DataInconsistency(String),

    /// A redraw loop never produced an acceptable value
    #[error("Retry limit exceeded: {0}")]
    RetryLimitExceeded(String),
}

/// Result type used throughout the Hoard codebase.
pub type HoardResult<T> = Result<T, HoardError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation configuration constants.
pub mod config {
    /// Default ceiling for every redraw loop in the engine
    pub const DEFAULT_MAX_RETRY_ATTEMPTS: usize = 10_000;

    /// Maximum special ability slots granted by "roll again" armor rows
    pub const DEFAULT_MAX_ARMOR_ABILITY_SLOTS: usize = 2;

    /// Language every speaking intelligent item knows
    pub const DEFAULT_COMMON_LANGUAGE: &str = "Common";

    /// Default seed for the built-in dice roller
    pub const DEFAULT_SEED: u64 = 42;
}
