//! # PokeHunt
//!
//! A casual "catch creatures on a map" simulator engine.
//!
//! ## Architecture Overview
//!
//! The engine is a small, single-threaded, event-driven core. Presentation is an
//! external collaborator that reads state snapshots and emits intents.
//!
//! - **Catalog**: the fixed species list, rarity tiers and sprite references
//! - **Generation**: rarity-weighted creature spawning behind an injectable random source
//! - **Game**: session state, the selection state machine and its timer scheduler
//! - **Input**: presentation intents and the terminal command parser
//! - **Rendering**: serializable snapshots and a plain-text summary
//! - **Driver**: async loop feeding wall-clock time and intents into a session

pub mod catalog;
pub mod driver;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

// Core module re-exports
pub use catalog::*;
pub use driver::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

/// Core error type for the PokeHunt engine.
///
/// Intents applied to a session never fail; errors only come from the edges
/// (configuration, serialization, generator validation, terminal I/O).
#[derive(thiserror::Error, Debug)]
pub enum PokeHuntError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Session configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generated content broke an invariant
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the PokeHunt codebase.
pub type PokeHuntResult<T> = Result<T, PokeHuntError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine-wide constants.
pub mod config {
    /// Sprite URL template; `{id}` is replaced by the species sprite id.
    pub const SPRITE_URL_TEMPLATE: &str =
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png";

    /// Lowest map coordinate a creature can spawn at (percent of map size)
    pub const MAP_MIN_COORDINATE: f64 = 10.0;

    /// Width of the spawnable band, so spawns land in [10, 90]
    pub const MAP_COORDINATE_SPAN: f64 = 80.0;

    /// Creatures seeded at session start
    pub const DEFAULT_INITIAL_POPULATION: usize = 8;

    /// Live population cap
    pub const DEFAULT_POPULATION_CAP: usize = 12;

    /// Spawn tick interval in milliseconds
    pub const DEFAULT_SPAWN_INTERVAL_MS: u64 = 5000;

    /// How long a successful catch stays on screen
    pub const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 1500;

    /// How long an escape stays on screen
    pub const DEFAULT_FAILURE_DISPLAY_MS: u64 = 1000;

    /// Duration of the ball throw before the capture resolves
    pub const DEFAULT_THROW_DURATION_MS: u64 = 800;

    /// Undrained session events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 256;
}
