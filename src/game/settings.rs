//! # Session Settings
//!
//! Tunable timings and population sizes for a play session.

use crate::config::*;
use crate::{PokeHuntError, PokeHuntResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for a play session.
///
/// Missing fields in a JSON file fall back to the defaults.
///
/// # Examples
///
/// ```
/// use pokehunt::SessionConfig;
///
/// let config = SessionConfig::default();
/// assert_eq!(config.initial_population, 8);
/// assert_eq!(config.population_cap, 12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Creatures spawned when the session starts
    pub initial_population: usize,
    /// Live population cap; spawns past it are dropped
    pub population_cap: usize,
    /// Milliseconds between spawn ticks
    pub spawn_interval_ms: u64,
    /// Milliseconds a successful catch stays displayed
    pub success_display_ms: u64,
    /// Milliseconds an escape stays displayed
    pub failure_display_ms: u64,
    /// Milliseconds between a throw and its resolution
    pub throw_duration_ms: u64,
}

impl SessionConfig {
    /// Creates the canonical game configuration.
    pub fn new() -> Self {
        Self {
            initial_population: DEFAULT_INITIAL_POPULATION,
            population_cap: DEFAULT_POPULATION_CAP,
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            success_display_ms: DEFAULT_SUCCESS_DISPLAY_MS,
            failure_display_ms: DEFAULT_FAILURE_DISPLAY_MS,
            throw_duration_ms: DEFAULT_THROW_DURATION_MS,
        }
    }

    /// Creates a configuration with short timers for quick manual runs.
    pub fn for_testing() -> Self {
        Self {
            initial_population: 4,
            population_cap: 6,
            spawn_interval_ms: 500,
            success_display_ms: 150,
            failure_display_ms: 100,
            throw_duration_ms: 80,
        }
    }

    /// Loads a configuration from a JSON file and validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> PokeHuntResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        log::info!("Loaded session config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Checks that the values describe a playable session.
    pub fn validate(&self) -> PokeHuntResult<()> {
        if self.population_cap == 0 {
            return Err(PokeHuntError::InvalidConfig(
                "population_cap must be at least 1".to_string(),
            ));
        }

        if self.initial_population > self.population_cap {
            return Err(PokeHuntError::InvalidConfig(format!(
                "initial_population ({}) exceeds population_cap ({})",
                self.initial_population, self.population_cap
            )));
        }

        let timers = [
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("success_display_ms", self.success_display_ms),
            ("failure_display_ms", self.failure_display_ms),
            ("throw_duration_ms", self.throw_duration_ms),
        ];
        if let Some((name, _)) = timers.iter().find(|(_, ms)| *ms == 0) {
            return Err(PokeHuntError::InvalidConfig(format!(
                "{name} must be greater than zero"
            )));
        }

        Ok(())
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    pub fn failure_display(&self) -> Duration {
        Duration::from_millis(self.failure_display_ms)
    }

    pub fn throw_duration(&self) -> Duration {
        Duration::from_millis(self.throw_duration_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
