//! # Game Module
//!
//! Session state management for the catch loop.
//!
//! This module contains the building blocks of a play session:
//! - Creature instances and their map positions
//! - The selection state machine (select, throw, caught, escaped)
//! - The timer scheduler that drives spawns and outcome display
//! - The session itself, which owns all of the above

pub mod settings;
pub mod scheduler;
pub mod selection;
pub mod state;

pub use settings::*;
pub use scheduler::*;
pub use selection::*;
pub use state::*;

use crate::catalog::{Rarity, Species};
use crate::config::{MAP_COORDINATE_SPAN, MAP_MIN_COORDINATE};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Position on the map, as percentages of map width and height.
///
/// # Examples
///
/// ```
/// use pokehunt::MapPosition;
///
/// assert!(MapPosition::new(10.0, 89.9).is_spawnable());
/// assert!(!MapPosition::new(5.0, 50.0).is_spawnable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

impl MapPosition {
    /// Creates a new position with the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both axes lie inside the spawnable band [10, 90].
    pub fn is_spawnable(self) -> bool {
        let range = MAP_MIN_COORDINATE..=(MAP_MIN_COORDINATE + MAP_COORDINATE_SPAN);
        range.contains(&self.x) && range.contains(&self.y)
    }
}

/// Unique identifier for creature instances.
pub type CreatureId = Uuid;

/// Creates a new unique creature ID.
pub fn new_creature_id() -> CreatureId {
    Uuid::new_v4()
}

/// One spawned creature.
///
/// Species data is copied in at spawn time so the instance stands on its own
/// once handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creature {
    pub id: CreatureId,
    pub name: &'static str,
    pub element: &'static str,
    pub type_color: &'static str,
    pub rarity: Rarity,
    pub sprite_url: String,
    pub combat_power: u32,
    pub position: MapPosition,
}

impl Creature {
    /// Builds an instance of `species`.
    pub fn new(
        id: CreatureId,
        species: &Species,
        combat_power: u32,
        position: MapPosition,
    ) -> Self {
        Self {
            id,
            name: species.name,
            element: species.element,
            type_color: species.type_color,
            rarity: species.rarity,
            sprite_url: species.sprite_url(),
            combat_power,
            position,
        }
    }

    /// Short id prefix used by the terminal front end.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}
