//! # Catalog Module
//!
//! The fixed species catalog and the numeric model attached to rarity tiers.
//!
//! Every probability the engine uses hangs off [`Rarity`]: how often a tier
//! spawns, its combat-power band, and how hard it is to catch.

use crate::config::SPRITE_URL_TEMPLATE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rarity tier of a species.
///
/// # Examples
///
/// ```
/// use pokehunt::Rarity;
///
/// assert_eq!(Rarity::from_roll(0.59), Rarity::Common);
/// assert_eq!(Rarity::from_roll(0.6), Rarity::Rare);
/// assert_eq!(Rarity::from_roll(0.9), Rarity::Legendary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    /// Upper bound (exclusive) of the common band on a single uniform roll.
    pub const COMMON_ROLL_CEILING: f64 = 0.6;
    /// Upper bound (exclusive) of the rare band; everything above is legendary.
    pub const RARE_ROLL_CEILING: f64 = 0.9;

    /// Maps one uniform draw in [0, 1) to a tier: 60% common, 30% rare, 10% legendary.
    pub fn from_roll(roll: f64) -> Self {
        if roll < Self::COMMON_ROLL_CEILING {
            Rarity::Common
        } else if roll < Self::RARE_ROLL_CEILING {
            Rarity::Rare
        } else {
            Rarity::Legendary
        }
    }

    /// Base combat power. A spawn gets `base + [0, base)`.
    pub fn base_combat_power(self) -> u32 {
        match self {
            Rarity::Common => 200,
            Rarity::Rare => 800,
            Rarity::Legendary => 2000,
        }
    }

    /// Inclusive combat-power range for this tier.
    pub fn combat_power_range(self) -> std::ops::RangeInclusive<u32> {
        let base = self.base_combat_power();
        base..=(2 * base - 1)
    }

    /// A capture roll must be strictly greater than this to succeed.
    pub fn capture_threshold(self) -> f64 {
        0.4 + match self {
            Rarity::Common => 0.0,
            Rarity::Rare => 0.2,
            Rarity::Legendary => 0.4,
        }
    }

    /// Probability that a single capture attempt succeeds.
    pub fn capture_chance(self) -> f64 {
        1.0 - self.capture_threshold()
    }

    /// Upper-case label shown on cards.
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "COMMON",
            Rarity::Rare => "RARE",
            Rarity::Legendary => "LEGENDARY",
        }
    }

    /// Hint shown next to the throw button for harder tiers.
    pub fn capture_hint(self) -> Option<&'static str> {
        match self {
            Rarity::Common => None,
            Rarity::Rare => Some("Harder to catch than normal"),
            Rarity::Legendary => Some("Very hard to catch!"),
        }
    }

    /// All tiers, from most to least common.
    pub fn all() -> [Rarity; 3] {
        [Rarity::Common, Rarity::Rare, Rarity::Legendary]
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Common => write!(f, "common"),
            Rarity::Rare => write!(f, "rare"),
            Rarity::Legendary => write!(f, "legendary"),
        }
    }
}

/// Static catalog entry describing a kind of creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Species {
    pub name: &'static str,
    /// Elemental type label, e.g. "Water"
    pub element: &'static str,
    /// Display color for the type, as `#RRGGBB`
    pub type_color: &'static str,
    pub rarity: Rarity,
    /// National dex number used by the sprite repository
    pub sprite_id: u16,
}

impl Species {
    /// Resolves the sprite image address for this species.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokehunt::species_by_name;
    ///
    /// let pikachu = species_by_name("Pikachu").unwrap();
    /// assert!(pikachu.sprite_url().ends_with("/pokemon/25.png"));
    /// ```
    pub fn sprite_url(&self) -> String {
        SPRITE_URL_TEMPLATE.replace("{id}", &self.sprite_id.to_string())
    }
}

const fn species(
    name: &'static str,
    element: &'static str,
    type_color: &'static str,
    rarity: Rarity,
    sprite_id: u16,
) -> Species {
    Species {
        name,
        element,
        type_color,
        rarity,
        sprite_id,
    }
}

/// The full species catalog.
pub static SPECIES: [Species; 21] = [
    species("Pikachu", "Electric", "#F7D02C", Rarity::Rare, 25),
    species("Bulbasaur", "Grass", "#7AC74C", Rarity::Common, 1),
    species("Charmander", "Fire", "#EE8130", Rarity::Common, 4),
    species("Squirtle", "Water", "#6390F0", Rarity::Common, 7),
    species("Eevee", "Normal", "#A8A77A", Rarity::Common, 133),
    species("Jigglypuff", "Fairy", "#D685AD", Rarity::Common, 39),
    species("Meowth", "Normal", "#A8A77A", Rarity::Common, 52),
    species("Psyduck", "Water", "#6390F0", Rarity::Common, 54),
    species("Geodude", "Rock", "#B6A136", Rarity::Common, 74),
    species("Gastly", "Ghost", "#735797", Rarity::Rare, 92),
    species("Dratini", "Dragon", "#6F35FC", Rarity::Rare, 147),
    species("Mewtwo", "Psychic", "#F95587", Rarity::Legendary, 150),
    species("Mew", "Psychic", "#F95587", Rarity::Legendary, 151),
    species("Snorlax", "Normal", "#A8A77A", Rarity::Rare, 143),
    species("Gengar", "Ghost", "#735797", Rarity::Rare, 94),
    species("Magikarp", "Water", "#6390F0", Rarity::Common, 129),
    species("Gyarados", "Water", "#6390F0", Rarity::Rare, 130),
    species("Lapras", "Ice", "#96D9D6", Rarity::Rare, 131),
    species("Articuno", "Ice", "#96D9D6", Rarity::Legendary, 144),
    species("Zapdos", "Electric", "#F7D02C", Rarity::Legendary, 145),
    species("Moltres", "Fire", "#EE8130", Rarity::Legendary, 146),
];

/// Returns every catalog entry of the given tier, in catalog order.
pub fn species_of(rarity: Rarity) -> Vec<&'static Species> {
    SPECIES.iter().filter(|s| s.rarity == rarity).collect()
}

/// Looks a species up by its exact name.
pub fn species_by_name(name: &str) -> Option<&'static Species> {
    SPECIES.iter().find(|s| s.name == name)
}
