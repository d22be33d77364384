//! # Encounter Generation
//!
//! Spawns wild creatures: a rarity-weighted species pick, a combat-power roll
//! inside the tier's band, and a position inside the map's spawnable area.

use crate::catalog::{species_of, Rarity};
use crate::config::{MAP_COORDINATE_SPAN, MAP_MIN_COORDINATE};
use crate::game::{new_creature_id, Creature, MapPosition};
use crate::{Generator, PokeHuntError, PokeHuntResult, RandomSource};

/// Generator for wild creature spawns.
///
/// # Examples
///
/// ```
/// use pokehunt::{CreatureGenerator, Generator, generation::utils};
///
/// let mut rng = utils::create_rng(Some(7));
/// let generator = CreatureGenerator::new();
/// let creature = generator.spawn(&mut rng);
/// assert!(generator.validate(&creature).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CreatureGenerator;

impl CreatureGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Spawns one creature. Never fails: every tier has at least one species.
    pub fn spawn(&self, rng: &mut dyn RandomSource) -> Creature {
        let rarity = Rarity::from_roll(rng.next_unit());
        let candidates = species_of(rarity);
        let species = candidates[rng.next_below(candidates.len() as u32) as usize];

        let base = rarity.base_combat_power();
        let combat_power = base + rng.next_below(base);

        let position = MapPosition::new(
            MAP_MIN_COORDINATE + rng.next_unit() * MAP_COORDINATE_SPAN,
            MAP_MIN_COORDINATE + rng.next_unit() * MAP_COORDINATE_SPAN,
        );

        let creature = Creature::new(new_creature_id(), species, combat_power, position);
        log::debug!(
            "Spawned {} ({}, CP {}) at ({:.1}, {:.1})",
            creature.name,
            creature.rarity,
            creature.combat_power,
            creature.position.x,
            creature.position.y
        );
        creature
    }
}

impl Generator<Creature> for CreatureGenerator {
    fn generate(&self, rng: &mut dyn RandomSource) -> PokeHuntResult<Creature> {
        let creature = self.spawn(rng);
        self.validate(&creature)?;
        Ok(creature)
    }

    fn validate(&self, creature: &Creature) -> PokeHuntResult<()> {
        if !creature.rarity.combat_power_range().contains(&creature.combat_power) {
            return Err(PokeHuntError::GenerationFailed(format!(
                "{} has CP {} outside the {} range {:?}",
                creature.name,
                creature.combat_power,
                creature.rarity,
                creature.rarity.combat_power_range()
            )));
        }

        if !creature.position.is_spawnable() {
            return Err(PokeHuntError::GenerationFailed(format!(
                "{} spawned off the map band at ({}, {})",
                creature.name, creature.position.x, creature.position.y
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "CreatureGenerator"
    }
}

/// Spawns one creature with the default generator.
pub fn spawn_creature(rng: &mut dyn RandomSource) -> Creature {
    CreatureGenerator::new().spawn(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::species_by_name;
    use crate::generation::utils::create_rng;
    use crate::FixedRoll;
    use std::collections::HashSet;

    /// Replays a scripted list of rolls, then repeats the last one.
    struct ScriptedRolls {
        rolls: Vec<f64>,
        cursor: usize,
    }

    impl RandomSource for ScriptedRolls {
        fn next_unit(&mut self) -> f64 {
            let index = self.cursor.min(self.rolls.len() - 1);
            self.cursor += 1;
            self.rolls[index]
        }
    }

    #[test]
    fn test_low_roll_spawns_common() {
        let creature = spawn_creature(&mut FixedRoll::always_low());
        assert_eq!(creature.rarity, Rarity::Common);
        assert_eq!(creature.name, "Bulbasaur");
        assert_eq!(creature.combat_power, 200);
        assert_eq!(creature.position, MapPosition::new(10.0, 10.0));
    }

    #[test]
    fn test_high_roll_spawns_legendary() {
        let creature = spawn_creature(&mut FixedRoll::always_high());
        assert_eq!(creature.rarity, Rarity::Legendary);
        assert_eq!(creature.name, "Moltres");
        assert!(Rarity::Legendary.combat_power_range().contains(&creature.combat_power));
        assert!(creature.position.x < 90.0);
    }

    #[test]
    fn test_scripted_rolls_pick_species_and_stats() {
        // rare tier, third rare species, half bonus, centre of the map
        let mut rolls = ScriptedRolls {
            rolls: vec![0.75, 2.5 / 7.0, 0.5, 0.5, 0.5],
            cursor: 0,
        };
        let creature = spawn_creature(&mut rolls);
        let expected = species_by_name("Dratini").unwrap();

        assert_eq!(creature.name, expected.name);
        assert_eq!(creature.element, "Dragon");
        assert_eq!(creature.type_color, "#6F35FC");
        assert_eq!(creature.sprite_url, expected.sprite_url());
        assert_eq!(creature.combat_power, 1200);
        assert_eq!(creature.position, MapPosition::new(50.0, 50.0));
    }

    #[test]
    fn test_generated_creatures_validate() {
        let generator = CreatureGenerator::new();
        let mut rng = create_rng(Some(987));
        for _ in 0..500 {
            assert!(generator.generate(&mut rng).is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_broken_creature() {
        let generator = CreatureGenerator::new();
        let mut creature = spawn_creature(&mut FixedRoll::always_low());
        creature.combat_power = 5000;
        assert!(matches!(
            generator.validate(&creature),
            Err(PokeHuntError::GenerationFailed(_))
        ));

        let mut creature = spawn_creature(&mut FixedRoll::always_low());
        creature.position = MapPosition::new(95.0, 50.0);
        assert!(generator.validate(&creature).is_err());
    }

    #[test]
    fn test_spawn_ids_unique() {
        let mut rng = create_rng(Some(1));
        let ids: HashSet<_> = (0..200).map(|_| spawn_creature(&mut rng).id).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_rarity_distribution_roughly_weighted() {
        let mut rng = create_rng(Some(2024));
        let samples = 20_000;
        let legendary = (0..samples)
            .filter(|_| spawn_creature(&mut rng).rarity == Rarity::Legendary)
            .count();
        let share = legendary as f64 / samples as f64;
        assert!((0.08..0.12).contains(&share), "legendary share {share}");
    }

    #[test]
    fn test_generator_type() {
        assert_eq!(CreatureGenerator::new().generator_type(), "CreatureGenerator");
    }
}
