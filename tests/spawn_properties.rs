//! Property tests for spawning and population growth.

use pokehunt::{
    species_by_name, CaptureOutcome, CreatureGenerator, FixedRoll, Generator, Rarity, Session,
    SessionConfig,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

proptest! {
    #[test]
    fn spawned_creatures_are_well_formed(seed in any::<u64>()) {
        let generator = CreatureGenerator::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..50 {
            let creature = generator.generate(&mut rng).unwrap();
            let species = species_by_name(creature.name).expect("catalog species");

            prop_assert_eq!(species.rarity, creature.rarity);
            prop_assert_eq!(creature.element, species.element);
            prop_assert_eq!(creature.sprite_url.clone(), species.sprite_url());

            prop_assert!(creature.rarity.combat_power_range().contains(&creature.combat_power));
            prop_assert!((10.0..=90.0).contains(&creature.position.x));
            prop_assert!((10.0..=90.0).contains(&creature.position.y));
            prop_assert!(generator.validate(&creature).is_ok());
        }
    }

    #[test]
    fn population_never_exceeds_cap(seed in any::<u64>(), steps in prop::collection::vec(1u64..20_000, 1..30)) {
        let mut session = Session::seeded(SessionConfig::default(), seed).unwrap();

        for step in steps {
            session.advance(Duration::from_millis(step));
            prop_assert!(session.population().len() <= session.config().population_cap);
        }
    }

    #[test]
    fn any_unit_roll_is_a_valid_source(roll in 0.0f64..1.0) {
        let mut session = Session::start(SessionConfig::default(), FixedRoll::new(roll)).unwrap();
        let target = session.population()[0].id;
        let rarity = session.population()[0].rarity;

        session.select(target);
        let outcome = session.attempt_capture();
        let expected = if roll > rarity.capture_threshold() {
            CaptureOutcome::Success
        } else {
            CaptureOutcome::Failure
        };
        prop_assert_eq!(outcome, Some(expected));
    }
}

#[test]
fn test_tier_shares_follow_weights() {
    let generator = CreatureGenerator::new();
    let mut rng = StdRng::seed_from_u64(7);
    let total = 20_000;

    let mut counts = [0usize; 3];
    for _ in 0..total {
        let index = match generator.spawn(&mut rng).rarity {
            Rarity::Common => 0,
            Rarity::Rare => 1,
            Rarity::Legendary => 2,
        };
        counts[index] += 1;
    }

    let share = |n: usize| n as f64 / total as f64;
    assert!((share(counts[0]) - 0.6).abs() < 0.02);
    assert!((share(counts[1]) - 0.3).abs() < 0.02);
    assert!((share(counts[2]) - 0.1).abs() < 0.02);
}
