//! # Game State Module
//!
//! The play session: live population, caught collection, selection state
//! machine, and the timers that drive spawning and outcome display.
//!
//! All mutation happens on one thread in response to either a user intent or a
//! timer coming due in [`Session::advance`]. Nothing blocks; every delayed
//! effect is a task in the session-owned [`Scheduler`], and dropping or shutting
//! down the session cancels them all.

use crate::config::MAX_PENDING_EVENTS;
use crate::{
    CaptureOutcome, Creature, CreatureGenerator, CreatureId, PokeHuntResult, RandomSource,
    Rarity, Scheduler, Selection, SessionConfig,
};
use rand::rngs::StdRng;
use serde::Serialize;
use std::time::Duration;

/// Deferred work queued on the session scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Periodic population refill; re-arms itself
    SpawnTick,
    /// End of a ball throw
    ResolveThrow { creature: CreatureId, attempt: u64 },
    /// End of the success or failure display for one attempt
    ClearOutcome { creature: CreatureId, attempt: u64 },
}

/// Something that happened in the session, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Spawned { creature: CreatureId },
    /// A spawn tick found the population at its cap
    SpawnDropped,
    Selected { creature: CreatureId },
    Deselected { creature: CreatureId },
    ThrowStarted { creature: CreatureId },
    Caught { creature: CreatureId },
    Escaped { creature: CreatureId },
    /// Success display ended; the session is back at rest
    SelectionCleared { creature: CreatureId },
    /// Failure display ended; the creature is still selected
    OutcomeCleared { creature: CreatureId },
}

/// Counters describing a session so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStatistics {
    /// Creatures that entered the population
    pub spawned: u32,
    /// Spawn ticks dropped because the population was full
    pub spawns_dropped: u32,
    /// Balls thrown
    pub throws: u32,
    /// Successful captures
    pub catches: u32,
    /// Failed captures
    pub escapes: u32,
}

impl SessionStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a session event.
    pub fn update_from_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Spawned { .. } => self.spawned += 1,
            SessionEvent::SpawnDropped => self.spawns_dropped += 1,
            SessionEvent::ThrowStarted { .. } => self.throws += 1,
            SessionEvent::Caught { .. } => self.catches += 1,
            SessionEvent::Escaped { .. } => self.escapes += 1,
            _ => {}
        }
    }

    /// Resolved capture attempts.
    pub fn attempts(&self) -> u32 {
        self.catches + self.escapes
    }

    /// Share of resolved attempts that succeeded.
    pub fn catch_rate(&self) -> Option<f64> {
        match self.attempts() {
            0 => None,
            n => Some(f64::from(self.catches) / f64::from(n)),
        }
    }
}

/// Aggregate view of the caught collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub total: usize,
    pub common: usize,
    pub rare: usize,
    pub legendary: usize,
    pub total_combat_power: u64,
    /// Name and CP of the strongest catch
    pub strongest: Option<(&'static str, u32)>,
}

impl CollectionSummary {
    /// Summarizes a collection.
    pub fn from_creatures(creatures: &[Creature]) -> Self {
        let mut summary = Self {
            total: creatures.len(),
            ..Self::default()
        };

        for creature in creatures {
            match creature.rarity {
                Rarity::Common => summary.common += 1,
                Rarity::Rare => summary.rare += 1,
                Rarity::Legendary => summary.legendary += 1,
            }
            summary.total_combat_power += u64::from(creature.combat_power);
            if summary
                .strongest
                .map_or(true, |(_, cp)| creature.combat_power > cp)
            {
                summary.strongest = Some((creature.name, creature.combat_power));
            }
        }

        summary
    }

    pub fn count_of(&self, rarity: Rarity) -> usize {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Legendary => self.legendary,
        }
    }
}

/// A single play session.
///
/// Intents never fail: an intent that makes no sense in the current state
/// (unknown creature, no selection, ball already in flight) is ignored.
///
/// # Examples
///
/// ```
/// use pokehunt::{Session, SessionConfig};
/// use std::time::Duration;
///
/// let mut session = Session::seeded(SessionConfig::default(), 42).unwrap();
/// assert_eq!(session.population().len(), 8);
///
/// session.advance(Duration::from_secs(5));
/// assert_eq!(session.population().len(), 9);
/// ```
pub struct Session<S: RandomSource = StdRng> {
    config: SessionConfig,
    rng: S,
    generator: CreatureGenerator,
    population: Vec<Creature>,
    collection: Vec<Creature>,
    selection: Selection,
    scheduler: Scheduler<TimerTask>,
    attempt_seq: u64,
    statistics: SessionStatistics,
    events: Vec<SessionEvent>,
    initialized: bool,
    shut_down: bool,
}

impl Session<StdRng> {
    /// Starts a session on a seeded generator, for reproducible runs.
    pub fn seeded(config: SessionConfig, seed: u64) -> PokeHuntResult<Self> {
        Self::start(config, crate::generation::utils::create_rng(Some(seed)))
    }

    /// Starts a session on an entropy-seeded generator.
    pub fn from_entropy(config: SessionConfig) -> PokeHuntResult<Self> {
        Self::start(config, crate::generation::utils::create_rng(None))
    }
}

impl<S: RandomSource> Session<S> {
    /// Creates an empty, uninitialized session.
    pub fn new(config: SessionConfig, rng: S) -> PokeHuntResult<Self> {
        config.validate()?;
        Ok(Self {
            population: Vec::with_capacity(config.population_cap),
            config,
            rng,
            generator: CreatureGenerator::new(),
            collection: Vec::new(),
            selection: Selection::Idle,
            scheduler: Scheduler::new(),
            attempt_seq: 0,
            statistics: SessionStatistics::new(),
            events: Vec::new(),
            initialized: false,
            shut_down: false,
        })
    }

    /// Creates a session and initializes it.
    pub fn start(config: SessionConfig, rng: S) -> PokeHuntResult<Self> {
        let mut session = Self::new(config, rng)?;
        session.initialize();
        Ok(session)
    }

    /// Seeds the initial population and arms the spawn interval.
    ///
    /// Only the first call has any effect.
    pub fn initialize(&mut self) {
        if self.initialized || self.shut_down {
            log::warn!("Ignoring repeated session initialization");
            return;
        }
        self.initialized = true;

        for _ in 0..self.config.initial_population {
            self.spawn_one();
        }
        self.scheduler
            .schedule(self.config.spawn_interval(), TimerTask::SpawnTick);

        log::info!(
            "Session started with {} wild creatures",
            self.population.len()
        );
    }

    /// Adds one creature unless the population is at its cap.
    ///
    /// Returns whether a creature was added.
    pub fn tick_spawn(&mut self) -> bool {
        if self.shut_down {
            return false;
        }
        if self.population.len() >= self.config.population_cap {
            log::trace!("Population full, spawn dropped");
            self.record(SessionEvent::SpawnDropped);
            return false;
        }
        self.spawn_one();
        true
    }

    /// Selects a creature on the map, replacing any previous selection.
    ///
    /// Returns false, and changes nothing, if the creature is not on the map.
    pub fn select(&mut self, creature: CreatureId) -> bool {
        if self.shut_down {
            return false;
        }
        if !self.population.iter().any(|c| c.id == creature) {
            log::warn!("Ignoring selection of unknown creature {creature}");
            return false;
        }

        self.cancel_selection_timers();
        self.selection = Selection::Choosing { creature };
        self.record(SessionEvent::Selected { creature });
        log::debug!("Selected {creature}");
        true
    }

    /// Resolves a capture attempt on the selected creature right away.
    ///
    /// Returns `None` when no attempt can start: nothing selected, a ball in
    /// flight, or a catch still on display. An escape can be retried at once.
    pub fn attempt_capture(&mut self) -> Option<CaptureOutcome> {
        if self.shut_down || !self.selection.accepts_attempt() {
            log::debug!("Capture attempt ignored in {:?}", self.selection);
            return None;
        }
        let creature = self.selection.creature()?;
        self.cancel_selection_timers();
        let attempt = self.next_attempt();
        self.resolve_capture(creature, attempt)
    }

    /// Throws a ball at the selected creature; the capture resolves after the
    /// configured throw duration.
    ///
    /// Returns whether a throw started.
    pub fn throw_ball(&mut self) -> bool {
        if self.shut_down || !self.selection.accepts_attempt() {
            log::debug!("Throw ignored in {:?}", self.selection);
            return false;
        }
        let Some(creature) = self.selection.creature() else {
            return false;
        };

        self.cancel_selection_timers();
        let attempt = self.next_attempt();
        self.selection = Selection::Throwing { creature, attempt };
        self.scheduler.schedule(
            self.config.throw_duration(),
            TimerTask::ResolveThrow { creature, attempt },
        );
        self.record(SessionEvent::ThrowStarted { creature });
        true
    }

    /// Dismisses the current selection without a capture.
    pub fn deselect(&mut self) {
        if self.shut_down {
            return;
        }
        self.cancel_selection_timers();
        if let Some(creature) = self.selection.creature() {
            self.record(SessionEvent::Deselected { creature });
            log::debug!("Deselected {creature}");
        }
        self.selection = Selection::Idle;
    }

    /// Feeds elapsed time in and fires every timer that came due, in due order.
    ///
    /// Returns how many timers fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if self.shut_down {
            return 0;
        }

        let deadline = self.scheduler.now().saturating_add(elapsed);
        let mut fired = 0;
        while let Some(task) = self.scheduler.pop_due(deadline) {
            log::trace!("Timer fired at {:?}: {:?}", self.scheduler.now(), task);
            self.run_task(task);
            fired += 1;
        }
        self.scheduler.settle(deadline);
        fired
    }

    /// Cancels every pending timer. The session ignores all further input.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        let cancelled = self.scheduler.cancel_all();
        self.shut_down = true;
        log::info!(
            "Session shut down: {} caught, {} timers cancelled",
            self.collection.len(),
            cancelled
        );
    }

    /// Drains the events recorded since the last call.
    ///
    /// Only the latest [`MAX_PENDING_EVENTS`] are kept between calls; the
    /// statistics still count everything.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn population(&self) -> &[Creature] {
        &self.population
    }

    pub fn collection(&self) -> &[Creature] {
        &self.collection
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn outcome(&self) -> CaptureOutcome {
        self.selection.outcome()
    }

    /// The selected creature, wherever it currently lives.
    pub fn selected(&self) -> Option<&Creature> {
        let id = self.selection.creature()?;
        self.find_creature(id)
    }

    /// Looks a creature up on the map, then in the collection.
    pub fn find_creature(&self, id: CreatureId) -> Option<&Creature> {
        self.population
            .iter()
            .chain(self.collection.iter())
            .find(|c| c.id == id)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    pub fn collection_summary(&self) -> CollectionSummary {
        CollectionSummary::from_creatures(&self.collection)
    }

    /// Virtual time since the session was created.
    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    fn spawn_one(&mut self) {
        let creature = self.generator.spawn(&mut self.rng);
        let id = creature.id;
        self.population.push(creature);
        self.record(SessionEvent::Spawned { creature: id });
    }

    fn next_attempt(&mut self) -> u64 {
        self.attempt_seq += 1;
        self.attempt_seq
    }

    fn resolve_capture(&mut self, creature: CreatureId, attempt: u64) -> Option<CaptureOutcome> {
        let Some(index) = self.population.iter().position(|c| c.id == creature) else {
            log::warn!("Selected creature {creature} left the map, clearing selection");
            self.selection = Selection::Idle;
            return None;
        };

        let rarity = self.population[index].rarity;
        let roll = self.rng.next_unit();

        if roll > rarity.capture_threshold() {
            let caught = self.population.remove(index);
            log::info!("Caught {} (CP {})", caught.name, caught.combat_power);
            self.collection.push(caught);
            self.selection = Selection::Caught { creature, attempt };
            self.scheduler.schedule(
                self.config.success_display(),
                TimerTask::ClearOutcome { creature, attempt },
            );
            self.record(SessionEvent::Caught { creature });
            Some(CaptureOutcome::Success)
        } else {
            log::debug!(
                "{} escaped (roll {:.3} <= {:.2})",
                self.population[index].name,
                roll,
                rarity.capture_threshold()
            );
            self.selection = Selection::Escaped { creature, attempt };
            self.scheduler.schedule(
                self.config.failure_display(),
                TimerTask::ClearOutcome { creature, attempt },
            );
            self.record(SessionEvent::Escaped { creature });
            Some(CaptureOutcome::Failure)
        }
    }

    fn run_task(&mut self, task: TimerTask) {
        match task {
            TimerTask::SpawnTick => {
                self.tick_spawn();
                self.scheduler
                    .schedule(self.config.spawn_interval(), TimerTask::SpawnTick);
            }
            TimerTask::ResolveThrow { creature, attempt } => {
                if self.selection == (Selection::Throwing { creature, attempt }) {
                    self.resolve_capture(creature, attempt);
                }
            }
            TimerTask::ClearOutcome { creature, attempt } => match self.selection {
                Selection::Caught {
                    creature: current,
                    attempt: shown,
                } if current == creature && shown == attempt => {
                    self.selection = Selection::Idle;
                    self.record(SessionEvent::SelectionCleared { creature });
                }
                Selection::Escaped {
                    creature: current,
                    attempt: shown,
                } if current == creature && shown == attempt => {
                    self.selection = Selection::Choosing { creature };
                    self.record(SessionEvent::OutcomeCleared { creature });
                }
                _ => log::trace!("Stale outcome clear for {creature} dropped"),
            },
        }
    }

    fn cancel_selection_timers(&mut self) {
        self.scheduler
            .cancel_where(|task| !matches!(task, TimerTask::SpawnTick));
    }

    fn record(&mut self, event: SessionEvent) {
        self.statistics.update_from_event(&event);
        self.events.push(event);

        if self.events.len() > MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
    }
}

impl<S: RandomSource> Drop for Session<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedRoll;

    fn seeded() -> Session {
        Session::seeded(SessionConfig::default(), 12345).unwrap()
    }

    #[test]
    fn test_session_creation() {
        let session = seeded();
        assert_eq!(session.population().len(), 8);
        assert!(session.collection().is_empty());
        assert!(session.selection().is_idle());
        assert_eq!(session.outcome(), CaptureOutcome::None);
        assert_eq!(session.statistics().spawned, 8);
        assert_eq!(session.pending_timers(), 1);
    }

    #[test]
    fn test_new_session_is_empty_until_initialized() {
        let mut session = Session::new(SessionConfig::default(), FixedRoll::always_low()).unwrap();
        assert!(session.population().is_empty());

        session.initialize();
        session.initialize();
        assert_eq!(session.population().len(), 8);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SessionConfig {
            spawn_interval_ms: 0,
            ..SessionConfig::default()
        };
        assert!(Session::new(config, FixedRoll::always_low()).is_err());
    }

    #[test]
    fn test_tick_spawn_respects_cap() {
        let mut session = seeded();
        assert!(session.tick_spawn());
        assert_eq!(session.population().len(), 9);

        for _ in 0..10 {
            session.tick_spawn();
        }
        assert_eq!(session.population().len(), 12);
        assert!(!session.tick_spawn());
        assert_eq!(session.population().len(), 12);
        assert!(session.statistics().spawns_dropped >= 1);
    }

    #[test]
    fn test_spawn_timer_refills_population() {
        let mut session = seeded();
        assert_eq!(session.advance(Duration::from_millis(4999)), 0);
        assert_eq!(session.population().len(), 8);

        assert_eq!(session.advance(Duration::from_millis(1)), 1);
        assert_eq!(session.population().len(), 9);

        session.advance(Duration::from_secs(60));
        assert_eq!(session.population().len(), 12);
    }

    #[test]
    fn test_select_unknown_creature_is_ignored() {
        let mut session = seeded();
        assert!(!session.select(crate::new_creature_id()));
        assert!(session.selection().is_idle());
    }

    #[test]
    fn test_forced_success_moves_creature() {
        let mut session = Session::start(SessionConfig::default(), FixedRoll::always_high()).unwrap();
        let target = session.population()[3].id;

        assert!(session.select(target));
        assert_eq!(session.attempt_capture(), Some(CaptureOutcome::Success));

        assert_eq!(session.population().len(), 7);
        assert_eq!(session.collection().len(), 1);
        assert_eq!(session.collection()[0].id, target);
        assert_eq!(session.outcome(), CaptureOutcome::Success);
        assert_eq!(session.selected().map(|c| c.id), Some(target));

        // further attempts are ignored while the catch is on display
        assert_eq!(session.attempt_capture(), None);
        assert_eq!(session.collection().len(), 1);

        session.advance(Duration::from_millis(1499));
        assert_eq!(session.outcome(), CaptureOutcome::Success);
        session.advance(Duration::from_millis(1));
        assert!(session.selection().is_idle());
        assert_eq!(session.outcome(), CaptureOutcome::None);
    }

    #[test]
    fn test_forced_failure_keeps_selection() {
        let mut session = Session::start(SessionConfig::default(), FixedRoll::always_low()).unwrap();
        let target = session.population()[0].id;

        session.select(target);
        assert_eq!(session.attempt_capture(), Some(CaptureOutcome::Failure));
        assert_eq!(session.population().len(), 8);
        assert!(session.collection().is_empty());
        assert_eq!(session.selection().creature(), Some(target));
        assert_eq!(session.outcome(), CaptureOutcome::Failure);

        // retry straight away while the escape is still on display
        assert_eq!(session.attempt_capture(), Some(CaptureOutcome::Failure));
        assert_eq!(session.statistics().escapes, 2);
        assert_eq!(session.pending_timers(), 2);

        // only the latest escape's clear fires
        session.advance(Duration::from_secs(1));
        assert_eq!(session.outcome(), CaptureOutcome::None);
        assert_eq!(session.selection(), Selection::Choosing { creature: target });
        assert_eq!(session.attempt_capture(), Some(CaptureOutcome::Failure));
        assert_eq!(session.statistics().escapes, 3);
    }

    #[test]
    fn test_attempt_without_selection_is_noop() {
        let mut session = seeded();
        let before: Vec<_> = session.population().iter().map(|c| c.id).collect();

        assert_eq!(session.attempt_capture(), None);
        assert!(!session.throw_ball());

        let after: Vec<_> = session.population().iter().map(|c| c.id).collect();
        assert_eq!(before, after);
        assert!(session.selection().is_idle());
        assert_eq!(session.statistics().attempts(), 0);
    }

    #[test]
    fn test_throw_resolves_after_duration() {
        let mut session = Session::start(SessionConfig::default(), FixedRoll::always_high()).unwrap();
        let target = session.population()[0].id;
        session.select(target);

        assert!(session.throw_ball());
        assert!(session.selection().is_throwing());
        assert!(!session.throw_ball());
        assert_eq!(session.attempt_capture(), None);

        session.advance(Duration::from_millis(799));
        assert!(session.collection().is_empty());

        session.advance(Duration::from_millis(1));
        assert_eq!(session.collection().len(), 1);
        assert_eq!(session.outcome(), CaptureOutcome::Success);
        assert_eq!(session.statistics().throws, 1);
        assert_eq!(session.statistics().catches, 1);
    }

    #[test]
    fn test_deselect_cancels_throw() {
        let mut session = Session::start(SessionConfig::default(), FixedRoll::always_high()).unwrap();
        let target = session.population()[0].id;
        session.select(target);
        session.throw_ball();
        session.deselect();

        session.advance(Duration::from_secs(2));
        assert!(session.collection().is_empty());
        assert!(session.population().iter().any(|c| c.id == target));
        assert!(session.selection().is_idle());
    }

    #[test]
    fn test_reselect_drops_stale_clear() {
        let mut session = Session::start(SessionConfig::default(), FixedRoll::always_low()).unwrap();
        let first = session.population()[0].id;
        let second = session.population()[1].id;

        session.select(first);
        session.attempt_capture();
        session.select(second);
        assert_eq!(session.outcome(), CaptureOutcome::None);

        session.advance(Duration::from_millis(500));
        session.attempt_capture();
        assert_eq!(session.outcome(), CaptureOutcome::Failure);

        // the first escape's clear would have fired here
        session.advance(Duration::from_millis(600));
        assert_eq!(session.outcome(), CaptureOutcome::Failure);
        session.advance(Duration::from_millis(400));
        assert_eq!(session.selection(), Selection::Choosing { creature: second });
    }

    #[test]
    fn test_events_are_recorded_and_drained() {
        let mut session = Session::start(SessionConfig::default(), FixedRoll::always_high()).unwrap();
        let spawned = session.take_events();
        assert_eq!(spawned.len(), 8);
        assert!(session.take_events().is_empty());

        let target = session.population()[0].id;
        session.select(target);
        session.attempt_capture();
        session.advance(Duration::from_millis(1500));

        assert_eq!(
            session.take_events(),
            vec![
                SessionEvent::Selected { creature: target },
                SessionEvent::Caught { creature: target },
                SessionEvent::SelectionCleared { creature: target },
            ]
        );
    }

    #[test]
    fn test_undrained_events_stay_bounded() {
        let mut session = Session::seeded(SessionConfig::default(), 1).unwrap();
        session.advance(Duration::from_secs(24 * 60 * 60));

        // 17_280 spawn ticks: four fill the population, the rest are dropped
        assert_eq!(session.statistics().spawned, 12);
        assert_eq!(session.statistics().spawns_dropped, 17_276);

        let events = session.take_events();
        assert_eq!(events.len(), MAX_PENDING_EVENTS);
        assert!(events.iter().all(|e| *e == SessionEvent::SpawnDropped));
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn test_advance_to_end_of_clock() {
        let config = SessionConfig {
            initial_population: 1,
            population_cap: 1,
            spawn_interval_ms: u64::MAX,
            ..SessionConfig::default()
        };
        let mut session = Session::start(config, FixedRoll::always_low()).unwrap();

        assert!(session.advance(Duration::MAX) > 0);
        assert_eq!(session.elapsed(), Duration::MAX);
        assert_eq!(session.pending_timers(), 0);
        assert_eq!(session.advance(Duration::MAX), 0);
        assert_eq!(session.population().len(), 1);
    }

    #[test]
    fn test_shutdown_cancels_timers() {
        let mut session = seeded();
        let target = session.population()[0].id;
        session.select(target);
        session.throw_ball();
        assert_eq!(session.pending_timers(), 2);

        session.shutdown();
        assert!(session.is_shut_down());
        assert_eq!(session.pending_timers(), 0);
        assert_eq!(session.advance(Duration::from_secs(60)), 0);
        assert_eq!(session.population().len(), 8);
        assert!(!session.tick_spawn());
    }

    #[test]
    fn test_collection_summary() {
        let mut session = Session::start(SessionConfig::default(), FixedRoll::always_high()).unwrap();
        for _ in 0..3 {
            let target = session.population()[0].id;
            session.select(target);
            session.attempt_capture();
        }

        let summary = session.collection_summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.count_of(Rarity::Legendary), 3);
        assert_eq!(summary.common, 0);
        assert_eq!(summary.strongest.map(|(name, _)| name), Some("Moltres"));
        assert!(summary.total_combat_power >= 6000);
    }

    #[test]
    fn test_statistics_catch_rate() {
        let mut stats = SessionStatistics::new();
        assert_eq!(stats.catch_rate(), None);

        let creature = crate::new_creature_id();
        stats.update_from_event(&SessionEvent::Caught { creature });
        stats.update_from_event(&SessionEvent::Escaped { creature });
        stats.update_from_event(&SessionEvent::Escaped { creature });
        stats.update_from_event(&SessionEvent::Selected { creature });

        assert_eq!(stats.attempts(), 3);
        assert!((stats.catch_rate().unwrap() - 1.0 / 3.0).abs() < 1e-9);
    }
}
