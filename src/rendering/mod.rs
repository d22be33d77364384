//! # Rendering Module
//!
//! What the presentation layer gets to see.
//!
//! [`SessionSnapshot`] is the read side of the presentation contract: the
//! population, the collection, the selection and its outcome, serializable as
//! JSON. [`TextDisplay`] turns the same data into plain text for the terminal.

pub mod display;

pub use display::*;

use crate::{
    CaptureOutcome, CollectionSummary, Creature, PokeHuntResult, RandomSource, Selection,
    Session, SessionStatistics,
};
use serde::Serialize;

/// Borrowed, serializable view of a session at one instant.
///
/// # Examples
///
/// ```
/// use pokehunt::{Session, SessionConfig, SessionSnapshot};
///
/// let session = Session::seeded(SessionConfig::default(), 9).unwrap();
/// let snapshot = SessionSnapshot::capture(&session);
/// assert_eq!(snapshot.population.len(), 8);
/// assert!(snapshot.to_json().unwrap().contains("\"outcome\":\"none\""));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot<'a> {
    pub elapsed_ms: u64,
    pub population: &'a [Creature],
    pub collection: &'a [Creature],
    pub selection: Selection,
    pub selected: Option<&'a Creature>,
    pub outcome: CaptureOutcome,
    pub statistics: &'a SessionStatistics,
    pub summary: CollectionSummary,
}

impl<'a> SessionSnapshot<'a> {
    /// Captures the current state of `session`.
    pub fn capture<S: RandomSource>(session: &'a Session<S>) -> Self {
        Self {
            elapsed_ms: u64::try_from(session.elapsed().as_millis()).unwrap_or(u64::MAX),
            population: session.population(),
            collection: session.collection(),
            selection: session.selection(),
            selected: session.selected(),
            outcome: session.outcome(),
            statistics: session.statistics(),
            summary: session.collection_summary(),
        }
    }

    /// Serializes the snapshot as compact JSON.
    pub fn to_json(&self) -> PokeHuntResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the snapshot as pretty JSON.
    pub fn to_json_pretty(&self) -> PokeHuntResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
