//! # Selection State
//!
//! The at-most-one creature under capture consideration, and what the last
//! capture attempt on it did.

use crate::CreatureId;
use serde::Serialize;

/// Result of the most recent capture attempt on the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureOutcome {
    None,
    Success,
    Failure,
}

/// Selection state machine.
///
/// Each phase carries the creature it is about, so an outcome can never exist
/// without a selection. `attempt` numbers the capture attempt a timed phase
/// belongs to; delayed clears compare it to tell their own phase from a newer one.
///
/// ```text
/// Idle -> Choosing --attempt--> Caught  --display--> Idle
///            |      \---------> Escaped --display--> Choosing
///            |                    \--attempt or throw (retry)
///            \--throw--> Throwing --delay--> (attempt)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Selection {
    /// Nothing selected
    Idle,
    /// Creature selected, no outcome yet
    Choosing { creature: CreatureId },
    /// Ball in flight; resolves after the throw duration
    Throwing { creature: CreatureId, attempt: u64 },
    /// Capture succeeded; the creature already sits in the collection
    Caught { creature: CreatureId, attempt: u64 },
    /// Capture failed; the creature is still on the map and still selected
    Escaped { creature: CreatureId, attempt: u64 },
}

impl Selection {
    /// The selected creature, if any.
    pub fn creature(&self) -> Option<CreatureId> {
        match *self {
            Selection::Idle => None,
            Selection::Choosing { creature }
            | Selection::Throwing { creature, .. }
            | Selection::Caught { creature, .. }
            | Selection::Escaped { creature, .. } => Some(creature),
        }
    }

    /// Outcome flag for the current selection.
    pub fn outcome(&self) -> CaptureOutcome {
        match self {
            Selection::Caught { .. } => CaptureOutcome::Success,
            Selection::Escaped { .. } => CaptureOutcome::Failure,
            _ => CaptureOutcome::None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    pub fn is_throwing(&self) -> bool {
        matches!(self, Selection::Throwing { .. })
    }

    /// Whether a new capture attempt may start from this phase.
    ///
    /// A failed creature stays selected, so an escape can be retried at once.
    pub fn accepts_attempt(&self) -> bool {
        matches!(self, Selection::Choosing { .. } | Selection::Escaped { .. })
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Idle
    }
}
