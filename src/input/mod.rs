//! # Input Module
//!
//! Player intents and the terminal command parser.
//!
//! [`PlayerIntent`] is the write side of the presentation contract. Whatever
//! front end is in use turns its input into intents and applies them to the
//! session; intents that make no sense in the current state are ignored.

pub mod commands;

pub use commands::*;

use crate::{CreatureId, RandomSource, Session};
use serde::{Deserialize, Serialize};

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum PlayerIntent {
    /// Pick a creature on the map
    Select { creature: CreatureId },
    /// Resolve a capture on the selection right away
    AttemptCapture,
    /// Throw a ball; the capture resolves when it lands
    ThrowBall,
    /// Close the capture panel
    Dismiss,
}

impl PlayerIntent {
    /// Applies the intent to `session`. Returns whether anything changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokehunt::{PlayerIntent, Session, SessionConfig};
    ///
    /// let mut session = Session::seeded(SessionConfig::default(), 3).unwrap();
    /// let creature = session.population()[0].id;
    ///
    /// assert!(PlayerIntent::Select { creature }.apply(&mut session));
    /// assert!(PlayerIntent::Dismiss.apply(&mut session));
    /// assert!(!PlayerIntent::AttemptCapture.apply(&mut session));
    /// ```
    pub fn apply<S: RandomSource>(self, session: &mut Session<S>) -> bool {
        match self {
            PlayerIntent::Select { creature } => session.select(creature),
            PlayerIntent::AttemptCapture => session.attempt_capture().is_some(),
            PlayerIntent::ThrowBall => session.throw_ball(),
            PlayerIntent::Dismiss => {
                let had_selection = !session.selection().is_idle();
                session.deselect();
                had_selection
            }
        }
    }
}
