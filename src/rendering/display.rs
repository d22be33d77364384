//! # Text Display
//!
//! Plain-text rendering of session state and a rolling message log.

use crate::{CaptureOutcome, Creature, Rarity, SessionEvent, SessionSnapshot};
use std::fmt::Write as _;

/// Text front end state.
#[derive(Debug, Clone)]
pub struct TextDisplay {
    /// Message log, oldest first
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
}

impl Default for TextDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            max_messages: 100,
        }
    }

    /// Adds a message to the log, dropping the oldest past the limit.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }

    /// Logs a message describing `event`, if it is worth telling the player,
    /// and returns it.
    pub fn record_event(
        &mut self,
        event: &SessionEvent,
        snapshot: &SessionSnapshot<'_>,
    ) -> Option<&str> {
        let name = |id| {
            snapshot
                .population
                .iter()
                .chain(snapshot.collection.iter())
                .find(|c: &&Creature| c.id == id)
                .map_or("???", |c| c.name)
        };

        let message = match *event {
            SessionEvent::Spawned { creature } => {
                format!("A wild {} appeared!", name(creature))
            }
            SessionEvent::ThrowStarted { creature } => {
                format!("You threw a ball at {}...", name(creature))
            }
            SessionEvent::Caught { creature } => format!("GOTCHA! {} was caught!", name(creature)),
            SessionEvent::Escaped { creature } => format!("ESCAPED! {} broke free.", name(creature)),
            _ => return None,
        };
        self.add_message(message);
        self.messages.last().map(String::as_str)
    }

    /// The last `count` messages, oldest first.
    pub fn recent_messages(&self, count: usize) -> &[String] {
        let start = self.messages.len().saturating_sub(count);
        &self.messages[start..]
    }

    /// Numbered list of wild creatures; numbers start at 1.
    pub fn render_population(&self, snapshot: &SessionSnapshot<'_>) -> String {
        let mut out = format!("{} WILD POKEMON NEARBY\n", snapshot.population.len());
        for (index, creature) in snapshot.population.iter().enumerate() {
            let marker = if snapshot.selected.map(|c| c.id) == Some(creature.id) {
                '>'
            } else {
                ' '
            };
            let _ = writeln!(out, "{marker}{:>3}. {}", index + 1, creature_line(creature));
        }
        out
    }

    /// Caught creatures plus per-tier counts.
    pub fn render_collection(&self, snapshot: &SessionSnapshot<'_>) -> String {
        if snapshot.collection.is_empty() {
            return "No Pokemon caught yet! Select one on the map to catch it.\n".to_string();
        }

        let summary = &snapshot.summary;
        let mut out = format!(
            "CAUGHT POKEMON ({}): {} common, {} rare, {} legendary\n",
            summary.total, summary.common, summary.rare, summary.legendary
        );
        for creature in snapshot.collection {
            let _ = writeln!(out, "  - {}", creature_line(creature));
        }
        if let Some((name, cp)) = summary.strongest {
            let _ = writeln!(out, "Strongest: {name} (CP {cp})");
        }
        out
    }

    /// The capture panel for the current selection, or `None` when idle.
    pub fn render_selection(&self, snapshot: &SessionSnapshot<'_>) -> Option<String> {
        let creature = snapshot.selected?;
        let mut out = format!(
            "{} {} [{}] CP {}\n",
            creature.rarity.label(),
            creature.name,
            creature.element,
            creature.combat_power
        );

        let status = if snapshot.selection.is_throwing() {
            "THROWING..."
        } else {
            match snapshot.outcome {
                CaptureOutcome::Success => "CAUGHT!",
                CaptureOutcome::Failure => "ESCAPED!",
                CaptureOutcome::None => "Ready: `throw` or `catch`, `close` to leave",
            }
        };
        let _ = writeln!(out, "{status}");

        if snapshot.outcome != CaptureOutcome::Success {
            if let Some(hint) = creature.rarity.capture_hint() {
                let _ = writeln!(out, "{hint}");
            }
        }
        Some(out)
    }
}

fn creature_line(creature: &Creature) -> String {
    let tag = match creature.rarity {
        Rarity::Common => "",
        Rarity::Rare => " *",
        Rarity::Legendary => " **",
    };
    format!(
        "{:<11} {:<9} CP {:>4}  @ ({:>4.1}, {:>4.1}){tag}",
        creature.name, creature.element, creature.combat_power, creature.position.x, creature.position.y
    )
}
