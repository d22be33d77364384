//! # Command Definitions
//!
//! Line commands typed into the terminal front end.

use crate::{Creature, CreatureId, PlayerIntent};
use std::str::FromStr;

/// Why a command line could not be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

/// How a command names a creature on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// 1-based position in the population listing
    Index(usize),
    /// Leading characters of the creature id
    IdPrefix(String),
}

impl Target {
    /// Finds the creature this target names in `population`.
    pub fn resolve(&self, population: &[Creature]) -> Option<CreatureId> {
        match self {
            Target::Index(index) => index
                .checked_sub(1)
                .and_then(|i| population.get(i))
                .map(|c| c.id),
            Target::IdPrefix(prefix) => {
                let prefix = prefix.to_ascii_lowercase();
                let mut matches = population
                    .iter()
                    .filter(|c| c.id.simple().to_string().starts_with(&prefix));
                match (matches.next(), matches.next()) {
                    (Some(creature), None) => Some(creature.id),
                    _ => None,
                }
            }
        }
    }
}

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the wild population
    List,
    Select(Target),
    /// Resolve a capture right away
    Catch,
    /// Throw a ball
    Throw,
    /// Close the capture panel
    Close,
    /// Show the collection
    Dex,
    /// Dump the session as JSON
    Json,
    Help,
    Quit,
}

impl Command {
    /// Help text listing every command.
    pub const HELP: &'static str = "Commands: list | select <n|id> | throw | catch | close | dex | json | help | quit";

    /// Converts the command into a session intent, if it is one.
    ///
    /// Display-only commands and unresolvable targets yield `None`.
    pub fn to_intent(&self, population: &[Creature]) -> Option<PlayerIntent> {
        match self {
            Command::Select(target) => target
                .resolve(population)
                .map(|creature| PlayerIntent::Select { creature }),
            Command::Catch => Some(PlayerIntent::AttemptCapture),
            Command::Throw => Some(PlayerIntent::ThrowBall),
            Command::Close => Some(PlayerIntent::Dismiss),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let command = match verb.as_str() {
            "list" | "ls" | "map" => Command::List,
            "select" | "s" => {
                let arg = words.next().ok_or(CommandError::MissingArgument("select"))?;
                let target = match arg.parse::<usize>() {
                    Ok(index) => Target::Index(index),
                    Err(_) => Target::IdPrefix(arg.to_string()),
                };
                Command::Select(target)
            }
            "catch" | "c" => Command::Catch,
            "throw" | "t" => Command::Throw,
            "close" | "x" | "run" => Command::Close,
            "dex" | "pokedex" => Command::Dex,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
