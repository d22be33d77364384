//! # PokeHunt Terminal Entry Point
//!
//! Starts a session, drives it in real time, and reads commands from stdin.

use clap::Parser;
use pokehunt::{
    Command, CommandError, PokeHuntError, PokeHuntResult, RandomSource, Session, SessionConfig,
    SessionDriver, SessionEvent, SessionHandler, SessionSnapshot, TextDisplay,
};
use std::io::BufRead;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
#[cfg(feature = "dev-tools")]
use tracing::{error, info, Level};

#[cfg(not(feature = "dev-tools"))]
use log::{error, info};

/// Command line arguments for PokeHunt.
#[derive(Parser, Debug)]
#[command(name = "pokehunt")]
#[command(about = "Catch wild Pokemon roaming a map, from your terminal")]
#[command(version)]
struct Args {
    /// Random seed for spawns and capture rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Session configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Driver tick in milliseconds
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Print a JSON snapshot after every batch of events
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> PokeHuntResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting PokeHunt v{}", pokehunt::VERSION);

    let config = match &args.config {
        Some(path) => SessionConfig::from_json_file(path)?,
        None => SessionConfig::default(),
    };

    let session = match args.seed {
        Some(seed) => Session::seeded(config, seed),
        None => Session::from_entropy(config),
    }
    .map_err(|e| {
        error!("Failed to start session: {}", e);
        e
    })?;

    let (tx, rx) = mpsc::channel(32);
    spawn_input_thread(tx);

    println!("PokeHunt v{}", pokehunt::VERSION);
    println!("{}", Command::HELP);

    let mut terminal = TerminalHandler::new(args.json);
    terminal.print_population(&session);

    let driver = SessionDriver::new(session, Duration::from_millis(args.tick_ms));
    let session = driver.run(rx, &mut terminal).await;

    let stats = session.statistics();
    println!(
        "Session over after {:.1}s: {} caught, {} escaped, {} spawned.",
        session.elapsed().as_secs_f64(),
        stats.catches,
        stats.escapes,
        stats.spawned
    );
    info!("PokeHunt finished");
    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> PokeHuntResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| PokeHuntError::InvalidConfig(format!("logging: {e}")))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .try_init()
            .map_err(|e| PokeHuntError::InvalidConfig(format!("logging: {e}")))?;
    }

    Ok(())
}

/// Reads stdin on a plain thread so a pending read never holds up shutdown.
fn spawn_input_thread(tx: mpsc::Sender<Result<Command, CommandError>>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            if tx.blocking_send(line.parse()).is_err() {
                break;
            }
        }
    });
}

/// Prints session activity and turns typed commands into intents.
struct TerminalHandler {
    display: TextDisplay,
    json: bool,
}

impl TerminalHandler {
    fn new(json: bool) -> Self {
        Self {
            display: TextDisplay::new(),
            json,
        }
    }

    fn print_population<S: RandomSource>(&self, session: &Session<S>) {
        print!("{}", self.display.render_population(&SessionSnapshot::capture(session)));
    }

    fn print_selection<S: RandomSource>(&self, session: &Session<S>) {
        if let Some(panel) = self.display.render_selection(&SessionSnapshot::capture(session)) {
            print!("{panel}");
        }
    }

    fn print_json<S: RandomSource>(&self, session: &Session<S>, pretty: bool) {
        let snapshot = SessionSnapshot::capture(session);
        let json = if pretty {
            snapshot.to_json_pretty()
        } else {
            snapshot.to_json()
        };
        match json {
            Ok(json) => println!("{json}"),
            Err(e) => error!("Failed to serialize snapshot: {}", e),
        }
    }
}

impl<S: RandomSource> SessionHandler<S> for TerminalHandler {
    type Message = Result<Command, CommandError>;

    fn handle_message(&mut self, session: &mut Session<S>, message: Self::Message) -> ControlFlow<()> {
        let command = match message {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                return ControlFlow::Continue(());
            }
        };

        match command {
            Command::Quit => return ControlFlow::Break(()),
            Command::Help => println!("{}", Command::HELP),
            Command::List => self.print_population(session),
            Command::Dex => {
                print!("{}", self.display.render_collection(&SessionSnapshot::capture(session)));
            }
            Command::Json => self.print_json(session, true),
            Command::Select(_) | Command::Catch | Command::Throw | Command::Close => {
                let Some(intent) = command.to_intent(session.population()) else {
                    println!("No wild Pokemon matches that.");
                    return ControlFlow::Continue(());
                };
                if !intent.apply(session) {
                    println!("Nothing happens.");
                } else if matches!(command, Command::Select(_)) {
                    self.print_selection(session);
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn handle_events(&mut self, session: &Session<S>, events: Vec<SessionEvent>) {
        let snapshot = SessionSnapshot::capture(session);
        for event in &events {
            if let Some(message) = self.display.record_event(event, &snapshot) {
                println!("{message}");
            }
        }

        let resolved = events
            .iter()
            .any(|e| matches!(e, SessionEvent::Caught { .. } | SessionEvent::Escaped { .. }));
        if resolved {
            self.print_selection(session);
        }
        if self.json {
            self.print_json(session, false);
        }
    }
}
