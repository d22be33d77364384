//! # Session Driver
//!
//! Runs a session against the wall clock.
//!
//! The driver owns the session, ticks it on a tokio interval, and hands every
//! incoming message to a [`SessionHandler`]. Everything happens on the task
//! that awaits [`SessionDriver::run`], so the session is never touched from two
//! places at once. When the message channel closes or the handler asks to stop,
//! the session is shut down (cancelling its timers) and handed back.

use crate::{PlayerIntent, RandomSource, Session, SessionEvent};
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

/// Default wall-clock tick for the driver loop.
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Front end plugged into a [`SessionDriver`].
pub trait SessionHandler<S: RandomSource> {
    /// Messages the front end sends to the driver.
    type Message;

    /// Handles one message. Return `ControlFlow::Break` to stop the driver.
    fn handle_message(&mut self, session: &mut Session<S>, message: Self::Message)
        -> ControlFlow<()>;

    /// Receives the events produced by the latest step, in order.
    fn handle_events(&mut self, session: &Session<S>, events: Vec<SessionEvent>);
}

/// Handler that applies raw intents and keeps every event it sees.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<SessionEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: RandomSource> SessionHandler<S> for EventLog {
    type Message = PlayerIntent;

    fn handle_message(&mut self, session: &mut Session<S>, intent: PlayerIntent) -> ControlFlow<()> {
        intent.apply(session);
        ControlFlow::Continue(())
    }

    fn handle_events(&mut self, _session: &Session<S>, events: Vec<SessionEvent>) {
        self.events.extend(events);
    }
}

/// Drives a session in real time.
pub struct SessionDriver<S: RandomSource> {
    session: Session<S>,
    tick: Duration,
    last_step: Instant,
}

impl<S: RandomSource> SessionDriver<S> {
    /// Creates a driver that ticks every `tick`.
    pub fn new(session: Session<S>, tick: Duration) -> Self {
        Self {
            session,
            tick: tick.max(Duration::from_millis(1)),
            last_step: Instant::now(),
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Runs until the channel closes or the handler breaks, then shuts the
    /// session down and returns it.
    pub async fn run<H>(mut self, mut messages: mpsc::Receiver<H::Message>, handler: &mut H) -> Session<S>
    where
        H: SessionHandler<S>,
    {
        let mut interval = tokio::time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.last_step = Instant::now();
        log::debug!("Driver started with a {:?} tick", self.tick);

        self.flush_events(handler);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.catch_up();
                }
                message = messages.recv() => {
                    let Some(message) = message else {
                        log::debug!("Input channel closed");
                        break;
                    };
                    // timers due before the message must fire first
                    self.catch_up();
                    if handler.handle_message(&mut self.session, message).is_break() {
                        self.flush_events(handler);
                        break;
                    }
                }
            }
            self.flush_events(handler);
        }

        self.session.shutdown();
        self.session
    }

    fn catch_up(&mut self) {
        let now = Instant::now();
        self.session.advance(now - self.last_step);
        self.last_step = now;
    }

    fn flush_events<H: SessionHandler<S>>(&mut self, handler: &mut H) {
        let events = self.session.take_events();
        if !events.is_empty() {
            handler.handle_events(&self.session, events);
        }
    }
}
