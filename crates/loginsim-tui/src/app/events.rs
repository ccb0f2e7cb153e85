//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent};
use futures::StreamExt;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw tick (lockout countdown)
    Tick,
    /// Input stream ended
    Closed,
}

/// Merges crossterm's input stream with a redraw tick
pub struct EventHandler {
    /// Terminal input
    stream: EventStream,
    /// Tick timer
    tick: Interval,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let mut tick = interval(tick_rate);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            stream: EventStream::new(),
            tick,
        }
    }

    /// Wait for the next event; cancel-safe
    pub async fn next(&mut self) -> std::io::Result<Event> {
        loop {
            tokio::select! {
                _ = self.tick.tick() => return Ok(Event::Tick),
                event = self.stream.next() => match event {
                    Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                    Some(Ok(CrosstermEvent::Resize(width, height))) => {
                        return Ok(Event::Resize(width, height))
                    }
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e),
                    None => return Ok(Event::Closed),
                },
            }
        }
    }
}
