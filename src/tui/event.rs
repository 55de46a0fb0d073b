//! Event handling for the TUI
//!
//! Terminal events are read on a background thread and forwarded over a
//! channel so the draw loop can block on `next()`.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                let ready = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(e) => {
                        log::error!("event poll failed: {}", e);
                        return;
                    }
                };

                if ready {
                    let forwarded = match event::read() {
                        // Release and repeat events would double every keystroke on Windows
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            Some(Event::Resize(width, height))
                        }
                        Ok(_) => None,
                        Err(e) => {
                            log::error!("event read failed: {}", e);
                            return;
                        }
                    };
                    if let Some(ev) = forwarded {
                        if sender.send(ev).is_err() {
                            return;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver, handler }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to get the next event (non-blocking)
    pub fn try_next(&self) -> Result<Event, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drop key presses that piled up while a host call was blocking the
    /// loop. Returns how many were dropped.
    pub fn discard_pending(&self) -> usize {
        let mut dropped = 0;
        while let Ok(ev) = self.try_next() {
            if matches!(ev, Event::Key(_)) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            log::debug!("discarded {} key events queued during a host call", dropped);
        }
        dropped
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
