use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::scheduler::{EventSource, LoopEvent};
use crate::error::{GprofError, Result};

/// Map a key press to a loop event; keys without a binding yield `None`.
pub fn map_key(key: KeyEvent) -> Option<LoopEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(LoopEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(LoopEvent::Quit)
        }
        _ => None,
    }
}

/// Keyboard and timer events from the terminal.
///
/// Blocks until a key with a binding is pressed, the terminal is resized, or
/// the tick period has elapsed since the previous tick.
pub struct TerminalEvents {
    tick_rate: Duration,
    last_tick: Instant,
}

impl TerminalEvents {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }
}

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> Result<LoopEvent> {
        loop {
            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)
                .map_err(|e| GprofError::tui(format!("Event poll failed: {}", e)))?
            {
                match event::read()
                    .map_err(|e| GprofError::tui(format!("Event read failed: {}", e)))?
                {
                    Event::Key(key) => {
                        if let Some(loop_event) = map_key(key) {
                            return Ok(loop_event);
                        }
                    }
                    Event::Resize(_, _) => return Ok(LoopEvent::Resize),
                    _ => {}
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(LoopEvent::Tick);
            }
        }
    }
}
