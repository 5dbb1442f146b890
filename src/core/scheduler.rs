//! Refresh loop driving fetch, widget updates and redraws.
//!
//! The loop is single threaded: it blocks on the next [`LoopEvent`], handles it
//! to completion and only then waits again. A fetch failure at any point ends
//! the session; there is no retry.

use crate::core::fetch::ProfileSource;
use crate::error::Result;
use crate::widgets::WidgetRegistry;

/// Events that drive the refresh loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// Refresh period elapsed
    Tick,
    /// User asked to quit
    Quit,
    /// Terminal size changed, redraw without fetching
    Resize,
}

/// Blocking source of loop events (keyboard + timer in the real dashboard).
pub trait EventSource {
    fn next_event(&mut self) -> Result<LoopEvent>;
}

/// Where the dashboard is drawn.
pub trait Screen {
    fn init(&mut self) -> Result<()>;

    /// Recompute the layout for the current screen size.
    fn align(&mut self) -> Result<()>;

    fn render(&mut self, registry: &WidgetRegistry) -> Result<()>;

    fn close(&mut self) -> Result<()>;
}

/// Why a refresh loop that did not fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// User asked to quit
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Initializing,
    Running,
    Stopped,
}

pub struct RefreshScheduler<S, D, E> {
    source: S,
    screen: D,
    events: E,
    registry: WidgetRegistry,
    state: SchedulerState,
}

impl<S, D, E> RefreshScheduler<S, D, E>
where
    S: ProfileSource,
    D: Screen,
    E: EventSource,
{
    pub fn new(source: S, screen: D, events: E, registry: WidgetRegistry) -> Self {
        Self {
            source,
            screen,
            events,
            registry,
            state: SchedulerState::Initializing,
        }
    }

    /// Run until the user quits (`Ok`) or a step fails (`Err`).
    ///
    /// The screen is closed exactly once whenever `init` succeeded.
    pub fn run(&mut self) -> Result<StopReason> {
        self.state = SchedulerState::Initializing;
        if let Err(e) = self.screen.init() {
            self.state = SchedulerState::Stopped;
            return Err(e);
        }

        let outcome = self.drive();
        self.state = SchedulerState::Stopped;

        let closed = self.screen.close();
        match outcome {
            Ok(reason) => closed.map(|()| reason),
            Err(e) => {
                if let Err(close_err) = closed {
                    log::error!("failed to close screen: {}", close_err);
                }
                log::error!("refresh loop stopped ({}): {}", e.kind(), e);
                Err(e)
            }
        }
    }

    fn drive(&mut self) -> Result<StopReason> {
        let profile = self.source.fetch()?;
        self.registry.create_all(&profile)?;
        self.screen.render(&self.registry)?;

        self.state = SchedulerState::Running;
        log::info!("dashboard running with {} widgets", self.registry.len());

        loop {
            match self.events.next_event()? {
                LoopEvent::Quit => {
                    log::info!("quit requested");
                    return Ok(StopReason::Quit);
                }
                LoopEvent::Tick => self.refresh()?,
                LoopEvent::Resize => {
                    self.screen.align()?;
                    self.screen.render(&self.registry)?;
                }
            }
        }
    }

    fn refresh(&mut self) -> Result<()> {
        self.screen.align()?;
        let profile = self.source.fetch()?;
        self.registry.update_all(&profile);
        self.screen.render(&self.registry)
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn screen(&self) -> &D {
        &self.screen
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }
}
