use std::io::{self, Stdout};

use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::layout::Grid;
use super::render::render_dashboard;
use crate::core::scheduler::Screen;
use crate::error::{GprofError, Result};
use crate::ui::formatters::{format_clock, format_interval};
use crate::widgets::WidgetRegistry;

/// Full-screen terminal the dashboard draws into.
///
/// Raw mode and the alternate screen are active between `init` and `close`;
/// dropping an open screen restores the terminal as well.
pub struct TerminalScreen {
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
    grid: Grid,
    url: String,
    interval_ms: u64,
}

impl TerminalScreen {
    pub fn new(grid: Grid, url: impl Into<String>, interval_ms: u64) -> Self {
        Self {
            terminal: None,
            grid,
            url: url.into(),
            interval_ms,
        }
    }

    fn header(&self) -> String {
        format!(
            "{} │ every {} │ updated {} │ q: quit",
            self.url,
            format_interval(self.interval_ms),
            format_clock(Local::now())
        )
    }
}

impl Screen for TerminalScreen {
    fn init(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            return Ok(());
        }

        enable_raw_mode().map_err(|e| GprofError::tui(format!("Failed to enable raw mode: {}", e)))?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(GprofError::tui(format!(
                "Failed to enter alternate screen: {}",
                e
            )));
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(mut terminal) => {
                let _ = terminal.hide_cursor();
                self.terminal = Some(terminal);
                Ok(())
            }
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(GprofError::tui(format!("Failed to create terminal: {}", e)))
            }
        }
    }

    fn align(&mut self) -> Result<()> {
        if let Some(terminal) = self.terminal.as_mut() {
            terminal
                .autoresize()
                .map_err(|e| GprofError::tui(format!("Failed to resize terminal: {}", e)))?;
        }
        Ok(())
    }

    fn render(&mut self, registry: &WidgetRegistry) -> Result<()> {
        let header = self.header();
        let grid = &self.grid;
        let terminal = self
            .terminal
            .as_mut()
            .ok_or_else(|| GprofError::tui("terminal is not initialized"))?;

        terminal
            .draw(|frame| render_dashboard(frame, &header, grid, registry))
            .map_err(|e| GprofError::tui(format!("Failed to draw dashboard: {}", e)))?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let Some(mut terminal) = self.terminal.take() else {
            return Ok(());
        };

        disable_raw_mode().map_err(|e| GprofError::tui(format!("Failed to disable raw mode: {}", e)))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| GprofError::tui(format!("Failed to leave alternate screen: {}", e)))?;
        terminal
            .show_cursor()
            .map_err(|e| GprofError::tui(format!("Failed to show cursor: {}", e)))?;

        Ok(())
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            log::error!("failed to restore terminal: {}", e);
        }
    }
}
