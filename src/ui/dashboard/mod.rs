//! Terminal dashboard for profile snapshots.
//!
//! Draws the widget registry into a fixed grid using ratatui and turns
//! crossterm input into refresh loop events.

mod events;
mod layout;
mod render;
mod terminal;
mod widgets;

pub use events::{map_key, TerminalEvents};
pub use layout::{Grid, GridColumn, GridRow, GRID_COLUMNS};
pub use render::render_dashboard;
pub use terminal::TerminalScreen;
