//! Dashboard panels.
//!
//! Each panel turns a [`Profile`] into a fixed list of [`Element`]s when it is
//! created and afterwards rewrites those same elements in place on every
//! refresh. The [`WidgetRegistry`] holds one panel per subsystem and drives
//! them uniformly.

mod cpu;
mod disk;
mod element;
mod file;
mod registry;

pub use cpu::CpuWidget;
pub use disk::DiskWidget;
pub use element::Element;
pub use file::FileWidget;
pub use registry::WidgetRegistry;

use crate::core::profile::Profile;

/// Options shared by every built-in panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetOptions {
    /// Maximum rows a list panel shows
    pub sample_count: usize,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self { sample_count: 5 }
    }
}

/// A panel bound to one subsystem of the profile.
pub trait ProfWidget {
    /// Subsystem name, also the registry key
    fn name(&self) -> &'static str;

    /// Build this panel's elements from the first profile.
    fn create(&mut self, profile: &Profile) -> &[Element];

    /// Refresh the already created elements from a newer profile.
    ///
    /// Does nothing until [`ProfWidget::create`] has run.
    fn update(&mut self, profile: &Profile);

    fn elements(&self) -> &[Element];
}

/// Overwrite `current` slot by slot, keeping element order and count.
fn refresh_in_place(current: &mut [Element], fresh: Vec<Element>) {
    debug_assert_eq!(current.len(), fresh.len());
    for (slot, element) in current.iter_mut().zip(fresh) {
        *slot = element;
    }
}
