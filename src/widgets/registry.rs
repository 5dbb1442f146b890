use std::collections::BTreeMap;

use super::{CpuWidget, DiskWidget, FileWidget, ProfWidget, WidgetOptions};
use crate::core::profile::Profile;
use crate::error::{GprofError, Result};

/// One panel per subsystem name, created once and updated on every refresh.
#[derive(Default)]
pub struct WidgetRegistry {
    widgets: BTreeMap<&'static str, Box<dyn ProfWidget>>,
    created: bool,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the cpu, file and disk panels
    pub fn with_defaults(options: WidgetOptions) -> Self {
        let mut registry = Self::new();
        registry.widgets.insert("cpu", Box::new(CpuWidget::new()));
        registry.widgets.insert("file", Box::new(FileWidget::new(options)));
        registry.widgets.insert("disk", Box::new(DiskWidget::new(options)));
        registry
    }

    /// Add or replace a panel. Only allowed before [`WidgetRegistry::create_all`].
    pub fn register(&mut self, widget: Box<dyn ProfWidget>) -> Result<()> {
        if self.created {
            return Err(GprofError::widget(format!(
                "cannot register {:?} after widgets were created",
                widget.name()
            )));
        }
        self.widgets.insert(widget.name(), widget);
        Ok(())
    }

    /// Create every panel from the first profile. Runs at most once.
    pub fn create_all(&mut self, profile: &Profile) -> Result<()> {
        if self.created {
            return Err(GprofError::widget("widgets were already created"));
        }

        for (name, widget) in self.widgets.iter_mut() {
            let elements = widget.create(profile);
            log::debug!("created {} widget with {} elements", name, elements.len());
        }
        self.created = true;
        Ok(())
    }

    /// Refresh every panel from the same snapshot.
    pub fn update_all(&mut self, profile: &Profile) {
        for widget in self.widgets.values_mut() {
            widget.update(profile);
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn ProfWidget> {
        self.widgets.get(name).map(|widget| widget.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.widgets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn is_created(&self) -> bool {
        self.created
    }
}
