use super::{refresh_in_place, Element, ProfWidget, WidgetOptions};
use crate::core::profile::Profile;
use crate::ui::formatters::format_bytes;

/// Gauge for the first (queried) disk and a usage list for up to sample count entries.
#[derive(Debug)]
pub struct DiskWidget {
    limit: usize,
    elements: Vec<Element>,
}

impl DiskWidget {
    pub fn new(options: WidgetOptions) -> Self {
        Self {
            limit: options.sample_count,
            elements: Vec::new(),
        }
    }

    fn build(&self, profile: &Profile) -> Vec<Element> {
        let primary = profile.disk.first();
        let gauge_title = match primary {
            Some(disk) => format!("Disk {}", disk.path),
            None => "Disk".to_string(),
        };

        let rows = profile
            .disk
            .iter()
            .take(self.limit)
            .map(|disk| {
                format!(
                    "{}  {}/{} ({:.1}%)",
                    disk.path,
                    format_bytes(disk.used),
                    format_bytes(disk.total),
                    disk.usage_percent()
                )
            })
            .collect();

        vec![
            Element::percent_gauge(gauge_title, primary.map(|disk| disk.usage_percent())),
            Element::List {
                title: "Disk usage".to_string(),
                rows,
            },
        ]
    }
}

impl ProfWidget for DiskWidget {
    fn name(&self) -> &'static str {
        "disk"
    }

    fn create(&mut self, profile: &Profile) -> &[Element] {
        self.elements = self.build(profile);
        &self.elements
    }

    fn update(&mut self, profile: &Profile) {
        if self.elements.is_empty() {
            return;
        }
        let fresh = self.build(profile);
        refresh_in_place(&mut self.elements, fresh);
    }

    fn elements(&self) -> &[Element] {
        &self.elements
    }
}
