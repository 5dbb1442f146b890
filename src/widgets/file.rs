use super::{refresh_in_place, Element, ProfWidget, WidgetOptions};
use crate::core::profile::Profile;
use crate::ui::formatters::format_bytes;

/// File entries reported by the server, in server order, capped at the sample count.
#[derive(Debug)]
pub struct FileWidget {
    limit: usize,
    elements: Vec<Element>,
}

impl FileWidget {
    pub fn new(options: WidgetOptions) -> Self {
        Self {
            limit: options.sample_count,
            elements: Vec::new(),
        }
    }

    fn build(&self, profile: &Profile) -> Vec<Element> {
        let rows: Vec<String> = profile
            .file
            .iter()
            .take(self.limit)
            .map(|entry| format!("{}  {}", entry.name, format_bytes(entry.size)))
            .collect();

        vec![Element::List {
            title: format!("Files ({}/{})", rows.len(), profile.file.len()),
            rows,
        }]
    }
}

impl ProfWidget for FileWidget {
    fn name(&self) -> &'static str {
        "file"
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
