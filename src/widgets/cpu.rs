use super::{refresh_in_place, Element, ProfWidget};
use crate::core::profile::Profile;

/// Sparkline values are percent scaled by 10 to keep one decimal
const SPARKLINE_SCALE: f64 = 10.0;
const SPARKLINE_MAX: u64 = 1000;

/// Latest CPU utilization as a gauge plus the sampled series as a sparkline.
#[derive(Debug, Default)]
pub struct CpuWidget {
    elements: Vec<Element>,
}

impl CpuWidget {
    pub fn new() -> Self {
        Self::default()
    }

    fn build(profile: &Profile) -> Vec<Element> {
        let latest = profile.cpu.last().map(|sample| sample.utilization());
        let series: Vec<u64> = profile
            .cpu
            .iter()
            .map(|sample| (sample.utilization() * SPARKLINE_SCALE).round() as u64)
            .collect();

        vec![
            Element::percent_gauge("CPU", latest),
            Element::Sparkline {
                title: format!("CPU history ({} samples)", series.len()),
                data: series,
                max: SPARKLINE_MAX,
            },
        ]
    }
}

impl ProfWidget for CpuWidget {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn create(&mut self, profile: &Profile) -> &[Element] {
        self.elements = Self::build(profile);
        &self.elements
    }

    fn update(&mut self, profile: &Profile) {
        if self.elements.is_empty() {
            return;
        }
        refresh_in_place(&mut self.elements, Self::build(profile));
    }

    fn elements(&self) -> &[Element] {
        &self.elements
    }
}
