/// Renderable piece of a panel. Panels own these; the dashboard draws them.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Horizontal bar filled to `percent` (0..=100)
    Gauge {
        title: String,
        percent: f64,
        label: String,
    },
    /// Time series of integer samples, scaled against `max`
    Sparkline {
        title: String,
        data: Vec<u64>,
        max: u64,
    },
    List { title: String, rows: Vec<String> },
}

impl Element {
    pub fn title(&self) -> &str {
        match self {
            Element::Gauge { title, .. }
            | Element::Sparkline { title, .. }
            | Element::List { title, .. } => title,
        }
    }

    /// Gauge for a percentage; `None` renders an empty "n/a" bar.
    pub(crate) fn percent_gauge(title: impl Into<String>, percent: Option<f64>) -> Self {
        match percent {
            Some(value) => {
                let value = value.clamp(0.0, 100.0);
                Element::Gauge {
                    title: title.into(),
                    percent: value,
                    label: format!("{:.1}%", value),
                }
            }
            None => Element::Gauge {
                title: title.into(),
                percent: 0.0,
                label: "n/a".to_string(),
            },
        }
    }
}
