use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Paragraph, Sparkline},
};

use super::layout::Grid;
use super::widgets::{colored_gauge, titled_block};
use crate::widgets::{Element, WidgetRegistry};

/// Main render function
pub fn render_dashboard(frame: &mut Frame, header: &str, grid: &Grid, registry: &WidgetRegistry) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, chunks[0], header);

    for (name, area) in grid.cells(chunks[1]) {
        match registry.get(name) {
            Some(widget) => render_elements(frame, area, widget.elements()),
            None => {
                let block = titled_block(name);
                let inner = block.inner(area);
                frame.render_widget(block, area);
                frame.render_widget(
                    Paragraph::new("unavailable").style(Style::default().fg(Color::DarkGray)),
                    inner,
                );
            }
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, header: &str) {
    let line = Line::from(vec![
        Span::styled(" gprof ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(header, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Stack a widget's elements top to bottom inside its grid cell.
fn render_elements(frame: &mut Frame, area: Rect, elements: &[Element]) {
    if elements.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = elements.iter().map(element_constraint).collect();
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (element, element_area) in elements.iter().zip(areas.iter()) {
        render_element(frame, *element_area, element);
    }
}

fn element_constraint(element: &Element) -> Constraint {
    match element {
        Element::Gauge { .. } => Constraint::Length(3),
        Element::Sparkline { .. } => Constraint::Min(4),
        Element::List { .. } => Constraint::Min(3),
    }
}

fn render_element(frame: &mut Frame, area: Rect, element: &Element) {
    match element {
        Element::Gauge {
            title,
            percent,
            label,
        } => {
            let gauge = colored_gauge(*percent, label).block(titled_block(title));
            frame.render_widget(gauge, area);
        }
        Element::Sparkline { title, data, max } => {
            let sparkline = Sparkline::default()
                .block(titled_block(title))
                .data(data)
                .max(*max)
                .style(Style::default().fg(Color::Cyan));
            frame.render_widget(sparkline, area);
        }
        Element::List { title, rows } => {
            let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(row.as_str())).collect();
            let list = List::new(items).block(titled_block(title));
            frame.render_widget(list, area);
        }
    }
}
