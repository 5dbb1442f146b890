use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the grid in columns; a column's span is a share of this.
pub const GRID_COLUMNS: u16 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub span: u16,
    /// Registry name of the widget drawn in this cell
    pub widget: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub columns: Vec<GridColumn>,
}

/// Fixed row/column arrangement of the dashboard panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<GridRow>,
}

impl Grid {
    pub fn new(rows: Vec<GridRow>) -> Self {
        Self { rows }
    }

    /// CPU across the top, files and disks side by side below.
    pub fn standard() -> Self {
        Self::new(vec![
            GridRow {
                columns: vec![GridColumn {
                    span: 12,
                    widget: "cpu",
                }],
            },
            GridRow {
                columns: vec![
                    GridColumn {
                        span: 6,
                        widget: "file",
                    },
                    GridColumn {
                        span: 6,
                        widget: "disk",
                    },
                ],
            },
        ])
    }

    /// Split `area` into one rectangle per cell, paired with the widget name.
    pub fn cells(&self, area: Rect) -> Vec<(&'static str, Rect)> {
        if self.rows.is_empty() {
            return Vec::new();
        }

        let row_count = self.rows.len() as u32;
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, row_count); self.rows.len()])
            .split(area);

        let mut cells = Vec::new();
        for (row, row_area) in self.rows.iter().zip(row_areas.iter()) {
            let constraints: Vec<Constraint> = row
                .columns
                .iter()
                .map(|column| {
                    Constraint::Ratio(column.span.min(GRID_COLUMNS) as u32, GRID_COLUMNS as u32)
                })
                .collect();
            let column_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(*row_area);

            for (column, column_area) in row.columns.iter().zip(column_areas.iter()) {
                cells.push((column.widget, *column_area));
            }
        }
        cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}
