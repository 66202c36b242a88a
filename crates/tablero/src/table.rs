//! Markdown table rendering
//!
//! Renders a dataset as a GitHub-style pipe table. Cell values pass
//! through verbatim apart from what the table format itself requires:
//! literal pipes are escaped and embedded newlines become `<br>` so a
//! record stays on one source line. Columns are padded to a uniform
//! width for readable markdown source.

use crate::dataset::Dataset;

/// Render the full dataset as markdown table lines, header first.
#[must_use]
pub fn render_table(dataset: &Dataset) -> Vec<String> {
    let header: Vec<String> = dataset.header().iter().map(|c| escape_cell(c)).collect();
    let rows: Vec<Vec<String>> = dataset
        .records()
        .iter()
        .map(|r| r.fields().iter().map(|f| escape_cell(f)).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|c| cell_width(c)).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell_width(cell));
        }
    }
    // A separator needs at least three dashes to register as a table.
    for w in &mut widths {
        *w = (*w).max(3);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(&header, &widths));
    lines.push(render_separator(&widths));
    for row in &rows {
        lines.push(render_row(row, &widths));
    }
    lines
}

/// Escape a cell value for use inside a pipe table.
#[must_use]
pub fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\r', '\n'], "<br>")
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        for _ in cell_width(cell)..*width {
            line.push(' ');
        }
        line.push_str(" |");
    }
    line
}

fn render_separator(widths: &[usize]) -> String {
    let mut line = String::from("|");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('|');
    }
    line
}
