//! Column packing for the option table.
//!
//! Options are laid out column-major. The table aims for four rows, adding
//! rows only once the columns that fit the width budget are full.

use super::text::display_width;

/// Blank columns between option columns.
pub const COLUMN_GAP: usize = 4;
/// Row count the table starts from before growing.
pub const TARGET_ROWS: usize = 4;

/// A rendered cell and its visible width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub width: usize,
}

impl Cell {
    /// A cell whose visible width is measured from `plain`, while `text` may
    /// carry host markup that does not take up columns.
    pub fn new(text: impl Into<String>, plain: &str) -> Self {
        Self {
            text: text.into(),
            width: display_width(plain),
        }
    }
}

/// Rows needed so that `count` options fit in at most `max_columns`.
pub fn grid_rows(count: usize, max_columns: usize) -> usize {
    TARGET_ROWS.max(count.div_ceil(max_columns.max(1)))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionTable {
    columns: Vec<Vec<Cell>>,
    rows: usize,
}

impl OptionTable {
    /// Packs cells into columns for a terminal `width_budget` columns wide.
    pub fn pack(cells: Vec<Cell>, width_budget: usize) -> Self {
        if cells.is_empty() {
            return Self {
                columns: Vec::new(),
                rows: 0,
            };
        }

        let row_width = cells.iter().map(|cell| cell.width).max().unwrap_or(0) + COLUMN_GAP;
        let max_columns = (width_budget / row_width).max(1);
        let rows = grid_rows(cells.len(), max_columns);

        let mut columns = Vec::with_capacity(cells.len().div_ceil(rows));
        let mut cells = cells.into_iter().peekable();
        while cells.peek().is_some() {
            columns.push(cells.by_ref().take(rows).collect::<Vec<_>>());
        }

        Self { columns, rows }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of printed lines; a single short column prints only its cells.
    pub fn line_count(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0).min(self.rows)
    }

    fn column_width(column: &[Cell]) -> usize {
        column.iter().map(|cell| cell.width).max().unwrap_or(0) + COLUMN_GAP
    }

    /// Sum of all column widths, gutters included.
    pub fn width(&self) -> usize {
        self.columns.iter().map(|column| Self::column_width(column)).sum()
    }

    /// Renders the table; missing cells in the last column are blank.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|column| Self::column_width(column))
            .collect();

        let mut lines = Vec::with_capacity(self.line_count());
        for row in 0..self.line_count() {
            let mut line = String::new();
            for (column, width) in self.columns.iter().zip(&widths) {
                match column.get(row) {
                    Some(cell) => {
                        line.push_str(&cell.text);
                        line.push_str(&" ".repeat(width.saturating_sub(cell.width)));
                    }
                    None => line.push_str(&" ".repeat(*width)),
                }
            }
            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(count: usize) -> Vec<Cell> {
        (1..=count)
            .map(|i| {
                let text = format!(" {i}: opt");
                Cell::new(text.clone(), &text)
            })
            .collect()
    }

    #[test]
    fn small_menus_use_a_single_column() {
        let table = OptionTable::pack(cells(3), 78);
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.line_count(), 3);
        assert_eq!(table.render(), " 1: opt\n 2: opt\n 3: opt");
    }

    #[test]
    fn columns_hold_four_rows_before_growing() {
        let table = OptionTable::pack(cells(9), 78);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.line_count(), 4);

        let rendered = table.render();
        let first_line = rendered.lines().next().unwrap();
        assert!(first_line.starts_with(" 1: opt"));
        assert!(first_line.contains(" 5: opt"));
        assert!(first_line.contains(" 9: opt"));
    }

    #[test]
    fn narrow_budget_grows_rows_instead_of_columns() {
        // Each row is 7 wide + 4 gutter = 11; a 22-wide budget fits 2 columns.
        let table = OptionTable::pack(cells(9), 22);
        assert_eq!(grid_rows(9, 2), 5);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.line_count(), 5);
    }

    #[test]
    fn budget_narrower_than_a_row_still_renders_one_column() {
        let table = OptionTable::pack(cells(6), 3);
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.line_count(), 6);
    }

    #[test]
    fn width_sums_padded_columns() {
        let table = OptionTable::pack(cells(5), 78);
        // Two columns of 7-wide cells, each padded by the gutter.
        assert_eq!(table.width(), 2 * (7 + COLUMN_GAP));
    }
}
