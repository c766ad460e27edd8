use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::info;

/// Bounded window of the program sheet that carries data.
pub const MAX_ROWS: usize = 80;
/// Fixed grid width; every row is padded to this many columns.
pub const GRID_WIDTH: usize = 8;

/// Normalized in-memory copy of the program sheet.
///
/// Every row has exactly [`GRID_WIDTH`] cells; every cell is trimmed and
/// blank cells hold the empty string, so extraction code can index and
/// string-match without null checks.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Build a grid from raw string rows, trimming cells and padding or
    /// truncating each row to the fixed width.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = String>,
    {
        let rows = rows
            .into_iter()
            .take(MAX_ROWS)
            .map(|row| {
                let mut cells: Vec<String> = row
                    .into_iter()
                    .take(GRID_WIDTH)
                    .map(|cell| cell.trim().to_string())
                    .collect();
                cells.resize(GRID_WIDTH, String::new());
                cells
            })
            .collect();
        Grid { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (row, col); empty string when out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Load the bounded program window from an Excel workbook.
///
/// A missing file or missing sheet is fatal for the run; no partial
/// output is produced.
pub fn load_grid(path: &Path, sheet: &str) -> Result<Grid> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("Worksheet '{}' not found in {}", sheet, path.display()))?;

    let grid = Grid::from_rows(
        range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>()),
    );

    info!("Loaded {} rows from sheet '{}'", grid.len(), sheet);
    Ok(grid)
}

/// Stringify a spreadsheet cell the way the downstream heuristics expect:
/// empty/error cells become "", everything else its display form.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_padded_to_fixed_width() {
        let grid = Grid::from_rows(vec![
            vec!["a".to_string(), "b".to_string()],
            vec![String::new(); 10],
        ]);
        assert_eq!(grid.len(), 2);
        for row in grid.rows() {
            assert_eq!(row.len(), GRID_WIDTH);
        }
        assert_eq!(grid.cell(0, 0), "a");
        assert_eq!(grid.cell(0, 7), "");
    }

    #[test]
    fn test_cells_trimmed() {
        let grid = Grid::from_rows(vec![vec!["  MAMA  ".to_string(), " x".to_string()]]);
        assert_eq!(grid.cell(0, 0), "MAMA");
        assert_eq!(grid.cell(0, 1), "x");
    }

    #[test]
    fn test_out_of_range_cell_is_empty() {
        let grid = Grid::from_rows(Vec::<Vec<String>>::new());
        assert_eq!(grid.cell(5, 5), "");
        assert!(grid.is_empty());
    }

    #[test]
    fn test_row_window_bounded() {
        let rows = (0..200).map(|i| vec![format!("row{i}")]);
        let grid = Grid::from_rows(rows);
        assert_eq!(grid.len(), MAX_ROWS);
    }
}
