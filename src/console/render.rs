use std::fmt::{self, Write};

use crate::game::{Alignment, ColumnIndex, Grid, Position, RowIndex};

const MARGIN: &str = "   ";

/// Render the grid as text, top row first.
///
/// Cells covered by `highlight` are wrapped in parentheses, e.g. `(R)`.
pub fn render_grid(grid: &Grid, highlight: Option<&Alignment>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_grid(&mut out, grid, highlight);
    out
}

fn write_grid(out: &mut impl Write, grid: &Grid, highlight: Option<&Alignment>) -> fmt::Result {
    writeln!(out, "{MARGIN}{}", "-".repeat(29))?;
    for row in RowIndex::all().rev() {
        write!(out, "{MARGIN}|")?;
        for column in ColumnIndex::all() {
            let symbol = grid
                .disk_color_at(column, row)
                .map_or(' ', |color| color.symbol());
            let highlighted = highlight.is_some_and(|a| a.contains(Position::new(column, row)));
            if highlighted {
                write!(out, "({symbol})|")?;
            } else {
                write!(out, " {symbol} |")?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "{MARGIN}{}", "=".repeat(29))?;
    let legend = ColumnIndex::all()
        .map(|column| column.to_string())
        .collect::<Vec<_>>()
        .join("   ");
    // Each number sits under the middle of its cell.
    writeln!(out, "{MARGIN}  {legend}")
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::find_winning_alignment;

    #[test]
    fn test_render_empty_grid() {
        let text = render_grid(&Grid::new(), None);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   -----------------------------");
        assert_eq!(lines[1], "   |   |   |   |   |   |   |   |");
        assert_eq!(lines[7], "   =============================");
        assert_eq!(lines[8], "     1   2   3   4   5   6   7");
    }

    #[test]
    fn test_legend_is_centered_under_cells() {
        let text = render_grid(&Grid::new(), None);
        let lines: Vec<&str> = text.lines().collect();

        let cell_centers: Vec<usize> = (0..7).map(|k| MARGIN.len() + 2 + 4 * k).collect();
        let digit_positions: Vec<usize> = lines[8]
            .char_indices()
            .filter(|(_, c)| c.is_ascii_digit())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(digit_positions, cell_centers);
        assert!(!lines[8].ends_with(' '));
    }

    #[test]
    fn test_render_places_bottom_row_last() {
        let grid = Grid::from_rows([
            "   |   | Y |   |   |   |   |   |   ",
            "   | R | R |   |   |   |   |   |   ",
        ])
        .unwrap();

        let text = render_grid(&grid, None);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[5], "   |   | Y |   |   |   |   |   |");
        assert_eq!(lines[6], "   | R | R |   |   |   |   |   |");
    }

    #[test]
    fn test_render_highlights_alignment() {
        let grid = Grid::from_rows(["   | R | Y | Y | Y | Y |   |   |   "]).unwrap();
        let alignment = find_winning_alignment(&grid).unwrap();

        let text = render_grid(&grid, Some(&alignment));

        assert!(text.contains("   | R |(Y)|(Y)|(Y)|(Y)|   |   |"));
    }

    #[test]
    fn test_display_matches_unhighlighted_render() {
        let grid = Grid::from_rows(["   | R | Y |   |   |   |   |   |   "]).unwrap();
        assert_eq!(grid.to_string(), render_grid(&grid, None));
    }
}
