//! Solution renderer: maps the chosen exact-cover rows back to a labeled
//! char grid.

use crate::board::Board;
use crate::catalog::Catalog;
use crate::error::SolveError;
use crate::exact_cover::Placement;
use crate::shape::BOARD_WIDTH;

/// Paints an H×W grid of spaces, then one letter per occupied cell of every
/// chosen placement.
pub fn render(catalog: &Catalog, board: &Board, placements: &[Placement]) -> Result<Vec<Vec<char>>, SolveError> {
    let mut grid = vec![vec![' '; board.width()]; board.height()];

    for placement in placements {
        let shape = catalog.shape(placement.orientation);
        let letter = catalog.name(catalog.identity(placement.orientation));

        for (i, &row_mask) in shape.iter().enumerate() {
            for j in 0..BOARD_WIDTH {
                if row_mask & (1 << j) == 0 {
                    continue;
                }
                let r = placement.row + i;
                let c = placement.col + j;
                if r >= board.height() || c >= board.width() {
                    return Err(SolveError::PlacementOutOfBounds { row: r, col: c });
                }
                grid[r][c] = letter;
            }
        }
    }

    Ok(grid)
}

/// Formats a rendered grid as the stdout body the CLI prints: one line per
/// row, each cell followed by a single space (including a trailing space
/// after the last letter on the line, per the external interface contract).
pub fn format_grid(grid: &[Vec<char>]) -> String {
    let mut out = String::new();
    for row in grid {
        for &cell in row {
            out.push(cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn renders_a_single_horizontal_i_piece() {
        let selected: BTreeSet<char> = ['I'].into_iter().collect();
        let catalog = Catalog::build(&selected).unwrap();
        let board = Board::new(1);

        let placement = Placement { orientation: 0, row: 0, col: 0 };
        let grid = render(&catalog, &board, &[placement]).unwrap();

        assert_eq!(format_grid(&grid), "I I I I I \n");
    }
}
