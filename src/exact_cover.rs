//! Exact-cover builder: walks every (orientation, anchor) legal placement
//! and turns it into one Dancing Links row.

use log::debug;

use crate::board::Board;
use crate::catalog::Catalog;
use crate::dlx::Matrix;
use crate::shape::BOARD_WIDTH;

/// What a chosen row tells the renderer: which orientation, anchored where.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub orientation: usize,
    pub row: usize,
    pub col: usize,
}

/// Builds the exact-cover matrix for `catalog` over `board`: `total_cells`
/// cell-cover columns followed by `piece_count` identity columns, one row
/// per legal placement.
pub fn build(catalog: &Catalog, board: &Board) -> Matrix<Placement> {
    let total_cells = board.total_cells();
    let num_cols = total_cells + catalog.piece_count();
    let mut matrix = Matrix::new(num_cols);
    let mut rows_emitted = 0usize;

    for v in 0..catalog.orientation_count() {
        let shape = catalog.shape(v);
        for r in 0..board.height() {
            for c in 0..BOARD_WIDTH {
                if !board.can_place(shape, r, c) {
                    continue;
                }

                let mut columns = Vec::with_capacity(6);
                for (i, &row_mask) in shape.iter().enumerate() {
                    for j in 0..BOARD_WIDTH {
                        if row_mask & (1 << j) != 0 {
                            columns.push(
                                board
                                    .cell_index(r + i, c + j)
                                    .expect("can_place already checked bounds"),
                            );
                        }
                    }
                }
                columns.push(total_cells + catalog.identity(v));

                matrix.add_row(&columns, Placement { orientation: v, row: r, col: c });
                rows_emitted += 1;
            }
        }
    }

    debug!(
        "exact-cover matrix: {} column(s), {} row(s)",
        num_cols, rows_emitted
    );

    matrix
}
