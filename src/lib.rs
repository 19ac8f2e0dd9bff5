pub mod board;
pub mod catalog;
pub mod cli;
pub mod dlx;
pub mod error;
pub mod exact_cover;
pub mod render;
pub mod resources;
pub mod shape;
pub mod solver;

// Necessary to export the modules to be integration tested in 'tests'

use std::collections::BTreeSet;

use log::info;

use crate::error::SolveError;
use crate::exact_cover::Placement;

/// Everything the CLI front end needs after a solve attempt: whether a
/// tiling was found, the rendered grid if so, and the piece count that
/// always accompanies the `boardField is 5, <P>` trailer.
pub struct SolveOutcome {
    pub grid: Option<Vec<Vec<char>>>,
    pub piece_count: usize,
}

/// Runs the whole pipeline once: build the catalog and board for `selected`,
/// assemble the exact-cover matrix, search for a tiling, and render it.
pub fn solve(selected: &BTreeSet<char>) -> Result<SolveOutcome, SolveError> {
    let catalog = catalog::Catalog::build(selected)?;
    let board = board::Board::new(catalog.piece_count());

    info!(
        "solving for {} piece(s) on a {}x{} board ({} orientation(s))",
        catalog.piece_count(),
        board.height(),
        board.width(),
        catalog.orientation_count()
    );

    let mut matrix = exact_cover::build(&catalog, &board);
    let solution: Option<Vec<Placement>> = solver::solve(&mut matrix);

    match solution {
        Some(placements) => {
            info!("solution found for {} piece(s)", catalog.piece_count());
            let grid = render::render(&catalog, &board, &placements)?;
            Ok(SolveOutcome { grid: Some(grid), piece_count: catalog.piece_count() })
        }
        None => {
            info!("no solution for {} piece(s)", catalog.piece_count());
            Ok(SolveOutcome { grid: None, piece_count: catalog.piece_count() })
        }
    }
}
