//! End-to-end scenarios straight out of the design document's testable
//! properties: given a selection of piece letters, check the full pipeline
//! output (found/not-found, grid contents, board-field trailer).

use std::collections::BTreeSet;

use pentomino_dlx::{render::format_grid, solve};

fn selection(letters: &str) -> BTreeSet<char> {
    letters.chars().collect()
}

#[test]
fn six_piece_selection_has_a_solution() {
    let outcome = solve(&selection("LYVTWZ")).expect("setup cannot fail for a valid selection");
    let grid = outcome.grid.expect("a tiling exists for {L,Y,V,T,W,Z}");

    assert_eq!(grid.len(), 6);
    assert_eq!(grid[0].len(), 5);

    let used_letters: BTreeSet<char> = grid.iter().flatten().copied().filter(|&c| c != ' ').collect();
    assert_eq!(used_letters, selection("LYVTWZ"));
    assert_eq!(outcome.piece_count, 6);
}

#[test]
fn single_i_piece_fills_the_row_horizontally() {
    let outcome = solve(&selection("I")).unwrap();
    let grid = outcome.grid.expect("I fits a 1x5 board");

    assert_eq!(format_grid(&grid), "I I I I I \n");
    assert_eq!(outcome.piece_count, 1);
}

#[test]
fn single_x_piece_does_not_fit_a_1x5_board() {
    let outcome = solve(&selection("X")).unwrap();
    assert!(outcome.grid.is_none());
    assert_eq!(outcome.piece_count, 1);
}

#[test]
fn empty_selection_defaults_to_all_twelve_letters() {
    let outcome = solve(&BTreeSet::new()).unwrap();
    let grid = outcome.grid.expect("the classic 12-piece board has a tiling");

    assert_eq!(outcome.piece_count, 12);
    assert_eq!(grid.len(), 12);

    let used_letters: BTreeSet<char> = grid.iter().flatten().copied().filter(|&c| c != ' ').collect();
    assert_eq!(used_letters, selection("FILNPTUVWXYZ"));
}

#[test]
fn stdout_trailer_matches_piece_count_on_failure_and_success() {
    let solved = solve(&selection("I")).unwrap();
    assert_eq!(solved.piece_count, 1);

    let unsolved = solve(&selection("X")).unwrap();
    assert_eq!(unsolved.piece_count, 1);
}
