//! Algorithm X: the recursive backtracking search over a [`Matrix`], picking
//! columns via the minimum-remaining-values heuristic and stopping at the
//! first covering it finds.

use log::{debug, trace};

use crate::dlx::Matrix;

/// Runs Algorithm X to completion, returning the payloads of the chosen rows
/// in the order they were pushed onto the solution stack, or `None` if the
/// matrix has no exact cover.
pub fn solve<P: Copy>(matrix: &mut Matrix<P>) -> Option<Vec<P>> {
    let mut stack = Vec::new();
    let mut visited_nodes = 0u64;

    let found = search(matrix, &mut stack, &mut visited_nodes);
    debug!("algorithm x visited {} node(s)", visited_nodes);

    if found {
        Some(stack.into_iter().map(|node| *matrix.payload_of(node)).collect())
    } else {
        None
    }
}

/// Section 4.7's recursive search, expressed directly over `Matrix`'s
/// public cover/uncover/iteration API.
fn search<P>(matrix: &mut Matrix<P>, stack: &mut Vec<usize>, visited_nodes: &mut u64) -> bool {
    if matrix.is_solved() {
        return true;
    }

    let col = match matrix.choose_column() {
        Some(col) => col,
        None => return true,
    };

    if matrix.column_count(col) == 0 {
        return false;
    }

    matrix.cover(col);

    for row in matrix.rows_in_column(col) {
        *visited_nodes += 1;
        trace!("trying row at node {row}");
        stack.push(row);

        for other in matrix.row_right(row) {
            matrix.cover(matrix.column_of(other));
        }

        if search(matrix, stack, visited_nodes) {
            return true;
        }

        stack.pop();
        for other in matrix.row_left(row) {
            matrix.uncover(matrix.column_of(other));
        }
    }

    matrix.uncover(col);

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_a_trivial_exact_cover() {
        // Columns {0,1,2}: row A covers {0,1}, row B covers {2}; the unique
        // exact cover is {A, B}.
        let mut m: Matrix<&'static str> = Matrix::new(3);
        m.add_row(&[0, 1], "a");
        m.add_row(&[2], "b");
        m.add_row(&[0], "dead-end");

        let solution = solve(&mut m).expect("cover exists");
        let mut names: Vec<&str> = solution.into_iter().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn reports_no_solution_when_a_column_is_unreachable() {
        let mut m: Matrix<&'static str> = Matrix::new(2);
        m.add_row(&[0], "only-zero");
        // column 1 has no row at all.

        assert!(solve(&mut m).is_none());
    }
}
