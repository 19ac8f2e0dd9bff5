//! Dancing Links matrix: the four-way doubly linked node arena, plus the
//! cover/uncover primitives Algorithm X is built on top of.
//!
//! Expressed the way an arena has to be in a language without
//! back-reference-unsafe handles: one owning `Vec<Node>`, neighbors stored
//! as indices into it, with the root sentinel and the column headers living
//! at fixed low indices. Cover/uncover only ever re-wire indices; no node is
//! ever deallocated during a search.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Prev,
    Next,
    Up,
    Down,
}

impl Direction {
    fn opposite(self) -> Self {
        match self {
            Direction::Prev => Direction::Next,
            Direction::Next => Direction::Prev,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// What a node represents, distinguished so a header's live count and a row
/// node's row identifier are never confused.
#[derive(Debug, Clone, Copy)]
enum Point {
    /// The singleton root sentinel before all columns.
    Root,
    /// A column header, with the count of non-removed nodes in it.
    Column(usize),
    /// A row item, with the identifier of the row it belongs to (used to
    /// look up the row's shared payload).
    Body(usize),
}

impl Point {
    fn count(&self) -> usize {
        match self {
            Point::Column(n) => *n,
            _ => unreachable!("count() is only meaningful on a column header"),
        }
    }

    fn count_mut(&mut self) -> &mut usize {
        match self {
            Point::Column(n) => n,
            _ => unreachable!("count_mut() is only meaningful on a column header"),
        }
    }

    fn row_id(&self) -> usize {
        match self {
            Point::Body(row_id) => *row_id,
            _ => unreachable!("row_id() is only meaningful on a row item"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Node {
    links: [usize; 4],
    point: Point,
    /// Column header this node belongs to (its own index for headers).
    column: usize,
}

impl Node {
    fn new(point: Point, column: usize) -> Self {
        Node { links: [usize::MAX; 4], point, column }
    }

    fn link(&self, dir: Direction) -> usize {
        self.links[dir as usize]
    }

    fn set_link(&mut self, dir: Direction, idx: usize) {
        self.links[dir as usize] = idx;
    }
}

const ROOT: usize = 0;

/// The exact-cover matrix: `num_cols` column headers plus a root sentinel,
/// with rows appended via [`Matrix::add_row`].
pub struct Matrix<P> {
    nodes: Vec<Node>,
    num_cols: usize,
    row_starts: Vec<usize>,
    payloads: Vec<P>,
}

impl<P> Matrix<P> {
    /// An empty matrix with `num_cols` mandatory columns and no rows yet.
    pub fn new(num_cols: usize) -> Matrix<P> {
        let mut nodes = Vec::with_capacity(num_cols + 1);
        nodes.push(Node::new(Point::Root, ROOT));
        for col in 0..num_cols {
            nodes.push(Node::new(Point::Column(0), col + 1));
        }

        let len = nodes.len();
        for idx in 0..len {
            nodes[idx].set_link(Direction::Next, (idx + 1) % len);
            nodes[idx].set_link(Direction::Prev, (idx + len - 1) % len);
            nodes[idx].set_link(Direction::Up, idx);
            nodes[idx].set_link(Direction::Down, idx);
        }

        Matrix { nodes, num_cols, row_starts: Vec::new(), payloads: Vec::new() }
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Appends one row: a node per column in `columns`, linked vertically
    /// into each column and horizontally into a single cyclic row list, plus
    /// `payload` stored once and shared by every node of the row via a row
    /// identifier (Section 9's "row payload sharing" note).
    ///
    /// Panics if `columns` is empty, contains an out-of-range column, or
    /// repeats a column — all three indicate a builder bug rather than bad
    /// input data, since every row the exact-cover builder emits is built
    /// from validated board/catalog state.
    pub fn add_row(&mut self, columns: &[usize], payload: P) {
        assert!(!columns.is_empty(), "a row must cover at least one column");
        let mut sorted = columns.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), columns.len(), "a row must not repeat a column");

        let row_id = self.payloads.len();
        self.payloads.push(payload);

        let start = self.nodes.len();
        for &col in columns {
            assert!(col < self.num_cols, "column {col} out of range");
            self.nodes.push(Node::new(Point::Body(row_id), col + 1));
        }
        let end = self.nodes.len();

        for idx in start..end {
            let col = self.nodes[idx].column;
            self.append_to_column(col, idx);
        }

        for (offset, idx) in (start..end).enumerate() {
            let prev = if offset == 0 { end - 1 } else { idx - 1 };
            let next = if idx + 1 == end { start } else { idx + 1 };
            self.nodes[idx].set_link(Direction::Prev, prev);
            self.nodes[idx].set_link(Direction::Next, next);
        }

        self.row_starts.push(start);
    }

    fn append_to_column(&mut self, col: usize, new_idx: usize) {
        let top = self.nodes[col].link(Direction::Up);
        self.nodes[col].set_link(Direction::Up, new_idx);
        self.nodes[new_idx].set_link(Direction::Up, top);
        self.nodes[new_idx].set_link(Direction::Down, col);
        self.nodes[top].set_link(Direction::Down, new_idx);
        *self.nodes[col].point.count_mut() += 1;
    }

    /// True iff every column has been covered — the root's horizontal list
    /// is empty, i.e. the current partial solution is a complete covering.
    pub fn is_solved(&self) -> bool {
        self.nodes[ROOT].link(Direction::Next) == ROOT
    }

    /// The live node count of column header `col` (0-based column index).
    pub fn column_count(&self, col: usize) -> usize {
        self.nodes[col + 1].point.count()
    }

    /// Minimum-remaining-values column selection: the live column with the
    /// fewest rows, ties broken by earliest insertion order. `None` if every
    /// column has already been covered.
    pub fn choose_column(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None; // (header idx, count)
        let mut idx = self.nodes[ROOT].link(Direction::Next);
        while idx != ROOT {
            let count = self.nodes[idx].point.count();
            if best.map_or(true, |(_, best_count)| count < best_count) {
                best = Some((idx, count));
            }
            idx = self.nodes[idx].link(Direction::Next);
        }
        best.map(|(idx, _)| idx - 1)
    }

    /// Node indices of the rows present in column `col`, top to bottom.
    pub fn rows_in_column(&self, col: usize) -> Vec<usize> {
        self.walk(col + 1, Direction::Down)
    }

    /// Node indices of the other nodes in `row_node`'s row, in insertion
    /// order starting immediately to its right (excludes `row_node` itself).
    pub fn row_right(&self, row_node: usize) -> Vec<usize> {
        self.walk(row_node, Direction::Next)
    }

    /// Same as [`Matrix::row_right`] but walking left — the exact reverse
    /// order, used to undo a `row_right` cover pass symmetrically.
    pub fn row_left(&self, row_node: usize) -> Vec<usize> {
        self.walk(row_node, Direction::Prev)
    }

    fn walk(&self, start: usize, dir: Direction) -> Vec<usize> {
        let mut out = Vec::new();
        let mut idx = self.nodes[start].link(dir);
        while idx != start {
            out.push(idx);
            idx = self.nodes[idx].link(dir);
        }
        out
    }

    /// The column header node index (0-based column) for a row node.
    pub fn column_of(&self, row_node: usize) -> usize {
        self.nodes[row_node].column - 1
    }

    /// The shared payload for the row `row_node` belongs to.
    pub fn payload_of(&self, row_node: usize) -> &P {
        &self.payloads[self.nodes[row_node].point.row_id()]
    }

    /// Removes column header `col` from the header ring and deletes every
    /// row that shares a column with one of its rows (Section 4.6 step 3).
    pub fn cover(&mut self, col: usize) {
        let header = col + 1;
        self.unlink(header, Direction::Next);

        for r in self.walk(header, Direction::Down) {
            for j in self.walk(r, Direction::Next) {
                self.unlink(j, Direction::Down);
                let col_header = self.nodes[j].column;
                *self.nodes[col_header].point.count_mut() -= 1;
            }
        }
    }

    /// Exact inverse of [`Matrix::cover`].
    pub fn uncover(&mut self, col: usize) {
        let header = col + 1;

        for r in self.walk(header, Direction::Up) {
            for j in self.walk(r, Direction::Prev) {
                let col_header = self.nodes[j].column;
                *self.nodes[col_header].point.count_mut() += 1;
                self.relink(j, Direction::Down);
            }
        }

        self.relink(header, Direction::Next);
    }

    fn unlink(&mut self, idx: usize, dir: Direction) {
        let opp = dir.opposite();
        let next = self.nodes[idx].link(dir);
        let prev = self.nodes[idx].link(opp);
        self.nodes[next].set_link(opp, prev);
        self.nodes[prev].set_link(dir, next);
    }

    fn relink(&mut self, idx: usize, dir: Direction) {
        let opp = dir.opposite();
        let next = self.nodes[idx].link(dir);
        let prev = self.nodes[idx].link(opp);
        self.nodes[next].set_link(opp, idx);
        self.nodes[prev].set_link(dir, idx);
    }
}
