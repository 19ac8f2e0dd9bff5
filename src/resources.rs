//! Resource loader: decodes the 12 compiled-in canonical pentomino shapes.
//!
//! Each letter's shape is embedded at build time via `include_bytes!` as a
//! fixed 5-byte slice — the in-binary stand-in for the "external binary
//! resource" the piece catalog consults. Bytes are row masks consumed in
//! order; a `0` byte (or the end of the slice) terminates the shape early,
//! which is how shapes of fewer than 5 rows are encoded.

use log::debug;

use crate::error::SolveError;
use crate::shape::{self, Shape};

/// All twelve pentomino letters, already in the alphabetical order the
/// catalog and the resource table both rely on.
pub const LETTERS: [char; 12] = ['F', 'I', 'L', 'N', 'P', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];

fn raw_bytes(letter: char) -> Option<&'static [u8]> {
    match letter {
        'F' => Some(include_bytes!("../assets/pieces/F.bin")),
        'I' => Some(include_bytes!("../assets/pieces/I.bin")),
        'L' => Some(include_bytes!("../assets/pieces/L.bin")),
        'N' => Some(include_bytes!("../assets/pieces/N.bin")),
        'P' => Some(include_bytes!("../assets/pieces/P.bin")),
        'T' => Some(include_bytes!("../assets/pieces/T.bin")),
        'U' => Some(include_bytes!("../assets/pieces/U.bin")),
        'V' => Some(include_bytes!("../assets/pieces/V.bin")),
        'W' => Some(include_bytes!("../assets/pieces/W.bin")),
        'X' => Some(include_bytes!("../assets/pieces/X.bin")),
        'Y' => Some(include_bytes!("../assets/pieces/Y.bin")),
        'Z' => Some(include_bytes!("../assets/pieces/Z.bin")),
        _ => None,
    }
}

/// Decodes the canonical shape for a single letter from its embedded byte
/// stream, then validates it against the Section 3 shape invariants.
pub fn canonical_shape(letter: char) -> Result<Shape, SolveError> {
    let bytes = raw_bytes(letter).ok_or(SolveError::EmptyShape { letter })?;

    let rows: Shape = bytes.iter().copied().take_while(|&b| b != 0).collect();

    debug!("decoded {} row(s) for piece '{}'", rows.len(), letter);

    shape::validate(letter, &rows)?;
    Ok(rows)
}
