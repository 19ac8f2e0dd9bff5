//! Piece catalog: turns a set of selected letters into the full list of
//! distinct orientations, with identity indices piece-selection code and
//! the exact-cover builder both need.

use std::collections::BTreeSet;

use log::debug;

use crate::error::SolveError;
use crate::resources::{self, LETTERS};
use crate::shape::{self, Shape};

/// One orientation: its row masks, plus which selected piece it belongs to.
struct OrientationEntry {
    shape: Shape,
    identity: usize,
}

/// Maps selected letters to their orientations and back.
pub struct Catalog {
    orientations: Vec<OrientationEntry>,
    names: Vec<char>,
}

impl Catalog {
    /// Builds the catalog for a selected set of letters. An empty selection
    /// is treated as "all twelve letters" (Section 4.3 edge case).
    pub fn build(selected: &BTreeSet<char>) -> Result<Catalog, SolveError> {
        let letters: Vec<char> = if selected.is_empty() {
            LETTERS.to_vec()
        } else {
            LETTERS.iter().copied().filter(|l| selected.contains(l)).collect()
        };

        let mut orientations = Vec::new();
        let mut names = Vec::with_capacity(letters.len());

        for (id, &letter) in letters.iter().enumerate() {
            let canonical = resources::canonical_shape(letter)?;
            let variants = shape::orientations(&canonical);
            debug!("piece '{}' has {} distinct orientation(s)", letter, variants.len());

            for variant in variants {
                orientations.push(OrientationEntry { shape: variant, identity: id });
            }
            names.push(letter);
        }

        Ok(Catalog { orientations, names })
    }

    /// Total number of selected pieces.
    pub fn piece_count(&self) -> usize {
        self.names.len()
    }

    /// Total number of orientations across all selected pieces.
    pub fn orientation_count(&self) -> usize {
        self.orientations.len()
    }

    /// Row masks for orientation handle `v`.
    pub fn shape(&self, v: usize) -> &[u8] {
        &self.orientations[v].shape
    }

    /// Piece identity index for orientation handle `v`.
    pub fn identity(&self, v: usize) -> usize {
        self.orientations[v].identity
    }

    /// The letter assigned to piece identity `id`.
    pub fn name(&self, id: usize) -> char {
        self.names[id]
    }
}
