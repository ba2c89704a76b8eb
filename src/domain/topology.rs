//! Edge behaviour of the universe.
//!
//! The topology decides two things: which positions count as neighbors
//! when a generation is computed, and whether cells pushed off an edge by a
//! translation reappear on the opposite edge.

use serde::{Deserialize, Serialize};

/// How the grid edges behave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Edges are hard boundaries; positions outside the grid do not exist
    Finite,
    /// Each edge is connected to the opposite one (a torus)
    #[default]
    Toroidal,
}

impl Topology {
    /// Get both topologies
    pub fn all() -> Vec<Topology> {
        vec![Topology::Finite, Topology::Toroidal]
    }

    /// Display name for status lines
    pub fn name(&self) -> &'static str {
        match self {
            Topology::Finite => "Finite",
            Topology::Toroidal => "Toroidal",
        }
    }

    /// The other topology
    pub const fn toggled(self) -> Self {
        match self {
            Topology::Finite => Topology::Toroidal,
            Topology::Toroidal => Topology::Finite,
        }
    }

    /// Resolve `coord + delta` on an axis of length `len`.
    /// Returns `None` when the position falls off a finite edge.
    pub fn offset(self, coord: usize, delta: isize, len: usize) -> Option<usize> {
        let len = len as isize;
        let moved = coord as isize + delta;
        match self {
            Topology::Toroidal => Some(moved.rem_euclid(len) as usize),
            Topology::Finite => (0..len).contains(&moved).then_some(moved as usize),
        }
    }
}
