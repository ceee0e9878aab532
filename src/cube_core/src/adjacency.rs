//! Which facelets on the neighboring faces travel with a face turn.
//!
//! Turning a face carries a ring of twelve facelets, three on each of the
//! four neighbors. For every face the ring is listed as four strips in the
//! order a clockwise turn moves them: the contents of strip `k` end up in
//! strip `k + 1`. Within a strip the three cells are listed so that cell `i`
//! of one strip lands on cell `i` of the next.

use crate::Face;

/// A full row or column of a face grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
}

/// Three facelets along one edge of a neighboring face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub line: Line,
    /// Whether the strip is walked from the high end of the line.
    pub reversed: bool,
}

impl Strip {
    const fn forward(face: Face, line: Line) -> Self {
        Strip {
            face,
            line,
            reversed: false,
        }
    }

    const fn reversed(face: Face, line: Line) -> Self {
        Strip {
            face,
            line,
            reversed: true,
        }
    }

    /// The `(row, col)` positions of the strip in traversal order.
    #[must_use]
    pub fn cells(self) -> [(usize, usize); 3] {
        std::array::from_fn(|i| {
            let k = if self.reversed { 2 - i } else { i };
            match self.line {
                Line::Row(row) => (row, k),
                Line::Col(col) => (k, col),
            }
        })
    }
}

use Face::{B, D, F, L, R, U};
use Line::{Col, Row};

/// Indexed by `Face as usize`.
const RINGS: [[Strip; 4]; 6] = [
    // U
    [
        Strip::forward(F, Row(0)),
        Strip::forward(L, Row(0)),
        Strip::forward(B, Row(0)),
        Strip::forward(R, Row(0)),
    ],
    // R
    [
        Strip::forward(F, Col(2)),
        Strip::forward(U, Col(2)),
        Strip::reversed(B, Col(0)),
        Strip::forward(D, Col(2)),
    ],
    // F
    [
        Strip::forward(U, Row(2)),
        Strip::forward(R, Col(0)),
        Strip::reversed(D, Row(0)),
        Strip::reversed(L, Col(2)),
    ],
    // D
    [
        Strip::forward(F, Row(2)),
        Strip::forward(R, Row(2)),
        Strip::forward(B, Row(2)),
        Strip::forward(L, Row(2)),
    ],
    // L
    [
        Strip::forward(U, Col(0)),
        Strip::forward(F, Col(0)),
        Strip::forward(D, Col(0)),
        Strip::reversed(B, Col(2)),
    ],
    // B
    [
        Strip::forward(R, Col(2)),
        Strip::forward(U, Row(0)),
        Strip::reversed(L, Col(0)),
        Strip::reversed(D, Row(2)),
    ],
];

/// The edge ring of `face` in clockwise order.
#[must_use]
pub fn ring(face: Face) -> &'static [Strip; 4] {
    &RINGS[face.index()]
}
