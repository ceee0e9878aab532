//! The facelet model of a 3x3x3 cube and the machinery that turns it.
//!
//! A [`Cube`] stores the color of each of the 54 facelets. Turning a face
//! rotates that face's own grid and carries the ring of twelve facelets on
//! the neighboring faces one step around, as described by the static
//! adjacency table in [`adjacency`].

#![warn(clippy::pedantic)]

pub mod adjacency;
mod cube;
mod cycle;
mod error;
mod face;
mod grid;
mod moves;
mod rotate;
mod scramble;
mod session;
pub mod solver;

pub use cube::Cube;
pub use cycle::cycle_edges;
pub use error::{CubeError, SolveError};
pub use face::{Color, Face};
pub use grid::{FaceGrid, FaceletGrid};
pub use moves::{Direction, Move, Turn, format_moves, invert_moves, parse_moves};
pub use rotate::rotate_face;
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, Scrambler};
pub use session::{Session, SharedSession};
pub use solver::{Solver, TwophaseOptions, TwophaseSolver};
