use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid move `{0}`, expected a face letter (U, D, L, R, F, B) optionally followed by `'` or `2`")]
    InvalidMove(String),
    #[error("Facelet index out of bounds: face={face} row={row} col={col}")]
    OutOfBounds { face: usize, row: usize, col: usize },
    #[error("Cube invariant violated: {0}")]
    InvariantViolation(String),
    #[error("Invalid facelet string: {0}")]
    InvalidFacelets(String),
}

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Could not communicate with the solver process: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unexpected output from the solver: {0:?}")]
    UnexpectedOutput(String),
    #[error("The solver produced an invalid move sequence: {0}")]
    InvalidMove(#[from] CubeError),
}
