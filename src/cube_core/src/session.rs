use std::sync::{Arc, Mutex, PoisonError};

use log::info;

use crate::{
    Color, Cube, CubeError, Move, Scrambler, SolveError, Solver,
    grid::FaceGrid,
    moves::{format_moves, parse_moves},
};

/// One cube and the moves that have been applied to it since it was last
/// solved from scratch.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cube: Cube,
    history: Vec<Move>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Session::default()
    }

    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn faces(&self) -> impl ExactSizeIterator<Item = &FaceGrid<Color>> {
        self.cube.faces()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    pub fn apply(&mut self, move_: Move) {
        self.cube.apply(move_);
        self.history.push(move_);
    }

    pub fn apply_moves<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &move_ in moves {
            self.apply(move_);
        }
    }

    /// # Errors
    ///
    /// If the token is not a valid move; nothing is applied or recorded.
    pub fn apply_token(&mut self, token: &str) -> Result<Move, CubeError> {
        let move_ = token.parse()?;
        self.apply(move_);
        Ok(move_)
    }

    /// # Errors
    ///
    /// If any token is not a valid move; nothing is applied or recorded.
    pub fn apply_sequence(&mut self, sequence: &str) -> Result<Vec<Move>, CubeError> {
        let moves = parse_moves(sequence)?;
        self.apply_moves(&moves);
        Ok(moves)
    }

    /// Scramble the cube with `count` random moves, which are recorded like
    /// any other move.
    pub fn scramble(&mut self, scrambler: &mut Scrambler, count: usize) -> Vec<Move> {
        let moves = scrambler.scramble(&mut self.cube, count);
        self.history.extend_from_slice(&moves);
        moves
    }

    /// Undo the most recent move. Returns the move that was undone.
    pub fn undo(&mut self) -> Option<Move> {
        let move_ = self.history.pop()?;
        self.cube.apply(move_.inverse());
        Some(move_)
    }

    /// Start over from a solved cube.
    pub fn reset(&mut self) {
        self.cube = Cube::solved();
        self.history.clear();
        info!(target: "session", "Reset to a solved cube");
    }

    /// Ask `solver` for a solution and apply it.
    ///
    /// # Errors
    ///
    /// If the solver fails; the cube is left untouched.
    pub fn solve_with(&mut self, solver: &mut impl Solver) -> Result<Vec<Move>, SolveError> {
        let solution = solver.solve(&self.cube)?;
        self.apply_moves(&solution);
        info!(
            target: "session",
            "Applied a {} move solution: {}",
            solution.len(),
            format_moves(&solution)
        );
        Ok(solution)
    }
}

/// A session that a renderer thread can read while another thread turns the
/// cube. Moves and snapshots take the same lock, so a snapshot never sees a
/// half applied move.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    #[must_use]
    pub fn new(session: Session) -> Self {
        SharedSession {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        // A panic inside `f` can only happen between whole moves, so the
        // session behind a poisoned lock is still consistent.
        let mut session = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }

    /// # Errors
    ///
    /// If the token is not a valid move.
    pub fn apply_token(&self, token: &str) -> Result<Move, CubeError> {
        self.with(|session| session.apply_token(token))
    }

    /// A copy of the cube as of the last completed move.
    #[must_use]
    pub fn snapshot(&self) -> Cube {
        self.with(|session| session.cube().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn history_and_undo() {
        let mut session = Session::new();
        session.apply_sequence("R U R' U'").unwrap();
        assert_eq!(format_moves(session.history()), "R U R' U'");
        assert!(!session.is_solved());

        assert_eq!(session.undo(), Some("U'".parse().unwrap()));
        assert_eq!(session.history().len(), 3);
        while session.undo().is_some() {}
        assert!(session.is_solved());
        assert_eq!(session.undo(), None);
    }

    #[test]
    fn invalid_sequence_is_not_recorded() {
        let mut session = Session::new();
        session.apply_token("F2").unwrap();
        assert!(session.apply_sequence("R Z").is_err());
        assert!(session.apply_token("R3").is_err());
        assert_eq!(format_moves(session.history()), "F2");
    }

    #[test]
    fn scramble_then_reset() {
        let mut session = Session::new();
        let moves = session.scramble(&mut Scrambler::with_seed(9), 30);
        assert_eq!(session.history(), moves.as_slice());

        session.reset();
        assert!(session.is_solved());
        assert!(session.history().is_empty());
    }

    /// Knows the scramble it is asked about and answers with its inverse.
    struct Oracle(Vec<Move>);

    impl Solver for Oracle {
        fn solve(&mut self, _cube: &Cube) -> Result<Vec<Move>, SolveError> {
            Ok(crate::invert_moves(&self.0))
        }
    }

    struct Broken;

    impl Solver for Broken {
        fn solve(&mut self, _cube: &Cube) -> Result<Vec<Move>, SolveError> {
            Err(SolveError::UnexpectedOutput("nope".to_owned()))
        }
    }

    #[test]
    fn solve_with_applies_the_solution() {
        let mut session = Session::new();
        let scramble = session.scramble(&mut Scrambler::with_seed(5), 20);

        let before = session.cube().clone();
        assert!(session.solve_with(&mut Broken).is_err());
        assert_eq!(session.cube(), &before);

        let solution = session.solve_with(&mut Oracle(scramble)).unwrap();
        assert!(session.is_solved());
        assert_eq!(session.history().len(), 20 + solution.len());
    }

    #[test]
    fn snapshots_see_whole_moves() {
        let shared = SharedSession::default();
        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    for token in ["R", "U", "F'", "D2"] {
                        shared.apply_token(token).unwrap();
                    }
                }
            })
        };

        for _ in 0..200 {
            assert!(shared.snapshot().check_invariants().is_ok());
        }
        writer.join().unwrap();

        assert_eq!(shared.with(|session| session.history().len()), 1000);
    }
}
