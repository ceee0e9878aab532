use std::fmt;

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    Color, CubeError, Direction, Face, FaceletGrid, Move, cycle::cycle_edges, grid::FaceGrid,
    moves::parse_moves, rotate::rotate_face,
};

/// A 3x3x3 cube as the colors of its 54 facelets.
///
/// The only mutators are face turns, which permute facelets and never
/// create or recolor one, so every reachable cube has nine facelets of each
/// color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    grid: FaceletGrid<Color>,
}

impl Default for Cube {
    fn default() -> Self {
        Cube::solved()
    }
}

impl Cube {
    /// A cube with every face showing its home color.
    #[must_use]
    pub fn solved() -> Self {
        Cube {
            grid: FaceletGrid::from_fn(|face, _, _| face.home_color()),
        }
    }

    /// # Errors
    ///
    /// If `face`, `row` or `col` is out of range.
    pub fn get(&self, face: usize, row: usize, col: usize) -> Result<Color, CubeError> {
        self.grid.get(face, row, col)
    }

    /// The six face grids in `Face::ALL` order.
    pub fn faces(&self) -> impl ExactSizeIterator<Item = &FaceGrid<Color>> {
        self.grid.faces()
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid<Color> {
        self.grid.face(face)
    }

    /// Turn `face` a quarter turn in `direction`.
    pub fn quarter_turn(&mut self, face: Face, direction: Direction) {
        rotate_face(&mut self.grid, face, direction);
        cycle_edges(&mut self.grid, face, direction);
        trace!(target: "moves", "Quarter turn: face={face} direction={direction:?}");

        #[cfg(debug_assertions)]
        if let Err(e) = self.check_invariants() {
            panic!("{e}");
        }
    }

    /// Apply a move. Double turns are two quarter turns.
    pub fn apply(&mut self, move_: Move) {
        let (direction, count) = move_.turn.quarter_turns();
        for _ in 0..count {
            self.quarter_turn(move_.face, direction);
        }
        debug!(target: "moves", "Applied {move_}");
    }

    pub fn apply_all<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &move_ in moves {
            self.apply(move_);
        }
    }

    /// Parse and apply a single move token.
    ///
    /// # Errors
    ///
    /// If the token is not a valid move; the cube is left untouched.
    pub fn apply_token(&mut self, token: &str) -> Result<Move, CubeError> {
        let move_ = token.parse()?;
        self.apply(move_);
        Ok(move_)
    }

    /// Parse and apply a whitespace separated move sequence. Nothing is
    /// applied unless every token parses.
    ///
    /// # Errors
    ///
    /// If any token is not a valid move; the cube is left untouched.
    pub fn apply_sequence(&mut self, sequence: &str) -> Result<Vec<Move>, CubeError> {
        let moves = parse_moves(sequence)?;
        self.apply_all(&moves);
        Ok(moves)
    }

    /// Whether every face is a single color. The colors do not have to be
    /// the home colors.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces().all(|grid| {
            let color = grid[0][0];
            grid.iter().flatten().all(|&c| c == color)
        })
    }

    /// The number of facelets of each color, indexed like `Color::ALL`.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.grid.facelets() {
            counts[color as usize] += 1;
        }
        counts
    }

    /// Check the structural invariants face turns must preserve: nine
    /// facelets of each color and six centers of distinct colors. Centers
    /// are not required to show their home colors, so a cube read from a
    /// facelet string in any orientation passes.
    ///
    /// # Errors
    ///
    /// If an invariant does not hold, which indicates a bug in the turning
    /// code rather than bad input.
    pub fn check_invariants(&self) -> Result<(), CubeError> {
        let counts = self.color_counts();
        if let Some((color, count)) = Color::ALL
            .into_iter()
            .zip(counts)
            .find(|&(_, count)| count != 9)
        {
            return Err(CubeError::InvariantViolation(format!(
                "expected 9 {color:?} facelets but found {count}"
            )));
        }

        let centers = self.centers();
        if centers.into_iter().unique().count() != 6 {
            return Err(CubeError::InvariantViolation(format!(
                "centers are not six distinct colors: {centers:?}"
            )));
        }

        Ok(())
    }

    fn centers(&self) -> [Color; 6] {
        Face::ALL.map(|face| self.grid.face(face)[1][1])
    }

    /// The 54 facelets in URFDLB order, each written as the letter of the
    /// face whose center has the same color.
    #[must_use]
    pub fn to_facelet_string(&self) -> String {
        let mut letter_of = [Face::U; 6];
        for (face, center) in Face::ALL.into_iter().zip(self.centers()) {
            letter_of[center as usize] = face;
        }
        self.grid
            .facelets()
            .map(|color| letter_of[color as usize].letter())
            .collect()
    }

    /// Read a cube from the format produced by `to_facelet_string`. The
    /// letter on each face's center fixes which color the letter stands
    /// for.
    ///
    /// # Errors
    ///
    /// If the string is not 54 face letters, the centers are not six
    /// different letters, or some letter does not appear exactly nine
    /// times.
    pub fn from_facelet_string(facelets: &str) -> Result<Self, CubeError> {
        let letters = facelets
            .chars()
            .map(|c| {
                Face::from_letter(c).ok_or_else(|| {
                    CubeError::InvalidFacelets(format!("`{c}` is not a face letter"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if letters.len() != 54 {
            return Err(CubeError::InvalidFacelets(format!(
                "expected 54 facelets but found {}",
                letters.len()
            )));
        }

        let centers = Face::ALL.map(|face| letters[face.index() * 9 + 4]);
        if centers.into_iter().unique().count() != 6 {
            return Err(CubeError::InvalidFacelets(format!(
                "centers must be six different faces, found {}",
                centers.iter().join("")
            )));
        }

        let mut color_of = [Color::White; 6];
        for (face, center) in Face::ALL.into_iter().zip(centers) {
            color_of[center.index()] = face.home_color();
        }

        let cube = Cube {
            grid: FaceletGrid::from_fn(|face, row, col| {
                color_of[letters[face.index() * 9 + row * 3 + col].index()]
            }),
        };

        if cube.color_counts() != [9; 6] {
            return Err(CubeError::InvalidFacelets(format!(
                "every face letter must appear exactly 9 times: {facelets}"
            )));
        }

        Ok(cube)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
