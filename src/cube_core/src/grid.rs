use std::fmt;

use itertools::Itertools;

use crate::{CubeError, Face};

/// The 3x3 grid of one face, indexed `[row][col]` as seen from outside the
/// cube.
pub type FaceGrid<T> = [[T; 3]; 3];

/// Storage for the 54 facelets of a 3x3x3 cube, one 3x3 grid per face in
/// `Face::ALL` order.
///
/// The grid is generic over the facelet type so that the turning machinery
/// can be exercised with labels that are more distinguishable than colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletGrid<T> {
    faces: [FaceGrid<T>; 6],
}

impl<T> FaceletGrid<T> {
    /// Build a grid by asking `f` for the value at every `(face, row, col)`.
    pub fn from_fn(mut f: impl FnMut(Face, usize, usize) -> T) -> Self {
        FaceletGrid {
            faces: Face::ALL.map(|face| {
                std::array::from_fn(|row| std::array::from_fn(|col| f(face, row, col)))
            }),
        }
    }

    /// Iterate over the six face grids in `Face::ALL` order.
    pub fn faces(&self) -> impl ExactSizeIterator<Item = &FaceGrid<T>> {
        self.faces.iter()
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid<T> {
        &self.faces[face.index()]
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut FaceGrid<T> {
        &mut self.faces[face.index()]
    }
}

impl<T: Copy> FaceletGrid<T> {
    /// # Errors
    ///
    /// If `face`, `row` or `col` is out of range.
    pub fn get(&self, face: usize, row: usize, col: usize) -> Result<T, CubeError> {
        self.faces
            .get(face)
            .and_then(|grid| grid.get(row))
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(CubeError::OutOfBounds { face, row, col })
    }

    /// # Errors
    ///
    /// If `face`, `row` or `col` is out of range. The grid is left untouched.
    pub fn set(&mut self, face: usize, row: usize, col: usize, value: T) -> Result<(), CubeError> {
        let cell = self
            .faces
            .get_mut(face)
            .and_then(|grid| grid.get_mut(row))
            .and_then(|cells| cells.get_mut(col))
            .ok_or(CubeError::OutOfBounds { face, row, col })?;
        *cell = value;
        Ok(())
    }

    /// Iterate over every facelet, face by face, row-major.
    pub fn facelets(&self) -> impl Iterator<Item = T> + '_ {
        self.faces.iter().flatten().flatten().copied()
    }

    pub(crate) fn at(&self, face: Face, (row, col): (usize, usize)) -> T {
        self.faces[face.index()][row][col]
    }

    pub(crate) fn at_mut(&mut self, face: Face, (row, col): (usize, usize)) -> &mut T {
        &mut self.faces[face.index()][row][col]
    }
}

/// Three rows of three space separated facelets per face, faces in
/// `Face::ALL` order separated by a blank line.
impl<T: fmt::Display> fmt::Display for FaceletGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .faces
            .iter()
            .map(|grid| grid.iter().map(|row| row.iter().join(" ")).join("\n"))
            .join("\n\n");
        writeln!(f, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut grid = FaceletGrid::from_fn(|face, row, col| (face, row, col));

        assert_eq!(grid.get(2, 1, 0), Ok((Face::F, 1, 0)));
        assert_eq!(
            grid.get(6, 0, 0),
            Err(CubeError::OutOfBounds {
                face: 6,
                row: 0,
                col: 0
            })
        );
        assert!(grid.get(0, 3, 0).is_err());
        assert!(grid.get(0, 0, 3).is_err());

        let before = grid.clone();
        assert!(grid.set(0, 0, 9, (Face::B, 0, 0)).is_err());
        assert_eq!(grid, before);

        grid.set(5, 2, 2, (Face::U, 0, 0)).unwrap();
        assert_eq!(grid.get(5, 2, 2), Ok((Face::U, 0, 0)));
    }

    #[test]
    fn display_lists_faces_in_order() {
        let grid = FaceletGrid::from_fn(|face, row, col| {
            format!("{}{}", face.letter(), row * 3 + col)
        });
        let text = grid.to_string();
        let blocks: Vec<&str> = text.trim_end().split("\n\n").collect();

        assert_eq!(blocks.len(), 6);
        assert_eq!(blocks[0], "U0 U1 U2\nU3 U4 U5\nU6 U7 U8");
        assert_eq!(blocks[5], "B0 B1 B2\nB3 B4 B5\nB6 B7 B8");
    }
}
