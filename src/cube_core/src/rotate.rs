//! Rotation of a single face's own 3x3 grid.

use crate::{Direction, Face, FaceletGrid, grid::FaceGrid};

/// Rotate the grid of `face` by 90 degrees in `direction`, as seen from
/// outside the cube. No other face is touched.
pub fn rotate_face<T: Copy>(grid: &mut FaceletGrid<T>, face: Face, direction: Direction) {
    let face_grid = grid.face_mut(face);
    *face_grid = rotated(face_grid, direction);
}

/// The rotated copy of `src`. Every cell of the result is read from the
/// untouched source, so no cell is overwritten before it has been moved.
fn rotated<T: Copy>(src: &FaceGrid<T>, direction: Direction) -> FaceGrid<T> {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| match direction {
            Direction::Clockwise => src[2 - j][i],
            Direction::CounterClockwise => src[j][2 - i],
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled() -> FaceletGrid<u8> {
        let mut n = 0;
        FaceletGrid::from_fn(|_, _, _| {
            n += 1;
            n - 1
        })
    }

    #[test]
    fn clockwise_permutation_is_exact() {
        let mut grid = labelled();
        rotate_face(&mut grid, Face::F, Direction::Clockwise);

        // F holds labels 18..27
        assert_eq!(
            *grid.face(Face::F),
            [[24, 21, 18], [25, 22, 19], [26, 23, 20]]
        );
    }

    #[test]
    fn counter_clockwise_permutation_is_exact() {
        let mut grid = labelled();
        rotate_face(&mut grid, Face::U, Direction::CounterClockwise);

        assert_eq!(*grid.face(Face::U), [[2, 5, 8], [1, 4, 7], [0, 3, 6]]);
    }

    #[test]
    fn only_the_rotated_face_changes() {
        let original = labelled();
        for face in Face::ALL {
            for direction in [Direction::Clockwise, Direction::CounterClockwise] {
                let mut grid = original.clone();
                rotate_face(&mut grid, face, direction);
                for other in Face::ALL.into_iter().filter(|&other| other != face) {
                    assert_eq!(grid.face(other), original.face(other));
                }
                assert_ne!(grid.face(face), original.face(face));
                assert_eq!(grid.face(face)[1][1], original.face(face)[1][1]);
            }
        }
    }

    #[test]
    fn opposite_rotations_cancel() {
        let original = labelled();
        for face in Face::ALL {
            let mut grid = original.clone();
            rotate_face(&mut grid, face, Direction::Clockwise);
            rotate_face(&mut grid, face, Direction::CounterClockwise);
            assert_eq!(grid, original);

            for _ in 0..4 {
                rotate_face(&mut grid, face, Direction::Clockwise);
            }
            assert_eq!(grid, original);
        }
    }
}
