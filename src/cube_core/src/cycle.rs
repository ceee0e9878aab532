use crate::{Direction, Face, FaceletGrid, adjacency::ring};

/// Move the twelve facelets around `face` one strip along its edge ring.
///
/// All four strips are read before any of them is written.
pub fn cycle_edges<T: Copy>(grid: &mut FaceletGrid<T>, face: Face, direction: Direction) {
    let ring = ring(face);
    let values = ring.map(|strip| strip.cells().map(|cell| grid.at(strip.face, cell)));

    for (k, strip_values) in values.into_iter().enumerate() {
        let target = match direction {
            Direction::Clockwise => ring[(k + 1) % 4],
            Direction::CounterClockwise => ring[(k + 3) % 4],
        };
        for (cell, value) in target.cells().into_iter().zip(strip_values) {
            *grid.at_mut(target.face, cell) = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled() -> FaceletGrid<(Face, usize, usize)> {
        FaceletGrid::from_fn(|face, row, col| (face, row, col))
    }

    fn after(face: Face, direction: Direction) -> FaceletGrid<(Face, usize, usize)> {
        let mut grid = labelled();
        cycle_edges(&mut grid, face, direction);
        grid
    }

    #[test]
    fn up_clockwise_carries_front_to_left() {
        let grid = after(Face::U, Direction::Clockwise);

        for col in 0..3 {
            assert_eq!(grid.face(Face::L)[0][col], (Face::F, 0, col));
            assert_eq!(grid.face(Face::B)[0][col], (Face::L, 0, col));
            assert_eq!(grid.face(Face::R)[0][col], (Face::B, 0, col));
            assert_eq!(grid.face(Face::F)[0][col], (Face::R, 0, col));
        }
    }

    #[test]
    fn right_clockwise_flips_through_the_back() {
        let grid = after(Face::R, Direction::Clockwise);

        // U's right column goes up the back's left column, upside down.
        assert_eq!(grid.face(Face::B)[2][0], (Face::U, 0, 2));
        assert_eq!(grid.face(Face::B)[0][0], (Face::U, 2, 2));
        // ...and comes back down onto D's right column.
        assert_eq!(grid.face(Face::D)[0][2], (Face::B, 2, 0));
        assert_eq!(grid.face(Face::D)[2][2], (Face::B, 0, 0));
        assert_eq!(grid.face(Face::F)[0][2], (Face::D, 0, 2));
        assert_eq!(grid.face(Face::U)[0][2], (Face::F, 0, 2));
    }

    #[test]
    fn front_clockwise_wraps_rows_onto_columns() {
        let grid = after(Face::F, Direction::Clockwise);

        assert_eq!(grid.face(Face::R)[0][0], (Face::U, 2, 0));
        assert_eq!(grid.face(Face::R)[2][0], (Face::U, 2, 2));
        assert_eq!(grid.face(Face::D)[0][2], (Face::R, 0, 0));
        assert_eq!(grid.face(Face::D)[0][0], (Face::R, 2, 0));
        assert_eq!(grid.face(Face::L)[0][2], (Face::D, 0, 0));
        assert_eq!(grid.face(Face::U)[2][0], (Face::L, 2, 2));
    }

    #[test]
    fn back_counter_clockwise_is_the_reverse_ring() {
        let grid = after(Face::B, Direction::CounterClockwise);

        assert_eq!(grid.face(Face::R)[0][2], (Face::U, 0, 0));
        assert_eq!(grid.face(Face::U)[0][0], (Face::L, 2, 0));
        assert_eq!(grid.face(Face::L)[0][0], (Face::D, 2, 0));
        assert_eq!(grid.face(Face::D)[2][2], (Face::R, 0, 2));
    }

    #[test]
    fn only_the_ring_moves() {
        for face in Face::ALL {
            let grid = after(face, Direction::Clockwise);
            let original = labelled();
            assert_eq!(grid.face(face), original.face(face));
            assert_eq!(grid.face(face.opposite()), original.face(face.opposite()));

            let moved = grid
                .facelets()
                .zip(original.facelets())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(moved, 12, "turning {face}");
        }
    }

    #[test]
    fn directions_invert_each_other() {
        for face in Face::ALL {
            let mut grid = labelled();
            cycle_edges(&mut grid, face, Direction::Clockwise);
            cycle_edges(&mut grid, face, Direction::CounterClockwise);
            assert_eq!(grid, labelled());
        }
    }
}
