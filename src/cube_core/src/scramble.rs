use fastrand::Rng;
use log::info;

use crate::{Cube, Move, moves::format_moves};

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Draws random moves uniformly from `Move::ALL`. Moves are independent, so
/// a scramble may undo part of itself.
#[derive(Debug, Clone)]
pub struct Scrambler {
    rng: Rng,
}

impl Scrambler {
    #[must_use]
    pub fn new(rng: Rng) -> Self {
        Scrambler { rng }
    }

    /// A scrambler that draws the same moves every time for a given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Scrambler::new(Rng::with_seed(seed))
    }

    /// Draw `count` moves without applying them.
    pub fn draw(&mut self, count: usize) -> Vec<Move> {
        (0..count)
            .map(|_| Move::ALL[self.rng.usize(..Move::ALL.len())])
            .collect()
    }

    /// Apply `count` random moves to `cube` and return them in the order
    /// they were applied.
    pub fn scramble(&mut self, cube: &mut Cube, count: usize) -> Vec<Move> {
        let moves = self.draw(count);
        cube.apply_all(&moves);
        info!(target: "scramble", "Scrambled with {count} moves: {}", format_moves(&moves));
        moves
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Scrambler::new(Rng::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_scrambles_repeat() {
        let a = Scrambler::with_seed(42).draw(50);
        let b = Scrambler::with_seed(42).draw(50);
        assert_eq!(a, b);
        assert_ne!(a, Scrambler::with_seed(43).draw(50));
    }

    #[test]
    fn scramble_applies_the_returned_moves() {
        let mut scrambled = Cube::solved();
        let moves = Scrambler::with_seed(7).scramble(&mut scrambled, 25);
        assert_eq!(moves.len(), 25);

        let mut replayed = Cube::solved();
        replayed.apply_all(&moves);
        assert_eq!(replayed, scrambled);
    }

    #[test]
    fn every_move_gets_drawn() {
        let moves = Scrambler::with_seed(1).draw(2000);
        for move_ in Move::ALL {
            assert!(moves.contains(&move_), "{move_} never drawn");
        }
    }

    #[test]
    fn zero_length_scramble() {
        let mut cube = Cube::solved();
        assert!(Scrambler::with_seed(3).scramble(&mut cube, 0).is_empty());
        assert!(cube.is_solved());
    }
}
