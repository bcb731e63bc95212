use super::seeded_rng;
use crate::core::{Color, Grid, Move};
use crate::error::GomokuError;
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::cell::RefCell;

/// Plays a uniformly random empty point.
pub struct RandomAI {
    pub name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(name: &str, seed: Option<u64>) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(seeded_rng(seed)),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, grid: &mut Grid, _color: Color) -> Result<Move, GomokuError> {
        let moves = grid.legal_moves();
        moves
            .choose(&mut *self.rng.borrow_mut())
            .copied()
            .ok_or(GomokuError::NoLegalMoves)
    }
}
