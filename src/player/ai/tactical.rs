//! One-ply tactical move classifier.
//!
//! Every empty point is bucketed by the strongest line signal it carries for
//! the side to move; only the best non-empty bucket is returned.

use super::seeded_rng;
use crate::core::{Color, Grid, Move, Point};
use crate::error::GomokuError;
use crate::logic::{classify_point, TacticalTier};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::cell::RefCell;

/// Highest populated tier and the points in it, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TacticalClassification {
    pub tier: TacticalTier,
    pub candidates: Vec<Point>,
}

/// Buckets every empty point of `grid` for `color`. Fails with `NoMove` on a
/// full board.
pub fn classify(
    grid: &Grid,
    color: Color,
    win_condition: usize,
) -> Result<TacticalClassification, GomokuError> {
    let mut tiers: [Vec<Point>; 5] = Default::default();
    for p in grid.empty_points() {
        let tier = classify_point(grid, p, color, win_condition);
        tiers[tier as usize].push(p);
    }

    TacticalTier::ALL
        .iter()
        .zip(tiers)
        .find(|(_, candidates)| !candidates.is_empty())
        .map(|(&tier, candidates)| TacticalClassification { tier, candidates })
        .ok_or(GomokuError::NoMove)
}

/// Picks uniformly among the top tier.
pub fn rule_move<R: Rng + ?Sized>(
    grid: &Grid,
    color: Color,
    win_condition: usize,
    rng: &mut R,
) -> Result<Point, GomokuError> {
    let classification = classify(grid, color, win_condition)?;
    classification
        .candidates
        .choose(rng)
        .copied()
        .ok_or(GomokuError::NoMove)
}

pub struct TacticalAI {
    pub name: String,
    pub win_condition: usize,
    rng: RefCell<StdRng>,
}

impl TacticalAI {
    pub fn new(name: &str, win_condition: usize, seed: Option<u64>) -> Self {
        Self {
            name: name.to_string(),
            win_condition,
            rng: RefCell::new(seeded_rng(seed)),
        }
    }
}

impl PlayerController for TacticalAI {
    fn choose_move(&self, grid: &mut Grid, color: Color) -> Result<Move, GomokuError> {
        let p = rule_move(grid, color, self.win_condition, &mut *self.rng.borrow_mut())?;
        Ok(Move::Play(p))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup_from_strings;
    use crate::logic::WIN_CONDITION;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn point(grid: &Grid, row: usize, col: usize) -> Point {
        grid.coordinate_to_point(row, col).unwrap()
    }

    #[test]
    fn test_empty_board_is_all_neutral() {
        let grid = Grid::new(7).unwrap();
        let result = classify(&grid, Color::Black, WIN_CONDITION).unwrap();
        assert_eq!(result.tier, TacticalTier::Neutral);
        assert_eq!(result.candidates, grid.empty_points());
        assert_eq!(result.candidates.len(), 49);

        // 全マスから選ばれる
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            seen.insert(rule_move(&grid, Color::Black, WIN_CONDITION, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 49);
    }

    #[test]
    fn test_open_four_extensions_win() {
        let grid = setup_from_strings(&[
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". X X X X . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
        ])
        .unwrap();

        let result = classify(&grid, Color::Black, WIN_CONDITION).unwrap();
        assert_eq!(result.tier, TacticalTier::Win);
        assert_eq!(result.candidates, vec![point(&grid, 3, 0), point(&grid, 3, 5)]);

        // 白から見ればどちらも止める手
        let result = classify(&grid, Color::White, WIN_CONDITION).unwrap();
        assert_eq!(result.tier, TacticalTier::BlockWin);
        assert_eq!(result.candidates, vec![point(&grid, 3, 0), point(&grid, 3, 5)]);
    }

    #[test]
    fn test_win_outranks_everything() {
        // (1, 3) blocks white's open three and extends black's column to an
        // open four at the same time; (2, 6) wins outright.
        let grid = setup_from_strings(&[
            ". . . . . . .",
            ". O O . O . .",
            ". . . X . . .",
            ". . . X . . X",
            ". . . X . . X",
            ". . . . . . X",
            ". . . . . . X",
        ])
        .unwrap();

        assert_eq!(
            classify_point(&grid, point(&grid, 1, 3), Color::Black, WIN_CONDITION),
            TacticalTier::OpenFour
        );

        let result = classify(&grid, Color::Black, WIN_CONDITION).unwrap();
        assert_eq!(result.tier, TacticalTier::Win);
        assert_eq!(result.candidates, vec![point(&grid, 2, 6)]);

        let ai = TacticalAI::new("rule", WIN_CONDITION, Some(9));
        let mut grid = grid;
        assert_eq!(
            ai.choose_move(&mut grid, Color::Black).unwrap(),
            Move::Play(point(&grid, 2, 6))
        );
    }

    #[test]
    fn test_block_win_before_open_four() {
        let grid = setup_from_strings(&[
            "O O O O . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . X X X . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
        ])
        .unwrap();

        let result = classify(&grid, Color::Black, WIN_CONDITION).unwrap();
        assert_eq!(result.tier, TacticalTier::BlockWin);
        assert_eq!(result.candidates, vec![point(&grid, 0, 4)]);
    }

    #[test]
    fn test_open_four_and_block_open_four_tiers() {
        let grid = setup_from_strings(&[
            ". . . . . . .",
            ". . . . . . .",
            ". . X X X . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
        ])
        .unwrap();

        let black = classify(&grid, Color::Black, WIN_CONDITION).unwrap();
        assert_eq!(black.tier, TacticalTier::OpenFour);
        assert_eq!(black.candidates, vec![point(&grid, 2, 1), point(&grid, 2, 5)]);

        let white = classify(&grid, Color::White, WIN_CONDITION).unwrap();
        assert_eq!(white.tier, TacticalTier::BlockOpenFour);
        assert_eq!(white.candidates, vec![point(&grid, 2, 1), point(&grid, 2, 5)]);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let grid = setup_from_strings(&["X O", "O X"]).unwrap();
        assert!(matches!(
            classify(&grid, Color::Black, WIN_CONDITION),
            Err(GomokuError::NoMove)
        ));
        let ai = TacticalAI::new("rule", WIN_CONDITION, Some(1));
        let mut grid = grid;
        assert!(ai.choose_move(&mut grid, Color::White).is_err());
    }
}
