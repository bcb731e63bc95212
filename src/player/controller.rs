use crate::core::{Color, Grid, Move};
use crate::error::GomokuError;

/// プレイヤー操作のtrait
///
/// The grid is borrowed mutably so that simulating players can play moves
/// out and take them back; it must be left exactly as it was handed in.
pub trait PlayerController {
    fn choose_move(&self, grid: &mut Grid, color: Color) -> Result<Move, GomokuError>;
    fn name(&self) -> &str;
}
