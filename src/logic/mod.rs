//! Run-length scanning along the four axes through a point.
//!
//! Everything here walks outward from a live point until it reaches a
//! non-matching cell. The border ring stops every walk, so no bounds checks
//! are needed.

use crate::core::{Axis, Cell, Color, Direction, Grid, Move, Point};
use serde::{Deserialize, Serialize};

/// 五目
pub const WIN_CONDITION: usize = 5;

/// Same-colour stones on both sides of a point along one axis, the point
/// itself not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisRun {
    pub left: usize,
    pub right: usize,
    /// The cell just past the left run is empty.
    pub left_open: bool,
    /// The cell just past the right run is empty.
    pub right_open: bool,
}

impl AxisRun {
    /// Combined run length through the point.
    pub fn stones(&self) -> usize {
        self.left + self.right
    }

    /// Both ends can still be extended.
    pub fn is_open(&self) -> bool {
        self.left_open && self.right_open
    }
}

/// Priority bucket of a candidate point, strongest first.
///
/// The derived ordering follows declaration order, so the strongest of
/// several tiers is their minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TacticalTier {
    /// Playing here completes a winning line.
    Win,
    /// The opponent would complete a winning line here.
    BlockWin,
    /// Playing here makes an unblocked line one short of winning.
    OpenFour,
    /// The opponent would make an open four here.
    BlockOpenFour,
    Neutral,
}

impl TacticalTier {
    pub const ALL: [TacticalTier; 5] = [
        TacticalTier::Win,
        TacticalTier::BlockWin,
        TacticalTier::OpenFour,
        TacticalTier::BlockOpenFour,
        TacticalTier::Neutral,
    ];
}

/// 終局判定の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win(Color),
    Draw,
    Unknown,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        self != GameResult::Unknown
    }
}

/// Counts consecutive `color` stones starting one step from `point`.
/// Returns the count and whether the first cell past the run is empty.
fn walk(grid: &Grid, point: Point, dir: Direction, color: Color) -> (usize, bool) {
    let mut count = 0;
    let mut p = grid.step(point, dir);
    loop {
        match grid.cell(p) {
            c if c == color => {
                count += 1;
                p = grid.step(p, dir);
            }
            Cell::Empty => return (count, true),
            _ => return (count, false),
        }
    }
}

/// Measures the `color` run through `point` along `axis`.
pub fn axis_run(grid: &Grid, point: Point, axis: Axis, color: Color) -> AxisRun {
    let (left_dir, right_dir) = axis.directions();
    let (left, left_open) = walk(grid, point, left_dir, color);
    let (right, right_open) = walk(grid, point, right_dir, color);
    AxisRun {
        left,
        right,
        left_open,
        right_open,
    }
}

/// Longest combined run of `color` through `point` over all four axes.
pub fn longest_run(grid: &Grid, point: Point, color: Color) -> usize {
    Axis::ALL
        .iter()
        .map(|&axis| axis_run(grid, point, axis, color).stones())
        .max()
        .unwrap_or(0)
}

/// Signal of one axis given the mover's run (`mine`) and the opponent's run
/// (`theirs`) through the same empty point.
pub fn classify_axis(mine: AxisRun, theirs: AxisRun, win_condition: usize) -> TacticalTier {
    let to_win = win_condition.saturating_sub(1);

    if mine.stones() >= to_win {
        TacticalTier::Win
    } else if theirs.stones() >= to_win {
        TacticalTier::BlockWin
    } else if mine.stones() + 2 == win_condition && mine.is_open() {
        TacticalTier::OpenFour
    } else if theirs.stones() + 2 == win_condition && theirs.is_open() {
        TacticalTier::BlockOpenFour
    } else {
        TacticalTier::Neutral
    }
}

/// Strongest signal across all axes for `color` playing at `point`.
pub fn classify_point(grid: &Grid, point: Point, color: Color, win_condition: usize) -> TacticalTier {
    Axis::ALL
        .iter()
        .map(|&axis| {
            let mine = axis_run(grid, point, axis, color);
            let theirs = axis_run(grid, point, axis, color.opponent());
            classify_axis(mine, theirs, win_condition)
        })
        .min()
        .unwrap_or(TacticalTier::Neutral)
}

/// State of the game right after `color` played `mv`.
///
/// Every axis through the move is measured in full before deciding, so the
/// result does not depend on the order the axes are visited in.
pub fn terminal_state(grid: &Grid, mv: Move, color: Color, win_condition: usize) -> GameResult {
    if let Move::Play(p) = mv {
        if longest_run(grid, p, color) + 1 >= win_condition {
            return GameResult::Win(color);
        }
    }

    if grid.is_full() {
        GameResult::Draw
    } else {
        GameResult::Unknown
    }
}
