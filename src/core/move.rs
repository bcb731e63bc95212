use super::types::{Point, PASS};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Play(Point),
    Pass,
}

impl Move {
    /// The board point this move occupies, if any.
    pub fn point(self) -> Option<Point> {
        match self {
            Move::Play(p) => Some(p),
            Move::Pass => None,
        }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl From<Point> for Move {
    fn from(point: Point) -> Self {
        if point == PASS {
            Move::Pass
        } else {
            Move::Play(point)
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Play(p) => write!(f, "{}", p),
            Move::Pass => write!(f, "pass"),
        }
    }
}
