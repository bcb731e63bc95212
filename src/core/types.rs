use crate::error::GomokuError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 盤上の点 (パディング込みの一次元インデックス)
pub type Point = usize;

/// パス
pub const PASS: Point = 0;

/// 石の色 (手番)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black, // 先手
    White, // 後手
}

impl Default for Color {
    fn default() -> Self {
        Color::Black
    }
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Single-letter token used by the move protocol.
    pub fn token(self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }
}

impl FromStr for Color {
    type Err = GomokuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(GomokuError::InvalidColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// マスの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Black,
    White,
    /// 盤外 (番兵)
    Border,
}

impl Cell {
    pub fn is_stone(self) -> bool {
        matches!(self, Cell::Black | Cell::White)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

impl PartialEq<Color> for Cell {
    fn eq(&self, other: &Color) -> bool {
        *self == Cell::from(*other)
    }
}
