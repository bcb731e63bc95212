use crate::core::{Color, Grid, Move};
use crate::error::GomokuError;

/// 文字列配列から盤面を初期化する
///
/// Each row is a whitespace-separated list of tokens: `.` for empty, `X`/`B`
/// for black and `O`/`W` for white. The board must be square.
pub fn setup_from_strings(setup: &[&str]) -> Result<Grid, GomokuError> {
    let size = setup.len();
    let mut grid = Grid::new(size)?;

    for (row, line) in setup.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != size {
            return Err(GomokuError::InvalidSize(tokens.len()));
        }

        for (col, token) in tokens.into_iter().enumerate() {
            let color = match parse_stone(token)? {
                Some(color) => color,
                None => continue,
            };
            let p = grid.coordinate_to_point(row, col)?;
            grid.apply_move(Move::Play(p), color);
        }
    }
    Ok(grid)
}

fn parse_stone(token: &str) -> Result<Option<Color>, GomokuError> {
    match token {
        "." => Ok(None),
        "X" | "x" | "B" | "b" => Ok(Some(Color::Black)),
        "O" | "o" | "W" | "w" => Ok(Some(Color::White)),
        _ => Err(GomokuError::InvalidColor(token.to_string())),
    }
}
