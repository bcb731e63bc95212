//! Padded one-dimensional board.
//!
//! An `n x n` board is stored row-major in a flat array with a one-cell
//! border ring and one separator cell per row, so every neighbour of a live
//! point is a valid index. Walking off the playing area always lands on a
//! [`Cell::Border`] sentinel:
//!
//! ```text
//! n = 3, NS = n + 1 = 4
//!
//!  0  1  2  3      # # # #
//!  4  5  6  7      # . . .
//!  8  9 10 11      # . . .
//! 12 13 14 15      # . . .
//! 16 17 18 19 20   # # # # #
//! ```
//!
//! Point `0` is always border, which is why it doubles as [`PASS`].

use super::r#move::Move;
use super::types::{Cell, Color, Point, PASS};
use crate::error::GomokuError;

/// Largest supported board side.
pub const MAX_SIZE: usize = 25;

/// Compass directions on the padded board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }
}

/// An undirected line through a point, made of two opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// N / S
    Vertical,
    /// NE / SW
    Rising,
    /// E / W
    Horizontal,
    /// SE / NW
    Falling,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Vertical, Axis::Rising, Axis::Horizontal, Axis::Falling];

    pub fn directions(self) -> (Direction, Direction) {
        match self {
            Axis::Vertical => (Direction::N, Direction::S),
            Axis::Rising => (Direction::NE, Direction::SW),
            Axis::Horizontal => (Direction::E, Direction::W),
            Axis::Falling => (Direction::SE, Direction::NW),
        }
    }
}

/// 盤面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Distance between vertically adjacent points (`size + 1`).
    ns: usize,
    maxpoint: usize,
    cells: Vec<Cell>,
    /// Index delta per [`Direction`], in `Direction::ALL` order.
    increments: [isize; 8],
    empty_count: usize,
    /// 次の手番
    pub current_player: Color,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self, GomokuError> {
        if !(2..=MAX_SIZE).contains(&size) {
            return Err(GomokuError::InvalidSize(size));
        }

        let ns = size + 1;
        let maxpoint = size * size + 3 * ns;
        let n = ns as isize;
        let increments = [
            -n,     // N
            -n + 1, // NE
            1,      // E
            n + 1,  // SE
            n,      // S
            n - 1,  // SW
            -1,     // W
            -n - 1, // NW
        ];

        let mut grid = Grid {
            size,
            ns,
            maxpoint,
            cells: vec![Cell::Border; maxpoint],
            increments,
            empty_count: 0,
            current_player: Color::Black,
        };
        grid.reset();
        Ok(grid)
    }

    /// Clears every live point and gives the move back to black.
    pub fn reset(&mut self) {
        for row in 0..self.size {
            let start = self.row_start(row);
            self.cells[start..start + self.size].fill(Cell::Empty);
        }
        self.empty_count = self.size * self.size;
        self.current_player = Color::Black;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn maxpoint(&self) -> usize {
        self.maxpoint
    }

    /// Read-only view of the whole padded array, border included.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn row_start(&self, row: usize) -> Point {
        (row + 1) * self.ns + 1
    }

    /// Maps a 0-based `(row, col)` to its point.
    pub fn coordinate_to_point(&self, row: usize, col: usize) -> Result<Point, GomokuError> {
        if row >= self.size || col >= self.size {
            return Err(GomokuError::InvalidCoordinate { row, col });
        }
        Ok(self.row_start(row) + col)
    }

    /// Inverse of [`Grid::coordinate_to_point`]. Border points have no coordinate.
    pub fn point_to_coordinate(&self, point: Point) -> Result<(usize, usize), GomokuError> {
        if !self.is_live(point) {
            return Err(self.out_of_range(point));
        }
        Ok((point / self.ns - 1, point % self.ns - 1))
    }

    /// Whether `point` is on the playing area.
    pub fn is_live(&self, point: Point) -> bool {
        point < self.maxpoint && self.cells[point] != Cell::Border
    }

    pub fn color_at(&self, point: Point) -> Result<Cell, GomokuError> {
        self.cells
            .get(point)
            .copied()
            .ok_or_else(|| self.out_of_range(point))
    }

    /// Unchecked read for scanners that only walk from live points.
    #[inline]
    pub(crate) fn cell(&self, point: Point) -> Cell {
        self.cells[point]
    }

    #[inline]
    pub fn increment(&self, dir: Direction) -> isize {
        self.increments[dir as usize]
    }

    /// The point one step away in `dir`. Stepping from a live point never
    /// leaves the array.
    #[inline]
    pub fn step(&self, point: Point, dir: Direction) -> Point {
        (point as isize + self.increment(dir)) as Point
    }

    pub fn neighbors(&self, point: Point) -> [Point; 4] {
        [point - 1, point + 1, point - self.ns, point + self.ns]
    }

    pub fn diagonal_neighbors(&self, point: Point) -> [Point; 4] {
        [
            point - self.ns - 1,
            point - self.ns + 1,
            point + self.ns - 1,
            point + self.ns + 1,
        ]
    }

    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    pub fn is_full(&self) -> bool {
        self.empty_count == 0
    }

    /// 空点の一覧 (行優先)
    pub fn empty_points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.empty_count);
        for row in 0..self.size {
            let start = self.row_start(row);
            for p in start..start + self.size {
                if self.cells[p] == Cell::Empty {
                    points.push(p);
                }
            }
        }
        points
    }

    /// 合法手生成 (パスは含まない)
    pub fn legal_moves(&self) -> Vec<Move> {
        self.empty_points().into_iter().map(Move::Play).collect()
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        match mv {
            Move::Pass => true,
            Move::Play(p) => {
                !self.is_full() && p < self.maxpoint && self.cells[p] == Cell::Empty
            }
        }
    }

    /// Places a stone of `color`. Returns false, leaving the grid untouched,
    /// when the board is full or the point is not empty. Passing always succeeds.
    pub fn apply_move(&mut self, mv: Move, color: Color) -> bool {
        if !self.is_legal(mv) {
            return false;
        }
        if let Move::Play(p) = mv {
            self.cells[p] = Cell::from(color);
            self.empty_count -= 1;
        }
        true
    }

    /// Empties a point set by [`Grid::apply_move`]. Returns false when there is
    /// no stone to remove. The grid keeps no history; callers undo in reverse
    /// order of application.
    pub fn undo_move(&mut self, mv: Move) -> bool {
        let p = match mv {
            Move::Pass => return true,
            Move::Play(p) => p,
        };
        match self.cells.get(p) {
            Some(cell) if cell.is_stone() => {
                self.cells[p] = Cell::Empty;
                self.empty_count += 1;
                true
            }
            _ => false,
        }
    }

    /// GTP-style label such as `C4`, used in log output.
    pub fn label(&self, mv: Move) -> String {
        match mv {
            Move::Pass => "pass".to_string(),
            Move::Play(p) => match self.point_to_coordinate(p) {
                Ok((row, col)) => format!("{}{}", (b'A' + col as u8) as char, row + 1),
                Err(_) => format!("#{}", p),
            },
        }
    }

    fn out_of_range(&self, point: Point) -> GomokuError {
        GomokuError::OutOfRange {
            point,
            maxpoint: self.maxpoint,
        }
    }
}
