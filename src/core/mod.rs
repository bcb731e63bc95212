pub mod grid;
pub mod r#move;
pub mod setup;
pub mod types;

pub use grid::{Axis, Direction, Grid, MAX_SIZE};
pub use r#move::Move;
pub use setup::setup_from_strings;
pub use types::{Cell, Color, Point, PASS};
