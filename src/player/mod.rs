pub mod ai;
pub mod controller;

pub use ai::{FlatMonteCarloAI, RandomAI, TacticalAI};
pub use controller::PlayerController;
