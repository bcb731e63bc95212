pub mod config;
pub mod random;
pub mod rollout;
pub mod tactical;

pub use config::{AIConfig, PlayerKind};
pub use random::RandomAI;
pub use rollout::{
    Evaluation, FlatMonteCarlo, FlatMonteCarloAI, MoveScore, PlayoutPolicy, Tally,
};
pub use tactical::{classify, rule_move, TacticalAI, TacticalClassification};

use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded generator when `seed` is given, entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Builds a player of the given kind from the shared configuration.
pub fn build_player(
    kind: PlayerKind,
    name: &str,
    config: &AIConfig,
    seed: Option<u64>,
) -> Box<dyn PlayerController> {
    let win_condition = config.board.win_condition;
    match kind {
        PlayerKind::Random => Box::new(RandomAI::new(name, seed)),
        PlayerKind::Rule => Box::new(TacticalAI::new(name, win_condition, seed)),
        PlayerKind::Mc => {
            let mut engine = FlatMonteCarlo::new(
                config.simulation.num_simulations,
                win_condition,
                config.simulation.policy,
                seed,
            );
            engine.parallel = config.simulation.parallel;
            Box::new(FlatMonteCarloAI::new(name, engine))
        }
    }
}
