use gomoku_flat_mc::core::Grid;
use gomoku_flat_mc::player::ai::{AIConfig, FlatMonteCarlo};
use gomoku_flat_mc::selfplay::run_selfplay;
use std::env;
use tracing::info;

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  gomoku-flat-mc evaluate [b|w] [random|rule]");
    eprintln!("  gomoku-flat-mc selfplay [num_games]");
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let args: Vec<String> = env::args().collect();
    let mut config = AIConfig::load_or_default();

    match args.get(1).map(String::as_str) {
        None | Some("evaluate") => {
            let color = args.get(2).map(String::as_str).unwrap_or("b");
            let policy = args
                .get(3)
                .cloned()
                .unwrap_or_else(|| config.simulation.policy.to_string());

            let mut grid = Grid::new(config.board.size)?;
            let mut player = FlatMonteCarlo::from_config(&config);
            let evaluation = player.start_simulation(&mut grid, color, &policy)?;

            info!(best = %grid.label(evaluation.best), "evaluation finished");
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
        }
        Some("selfplay") => {
            if let Some(n) = args.get(2) {
                config.selfplay.num_games = n.parse()?;
            }
            let stats = run_selfplay(&config)?;
            println!(
                "Black ({}) wins: {}, White ({}) wins: {}, Draws: {}, Avg moves: {:.1}",
                stats.black_player,
                stats.black_wins,
                stats.white_player,
                stats.white_wins,
                stats.draws,
                stats.avg_moves
            );
        }
        Some(_) => usage(),
    }

    Ok(())
}
