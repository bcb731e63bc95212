use crate::core::{Color, Grid, Move};
use crate::logic::{terminal_state, GameResult};
use crate::player::ai::{build_player, AIConfig, PlayerKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

/// One finished game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRecord {
    pub winner: Option<Color>,
    pub moves: Vec<Move>,
    pub time_ms: u128,
    pub started_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub black_player: String,
    pub white_player: String,
    pub board_size: usize,
    pub games: Vec<GameRecord>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self {
            total_games: 0,
            black_wins: 0,
            white_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            avg_time_ms: 0.0,
            black_player: String::new(),
            white_player: String::new(),
            board_size: 0,
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameRecord) {
        self.total_games += 1;
        match result.winner {
            Some(Color::Black) => self.black_wins += 1,
            Some(Color::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves.len()).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

impl Default for SelfPlayStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays `config.selfplay.num_games` games between the configured players.
///
/// Games run in parallel, each on its own grid with its own players.
pub fn run_selfplay(config: &AIConfig) -> anyhow::Result<SelfPlayStats> {
    config.validate()?;
    let settings = &config.selfplay;

    let mut stats = SelfPlayStats::new();
    stats.black_player = settings.black.to_string();
    stats.white_player = settings.white.to_string();
    stats.board_size = config.board.size;

    info!(
        games = settings.num_games,
        black = %settings.black,
        white = %settings.white,
        "starting self-play"
    );

    let records: Vec<GameRecord> = (0..settings.num_games)
        .into_par_iter()
        .map(|game_idx| play_game(config, settings.black, settings.white, game_idx))
        .collect::<anyhow::Result<_>>()?;

    for (game_idx, record) in records.into_iter().enumerate() {
        if settings.save_records {
            save_record(&record, game_idx + 1, &settings.record_dir)?;
        }
        info!(
            game = game_idx + 1,
            winner = ?record.winner,
            moves = record.moves.len(),
            "game finished"
        );
        stats.add_result(record);
    }

    info!(
        black_wins = stats.black_wins,
        white_wins = stats.white_wins,
        draws = stats.draws,
        avg_moves = stats.avg_moves,
        "self-play done"
    );
    Ok(stats)
}

/// Plays one game from an empty board; black moves first.
pub fn play_game(
    config: &AIConfig,
    black: PlayerKind,
    white: PlayerKind,
    game_idx: usize,
) -> anyhow::Result<GameRecord> {
    let start_time = Instant::now();
    let started_at = chrono::Local::now().to_rfc3339();

    // 対局ごとに異なる系列
    let seed_for = |side: u64| {
        config
            .simulation
            .seed
            .map(|s| s.wrapping_add(game_idx as u64 * 2 + side))
    };
    let p_black = build_player(black, "Black", config, seed_for(0));
    let p_white = build_player(white, "White", config, seed_for(1));

    let mut grid = Grid::new(config.board.size)?;
    let mut moves = Vec::new();
    let win_condition = config.board.win_condition;

    let winner = loop {
        let color = grid.current_player;
        let controller = match color {
            Color::Black => p_black.as_ref(),
            Color::White => p_white.as_ref(),
        };

        let mv = controller.choose_move(&mut grid, color)?;
        if !grid.apply_move(mv, color) {
            anyhow::bail!("{} played an illegal move: {}", controller.name(), grid.label(mv));
        }
        debug!(game = game_idx + 1, player = controller.name(), mv = %grid.label(mv), "move");
        moves.push(mv);
        grid.current_player = color.opponent();

        match terminal_state(&grid, mv, color, win_condition) {
            GameResult::Win(c) => break Some(c),
            GameResult::Draw => break None,
            GameResult::Unknown => {}
        }
    };

    Ok(GameRecord {
        winner,
        moves,
        time_ms: start_time.elapsed().as_millis(),
        started_at,
    })
}

fn save_record(record: &GameRecord, game_num: usize, record_dir: &str) -> anyhow::Result<()> {
    std::fs::create_dir_all(record_dir)?;

    let filename = format!(
        "{}/game_{:04}_{}.json",
        record_dir,
        game_num,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );

    let file = std::fs::File::create(filename)?;
    serde_json::to_writer(file, record)?;
    Ok(())
}
