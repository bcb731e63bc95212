//! Flat Monte Carlo move evaluation.
//!
//! Each legal move is scored by playing `num_simulations` games out to the
//! end from it and counting the results. Playouts run on the caller's grid:
//! every move is recorded in a trace and taken back in reverse order before
//! the next rollout, so no board is ever copied on the sequential path.

use super::config::AIConfig;
use super::seeded_rng;
use super::tactical::rule_move;
use crate::core::{Color, Grid, Move, PASS};
use crate::error::GomokuError;
use crate::logic::{terminal_state, GameResult};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// How moves are picked inside a playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayoutPolicy {
    /// Uniformly random empty point.
    Random,
    /// Uniformly random point from the tactical classifier's top tier.
    Rule,
}

impl Default for PlayoutPolicy {
    fn default() -> Self {
        PlayoutPolicy::Random
    }
}

impl FromStr for PlayoutPolicy {
    type Err = GomokuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(PlayoutPolicy::Random),
            "rule" => Ok(PlayoutPolicy::Rule),
            _ => Err(GomokuError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PlayoutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayoutPolicy::Random => write!(f, "random"),
            PlayoutPolicy::Rule => write!(f, "rule"),
        }
    }
}

/// Results of the rollouts played from one move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win(Color::Black) => self.black_wins += 1,
            GameResult::Win(Color::White) => self.white_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::Unknown => {}
        }
    }

    pub fn total(&self) -> usize {
        self.black_wins + self.white_wins + self.draws
    }

    pub fn wins(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black_wins,
            Color::White => self.white_wins,
        }
    }

    /// `(wins + draws / 2) / rollouts` for `perspective`, 0 when nothing was played.
    pub fn score(&self, perspective: Color) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.wins(perspective) as f64 + 0.5 * self.draws as f64) / total as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveScore {
    pub mv: Move,
    pub score: f64,
    pub tally: Tally,
}

/// Chosen move plus the score of every candidate, in legal-move order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub color: Color,
    pub best: Move,
    pub scores: Vec<MoveScore>,
}

impl Evaluation {
    pub fn best_score(&self) -> Option<&MoveScore> {
        self.scores.iter().find(|s| s.mv == self.best)
    }
}

/// Flat Monte Carlo evaluator.
pub struct FlatMonteCarlo {
    pub num_simulations: usize,
    pub win_condition: usize,
    pub policy: PlayoutPolicy,
    /// Score candidates on rayon workers, each with its own cloned grid.
    pub parallel: bool,
    rng: StdRng,
    cancel: Option<Arc<AtomicBool>>,
    /// Moves applied since the start of the current rollout.
    trace: Vec<Move>,
}

impl FlatMonteCarlo {
    pub fn new(
        num_simulations: usize,
        win_condition: usize,
        policy: PlayoutPolicy,
        seed: Option<u64>,
    ) -> Self {
        Self {
            num_simulations,
            win_condition,
            policy,
            parallel: false,
            rng: seeded_rng(seed),
            cancel: None,
            trace: Vec::new(),
        }
    }

    pub fn from_config(config: &AIConfig) -> Self {
        let mut mc = Self::new(
            config.simulation.num_simulations,
            config.board.win_condition,
            config.simulation.policy,
            config.simulation.seed,
        );
        mc.parallel = config.simulation.parallel;
        mc
    }

    /// Stops further rollouts once `flag` is set. It is only looked at
    /// between rollouts, when the grid is fully rewound.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }

    /// Entry point for the move protocol: `color` is `"b"` or `"w"`, `policy`
    /// is `"random"` or `"rule"`.
    pub fn start_simulation(
        &mut self,
        grid: &mut Grid,
        color: &str,
        policy: &str,
    ) -> Result<Evaluation, GomokuError> {
        let color: Color = color.parse()?;
        self.policy = policy.parse()?;
        self.evaluate(grid, color)
    }

    /// Scores every legal move for `color` and picks the best one. Ties go to
    /// the move enumerated first. The grid is unchanged on return.
    pub fn evaluate(&mut self, grid: &mut Grid, color: Color) -> Result<Evaluation, GomokuError> {
        let moves = grid.legal_moves();
        if moves.is_empty() {
            return Err(GomokuError::NoLegalMoves);
        }
        if self.num_simulations == 0 {
            warn!("num_simulations is 0, every move scores 0");
        }

        let scores = if self.parallel {
            self.evaluate_parallel(grid, color, &moves)?
        } else {
            let mut scores = Vec::with_capacity(moves.len());
            for &mv in &moves {
                scores.push(self.simulate(grid, mv, color)?);
            }
            scores
        };

        let mut best = &scores[0];
        for s in &scores[1..] {
            if s.score > best.score {
                best = s;
            }
        }
        for s in &scores {
            debug!(mv = %grid.label(s.mv), score = s.score, "candidate");
        }
        info!(
            color = %color,
            policy = %self.policy,
            best = %grid.label(best.mv),
            score = best.score,
            "flat monte carlo move"
        );

        Ok(Evaluation {
            color,
            best: best.mv,
            scores,
        })
    }

    fn evaluate_parallel(
        &mut self,
        grid: &Grid,
        color: Color,
        moves: &[Move],
    ) -> Result<Vec<MoveScore>, GomokuError> {
        // seeds are drawn up front so results do not depend on scheduling
        let seeds: Vec<u64> = moves.iter().map(|_| self.rng.gen()).collect();
        let (num_simulations, win_condition, policy) =
            (self.num_simulations, self.win_condition, self.policy);
        let cancel = self.cancel.clone();

        moves
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(&mv, &seed)| {
                let mut worker = FlatMonteCarlo {
                    num_simulations,
                    win_condition,
                    policy,
                    parallel: false,
                    rng: StdRng::seed_from_u64(seed),
                    cancel: cancel.clone(),
                    trace: Vec::new(),
                };
                let mut local = grid.clone();
                worker.simulate(&mut local, mv, color)
            })
            .collect()
    }

    /// Plays `num_simulations` rollouts starting with `color` playing `mv`
    /// and scores them from `color`'s point of view.
    pub fn simulate(
        &mut self,
        grid: &mut Grid,
        mv: Move,
        color: Color,
    ) -> Result<MoveScore, GomokuError> {
        let mut tally = Tally::default();
        for i in 0..self.num_simulations {
            if self.is_cancelled() {
                debug!(completed = i, "rollouts cancelled");
                break;
            }
            let result = self.rollout(grid, mv, color)?;
            trace!(mv = %mv, ?result, "rollout");
            tally.record(result);
        }

        Ok(MoveScore {
            mv,
            score: tally.score(color),
            tally,
        })
    }

    /// One playout to a terminal state, followed by a full rewind.
    fn rollout(&mut self, grid: &mut Grid, mv: Move, color: Color) -> Result<GameResult, GomokuError> {
        let result = self.play_out(grid, mv, color);
        let rewound = self.rewind(grid);
        let result = result?;
        rewound?;
        Ok(result)
    }

    fn play_out(&mut self, grid: &mut Grid, mv: Move, color: Color) -> Result<GameResult, GomokuError> {
        self.apply(grid, mv, color)?;
        let mut last = mv;
        let mut mover = color;

        loop {
            let state = terminal_state(grid, last, mover, self.win_condition);
            if state.is_terminal() {
                return Ok(state);
            }

            let to_move = mover.opponent();
            let next = self.playout_move(grid, to_move)?;
            self.apply(grid, next, to_move)?;
            last = next;
            mover = to_move;
        }
    }

    fn apply(&mut self, grid: &mut Grid, mv: Move, color: Color) -> Result<(), GomokuError> {
        if !grid.apply_move(mv, color) {
            return Err(GomokuError::IllegalMove(mv.point().unwrap_or(PASS)));
        }
        self.trace.push(mv);
        Ok(())
    }

    /// Takes back every traced move, newest first.
    fn rewind(&mut self, grid: &mut Grid) -> Result<(), GomokuError> {
        let mut failed = None;
        while let Some(mv) = self.trace.pop() {
            if !grid.undo_move(mv) && failed.is_none() {
                failed = mv.point();
            }
        }
        match failed {
            Some(p) => Err(GomokuError::UndoFailed(p)),
            None => Ok(()),
        }
    }

    fn playout_move(&mut self, grid: &Grid, color: Color) -> Result<Move, GomokuError> {
        match self.policy {
            PlayoutPolicy::Random => grid
                .empty_points()
                .choose(&mut self.rng)
                .map(|&p| Move::Play(p))
                .ok_or(GomokuError::NoLegalMoves),
            PlayoutPolicy::Rule => {
                rule_move(grid, color, self.win_condition, &mut self.rng).map(Move::Play)
            }
        }
    }
}

/// Player that moves by flat Monte Carlo evaluation.
pub struct FlatMonteCarloAI {
    pub name: String,
    engine: RefCell<FlatMonteCarlo>,
}

impl FlatMonteCarloAI {
    pub fn new(name: &str, engine: FlatMonteCarlo) -> Self {
        Self {
            name: name.to_string(),
            engine: RefCell::new(engine),
        }
    }
}

impl PlayerController for FlatMonteCarloAI {
    fn choose_move(&self, grid: &mut Grid, color: Color) -> Result<Move, GomokuError> {
        let evaluation = self.engine.borrow_mut().evaluate(grid, color)?;
        Ok(evaluation.best)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
