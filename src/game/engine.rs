use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Direction, Grid};
use crate::config::BoardConfig;

pub const DEFAULT_WIN_TARGET: u32 = 2048;

/// Chance that a spawned tile is a 4 rather than a 2.
const FOUR_PROBABILITY: f64 = 0.1;

/// Terminal classification of the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won,
    LostNoMoves,
}

/// Everything a renderer needs to draw a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    score: u64,
    high_score: u64,
    win_target: u32,
}

impl GameState {
    fn new(grid: Grid, win_target: u32) -> Self {
        GameState {
            grid,
            score: 0,
            high_score: 0,
            win_target,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn win_target(&self) -> u32 {
        self.win_target
    }
}

/// Owns a [`GameState`] and the random source used for spawning, and is the
/// only thing allowed to mutate either.
#[derive(Debug, Clone)]
pub struct BoardEngine {
    state: GameState,
    rng: StdRng,
}

impl BoardEngine {
    /// Create a freshly reset engine seeded from the OS.
    pub fn new(config: &BoardConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a freshly reset engine with a deterministic tile sequence.
    pub fn with_seed(config: &BoardConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &BoardConfig, rng: StdRng) -> Self {
        let grid = Grid::new(config.height, config.width);
        let mut engine = BoardEngine {
            state: GameState::new(grid, config.win_target),
            rng,
        };
        engine.reset();
        engine
    }

    /// Start from an arbitrary position instead of a reset board.
    ///
    /// Score and high score start at zero.
    pub fn from_grid(grid: Grid, win_target: u32, seed: u64) -> Self {
        BoardEngine {
            state: GameState::new(grid, win_target),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn high_score(&self) -> u64 {
        self.state.high_score
    }

    pub fn win_target(&self) -> u32 {
        self.state.win_target
    }

    /// Fold the score into the high score, clear the grid and spawn two tiles.
    pub fn reset(&mut self) {
        let state = &mut self.state;
        state.high_score = state.high_score.max(state.score);
        state.score = 0;
        state.grid.clear();
        self.spawn();
        self.spawn();
        info!(
            "new {}x{} game (high score {})",
            self.state.grid.height(),
            self.state.grid.width(),
            self.state.high_score
        );
    }

    /// Place a 2 (90%) or a 4 (10%) in a uniformly chosen empty cell and
    /// return its position.
    ///
    /// # Panics
    ///
    /// Panics if the grid is full. [`BoardEngine::apply_move`] only spawns
    /// after a move that changed the grid, which always leaves a gap.
    pub fn spawn(&mut self) -> (usize, usize) {
        let empty = self.state.grid.empty_cells();
        assert!(!empty.is_empty(), "spawn called on a full grid");

        let value = if self.rng.random_bool(FOUR_PROBABILITY) {
            4
        } else {
            2
        };
        let (row, col) = empty[self.rng.random_range(0..empty.len())];
        self.state.grid.set(row, col, value);
        (row, col)
    }

    /// Whether moving in `direction` would change the grid. Pure query.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.state.grid.can_slide(direction)
    }

    /// Slide the grid toward `direction`.
    ///
    /// Returns `false`, leaving grid and score untouched and spawning nothing,
    /// if the move would not change the grid. Otherwise merges are added to
    /// the score and one new tile is spawned.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if !self.can_move(direction) {
            debug!("{} is blocked", direction.name());
            return false;
        }

        let (moved, summary) = self.state.grid.slide(direction);
        self.state.grid = moved;
        self.state.score += summary.gained;
        let (row, col) = self.spawn();
        debug!(
            "moved {}: {} merges, +{} points, spawned at ({row}, {col})",
            direction.name(),
            summary.merges,
            summary.gained
        );
        true
    }

    /// True if any tile has reached the win target.
    pub fn is_win(&self) -> bool {
        self.state.grid.max_tile() >= self.state.win_target
    }

    /// True if no direction can change the grid.
    pub fn is_game_over(&self) -> bool {
        Direction::ALL.iter().all(|&d| !self.can_move(d))
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_win() {
            Outcome::Won
        } else if self.is_game_over() {
            Outcome::LostNoMoves
        } else {
            Outcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(rows: &[&[u32]]) -> BoardEngine {
        BoardEngine::from_grid(Grid::from_rows(rows).unwrap(), DEFAULT_WIN_TARGET, 7)
    }

    /// Full grid with no equal neighbours: 2 4 2 ... / 4 2 4 ... / ...
    fn checkerboard(height: usize, width: usize) -> Grid {
        let rows: Vec<Vec<u32>> = (0..height)
            .map(|r| {
                (0..width)
                    .map(|c| if (r + c) % 2 == 0 { 2 } else { 4 })
                    .collect()
            })
            .collect();
        Grid::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_new_engine_has_two_tiles() {
        let engine = BoardEngine::with_seed(&BoardConfig::default(), 1);
        let grid = engine.grid();
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.count_tiles(), 2);
        assert!(grid.cells().iter().all(|&v| v == 0 || v == 2 || v == 4));
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.win_target(), 2048);
    }

    #[test]
    fn test_reset_records_high_score() {
        let mut engine = engine(&[&[2, 2, 0, 0], &[0, 0, 0, 0]]);
        assert!(engine.apply_move(Direction::Left));
        assert_eq!(engine.score(), 4);

        engine.reset();
        assert_eq!(engine.high_score(), 4);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.grid().count_tiles(), 2);

        // A lower score never lowers the high score.
        engine.reset();
        assert_eq!(engine.high_score(), 4);
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut engine = engine(&[&[2, 4, 0, 0], &[8, 0, 0, 0]]);
        let before = engine.state().clone();
        assert!(!engine.can_move(Direction::Left));
        assert!(!engine.apply_move(Direction::Left));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_legal_move_merges_and_spawns() {
        let mut engine = engine(&[&[2, 2, 2, 2], &[0, 0, 0, 0]]);
        assert!(engine.apply_move(Direction::Left));
        assert_eq!(engine.score(), 8);
        assert_eq!(&engine.grid().row(0)[..2], &[4, 4]);
        // 4 tiles, 2 merges, 1 spawn
        assert_eq!(engine.grid().count_tiles(), 3);
    }

    #[test]
    fn test_spawn_values_and_frequency() {
        let config = BoardConfig::default();
        let mut engine = BoardEngine::with_seed(&config, 42);
        let mut fours = 0;
        let trials = 5_000;
        for _ in 0..trials {
            engine.state.grid.clear();
            let (row, col) = engine.spawn();
            match engine.grid().get(row, col) {
                2 => {}
                4 => fours += 1,
                other => panic!("unexpected spawn value {other}"),
            }
        }
        let ratio = fours as f64 / trials as f64;
        assert!((0.07..0.13).contains(&ratio), "four ratio {ratio}");
    }

    #[test]
    fn test_spawn_reaches_every_empty_cell() {
        let mut seen = [false; 2];
        let mut engine = engine(&[&[2, 0, 4, 0]]);
        for _ in 0..200 {
            let (_, col) = engine.spawn();
            seen[col / 2] = true;
            engine.state.grid.set(0, col, 0);
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic(expected = "spawn called on a full grid")]
    fn test_spawn_on_full_grid_panics() {
        let mut engine = BoardEngine::from_grid(checkerboard(2, 2), DEFAULT_WIN_TARGET, 0);
        engine.spawn();
    }

    #[test]
    fn test_game_over_any_dimensions() {
        for (h, w) in [(1, 2), (2, 3), (4, 4), (5, 3), (1, 6)] {
            let engine = BoardEngine::from_grid(checkerboard(h, w), DEFAULT_WIN_TARGET, 0);
            assert!(engine.is_game_over(), "{h}x{w}");
            assert_eq!(engine.outcome(), Outcome::LostNoMoves);
        }
    }

    #[test]
    fn test_full_grid_with_merge_is_not_over() {
        let engine = engine(&[&[2, 4], &[2, 8]]);
        assert!(!engine.is_game_over());
        assert!(engine.can_move(Direction::Up));
        assert!(!engine.can_move(Direction::Left));
    }

    #[test]
    fn test_win_detection() {
        let mut rows = vec![vec![0u32; 4]; 4];
        rows[2][1] = 2048;
        let engine = BoardEngine::from_grid(Grid::from_rows(&rows).unwrap(), 2048, 0);
        assert!(engine.is_win());
        assert_eq!(engine.outcome(), Outcome::Won);

        rows[2][1] = 1024;
        let engine = BoardEngine::from_grid(Grid::from_rows(&rows).unwrap(), 2048, 0);
        assert!(!engine.is_win());
        assert_eq!(engine.outcome(), Outcome::Continue);
    }

    #[test]
    fn test_custom_win_target() {
        let engine = BoardEngine::from_grid(Grid::from_rows(&[[64u32, 0]]).unwrap(), 64, 0);
        assert!(engine.is_win());
    }

    #[test]
    fn test_seeded_engines_agree() {
        let config = BoardConfig::default();
        let mut a = BoardEngine::with_seed(&config, 99);
        let mut b = BoardEngine::with_seed(&config, 99);
        for direction in Direction::ALL.iter().cycle().take(40) {
            assert_eq!(a.apply_move(*direction), b.apply_move(*direction));
        }
        assert_eq!(a.state(), b.state());
    }
}
