use log::{debug, info, warn};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::game::board::{grid_from_colors, live_count, Cell, ColorId, Grid};
use crate::game::config::GameConfig;
use crate::game::error::GameError;
use crate::game::levels::pick_levels;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Owns the grid and the column targets. Not meant for concurrent use.
pub struct GridEngine<R: Rng = ThreadRng> {
    config: GameConfig,
    grid: Grid,
    target_levels: Vec<usize>,
    status: GameStatus,
    rng: R,
}

impl GridEngine<ThreadRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GridEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let mut engine = Self {
            grid: Vec::new(),
            target_levels: Vec::new(),
            status: GameStatus::InProgress,
            config,
            rng,
        };
        engine.reset();
        engine
    }

    /// Builds an engine from a fixed layout instead of a random fill.
    pub fn with_layout(
        config: GameConfig,
        colors: &[Vec<ColorId>],
        target_levels: Vec<usize>,
        rng: R,
    ) -> Result<Self, GameError> {
        let rows = colors.len();
        let cols = colors.first().map_or(0, |row| row.len());
        let ragged = colors.iter().any(|row| row.len() != cols);
        if ragged
            || rows != config.num_rows()
            || cols != config.num_cols()
            || target_levels.len() != cols
        {
            return Err(GameError::LayoutMismatch {
                rows,
                cols: if ragged { 0 } else { cols },
                expected_rows: config.num_rows(),
                expected_cols: config.num_cols(),
            });
        }
        if let Some(&color) = colors.iter().flatten().find(|&&c| c >= config.num_colors_used()) {
            return Err(GameError::InvalidColor {
                color,
                num_colors: config.num_colors_used(),
            });
        }
        if let Some((col, &level)) = target_levels.iter().enumerate().find(|(_, &l)| l > rows) {
            return Err(GameError::LevelOutOfRange { col, level, rows });
        }

        Ok(Self {
            grid: grid_from_colors(colors),
            target_levels,
            status: GameStatus::InProgress,
            config,
            rng,
        })
    }

    /// Refills the grid with random cells and picks new targets.
    pub fn reset(&mut self) {
        let num_colors = self.config.num_colors_used();
        let rng = &mut self.rng;
        self.grid = (0..self.config.num_rows())
            .map(|_| {
                (0..self.config.num_cols())
                    .map(|_| Cell::new(rng.gen_range(0..num_colors)))
                    .collect()
            })
            .collect();
        self.target_levels = pick_levels(&self.grid, num_colors, &mut self.rng);
        self.status = GameStatus::InProgress;
        debug!("grid reset, target levels {:?}", self.target_levels);
    }

    /// Kills every live cell of `color`, lets the rest fall, and re-evaluates.
    pub fn make_move(&mut self, color: ColorId) -> Result<GameStatus, GameError> {
        let num_colors = self.config.num_colors_used();
        if color >= num_colors {
            warn!("rejected move for color {} ({} colors in play)", color, num_colors);
            return Err(GameError::InvalidColor { color, num_colors });
        }

        let killed = self.kill_all_cells_of_color(color);
        self.drop_cells();
        let status = self.evaluate_status();
        debug!("color {} removed {} cells, status {:?}", color, killed, status);
        if status.is_terminal() {
            info!("game over: {:?}", status);
        }
        Ok(status)
    }

    /// Returns how many cells died.
    pub fn kill_all_cells_of_color(&mut self, color: ColorId) -> usize {
        let mut killed = 0;
        for cell in self.grid.iter_mut().flatten() {
            if cell.is_alive() && cell.color() == color {
                cell.kill();
                killed += 1;
            }
        }
        killed
    }

    /// Gravity: swaps each hole with the nearest live cell above it, column by column.
    pub fn drop_cells(&mut self) {
        let rows = self.grid.len();
        for col in 0..self.config.num_cols() {
            for row in (1..rows).rev() {
                if self.grid[row][col].is_alive() {
                    continue;
                }
                if let Some(above) = (0..row).rev().find(|&r| self.grid[r][col].is_alive()) {
                    let falling = self.grid[above][col];
                    self.grid[above][col] = self.grid[row][col];
                    self.grid[row][col] = falling;
                }
            }
        }
    }

    pub fn evaluate_status(&mut self) -> GameStatus {
        let counts: Vec<usize> = (0..self.config.num_cols())
            .map(|col| live_count(&self.grid, col))
            .collect();

        self.status = if counts.iter().zip(&self.target_levels).any(|(live, target)| live < target) {
            GameStatus::Lost
        } else if counts == self.target_levels {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        self.status
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.get(row).and_then(|cells| cells.get(col))
    }

    pub fn target_levels(&self) -> &[usize] {
        &self.target_levels
    }

    pub fn live_count(&self, col: usize) -> usize {
        live_count(&self.grid, col)
    }

    /// Colors that still have at least one live cell, ascending.
    pub fn remaining_colors(&self) -> Vec<ColorId> {
        (0..self.config.num_colors_used())
            .filter(|&color| {
                self.grid
                    .iter()
                    .flatten()
                    .any(|cell| cell.is_alive() && cell.color() == color)
            })
            .collect()
    }
}
