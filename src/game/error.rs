use thiserror::Error;

use crate::game::board::ColorId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid needs at least one row")]
    NoRows,
    #[error("grid needs at least one column")]
    NoColumns,
    #[error("{used} colors requested but the palette has {available} (need at least 1)")]
    ColorCount { used: usize, available: usize },
    #[error("palette entry {index} repeats an earlier color")]
    DuplicateColor { index: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("color {color} is not in play (valid range is 0..{num_colors})")]
    InvalidColor { color: ColorId, num_colors: usize },
    #[error("layout is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    LayoutMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
    #[error("target level {level} for column {col} exceeds {rows} rows")]
    LevelOutOfRange { col: usize, level: usize, rows: usize },
}
