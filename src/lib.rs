//! Color Drops: remove colors from a grid until every column matches its
//! target height.

pub mod app;
pub mod constants;
pub mod game;
pub mod input;
pub mod ui;
