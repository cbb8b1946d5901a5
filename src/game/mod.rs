pub mod board;
pub mod config;
pub mod error;
pub mod levels;
pub mod state;

pub use board::{Cell, ColorId};
pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use state::{GameStatus, GridEngine};
