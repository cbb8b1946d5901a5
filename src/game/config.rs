use ratatui::style::Color;

use crate::constants::{NUM_COLORS_USED, NUM_COLS, NUM_ROWS, PALETTE};
use crate::game::board::ColorId;
use crate::game::error::ConfigError;

/// How a color is drawn on cells and buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ColorDescriptor {
    pub color: Color,
    pub icon: char,
}

fn default_palette() -> Vec<ColorDescriptor> {
    PALETTE
        .iter()
        .map(|&(color, icon)| ColorDescriptor { color, icon })
        .collect()
}

/// Immutable game settings, checked once when built.
#[derive(Clone, Debug)]
pub struct GameConfig {
    num_rows: usize,
    num_cols: usize,
    num_colors_used: usize,
    palette: Vec<ColorDescriptor>,
}

impl GameConfig {
    pub fn new(num_rows: usize, num_cols: usize, num_colors_used: usize) -> Result<Self, ConfigError> {
        Self::with_palette(num_rows, num_cols, num_colors_used, default_palette())
    }

    pub fn with_palette(
        num_rows: usize,
        num_cols: usize,
        num_colors_used: usize,
        palette: Vec<ColorDescriptor>,
    ) -> Result<Self, ConfigError> {
        if num_rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if num_cols == 0 {
            return Err(ConfigError::NoColumns);
        }
        if num_colors_used == 0 || num_colors_used > palette.len() {
            return Err(ConfigError::ColorCount {
                used: num_colors_used,
                available: palette.len(),
            });
        }
        for (index, descriptor) in palette.iter().enumerate() {
            if palette[..index].iter().any(|earlier| earlier.color == descriptor.color) {
                return Err(ConfigError::DuplicateColor { index });
            }
        }

        Ok(Self {
            num_rows,
            num_cols,
            num_colors_used,
            palette,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn num_colors_used(&self) -> usize {
        self.num_colors_used
    }

    pub fn descriptor(&self, color: ColorId) -> Option<&ColorDescriptor> {
        if color < self.num_colors_used {
            self.palette.get(color)
        } else {
            None
        }
    }

    /// Descriptors of the colors in play, indexed by color id.
    pub fn colors_in_play(&self) -> &[ColorDescriptor] {
        &self.palette[..self.num_colors_used]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_rows: NUM_ROWS,
            num_cols: NUM_COLS,
            num_colors_used: NUM_COLORS_USED,
            palette: default_palette(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.num_rows(), NUM_ROWS);
        assert_eq!(config.num_cols(), NUM_COLS);
        assert_eq!(config.colors_in_play().len(), NUM_COLORS_USED);
        assert!(GameConfig::new(NUM_ROWS, NUM_COLS, NUM_COLORS_USED).is_ok());
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(GameConfig::new(0, 5, 3).unwrap_err(), ConfigError::NoRows);
        assert_eq!(GameConfig::new(5, 0, 3).unwrap_err(), ConfigError::NoColumns);
    }

    #[test]
    fn rejects_color_count_out_of_range() {
        assert!(matches!(
            GameConfig::new(5, 5, 0),
            Err(ConfigError::ColorCount { used: 0, .. })
        ));
        assert!(matches!(
            GameConfig::new(5, 5, PALETTE.len() + 1),
            Err(ConfigError::ColorCount { .. })
        ));
        assert!(GameConfig::new(5, 5, PALETTE.len()).is_ok());
    }

    #[test]
    fn rejects_duplicate_palette_colors() {
        let palette = vec![
            ColorDescriptor { color: Color::Red, icon: 'a' },
            ColorDescriptor { color: Color::Blue, icon: 'b' },
            ColorDescriptor { color: Color::Red, icon: 'c' },
        ];
        assert_eq!(
            GameConfig::with_palette(2, 2, 2, palette).unwrap_err(),
            ConfigError::DuplicateColor { index: 2 }
        );
    }

    #[test]
    fn descriptor_only_for_colors_in_play() {
        let config = GameConfig::new(3, 3, 2).unwrap();
        assert_eq!(config.descriptor(1).map(|d| d.color), Some(Color::Green));
        assert!(config.descriptor(2).is_none());
    }
}
