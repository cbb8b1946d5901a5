use rand::Rng;

use crate::game::{ColorId, GameError, GameStatus, GridEngine};

/// Enabled/disabled state of the color buttons.
///
/// A button goes grey once pressed, and every button goes grey when the game
/// ends. Reset brings them all back.
pub struct ColorControls {
    enabled: Vec<bool>,
}

impl ColorControls {
    pub fn new(num_colors: usize) -> Self {
        Self {
            enabled: vec![true; num_colors],
        }
    }

    pub fn is_enabled(&self, color: ColorId) -> bool {
        self.enabled.get(color).copied().unwrap_or(false)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.iter().filter(|&&on| on).count()
    }

    pub fn enable_all(&mut self) {
        self.enabled.iter_mut().for_each(|on| *on = true);
    }

    pub fn disable_all(&mut self) {
        self.enabled.iter_mut().for_each(|on| *on = false);
    }

    /// Presses a color button. `Ok(None)` means the button was greyed out and
    /// nothing happened; colors without a button are passed on to the engine,
    /// which rejects them.
    pub fn select<R: Rng>(
        &mut self,
        engine: &mut GridEngine<R>,
        color: ColorId,
    ) -> Result<Option<GameStatus>, GameError> {
        if color < self.enabled.len() && !self.enabled[color] {
            return Ok(None);
        }

        let status = engine.make_move(color)?;
        if let Some(on) = self.enabled.get_mut(color) {
            *on = false;
        }
        if status.is_terminal() {
            self.disable_all();
        }
        Ok(Some(status))
    }

    pub fn reset<R: Rng>(&mut self, engine: &mut GridEngine<R>) {
        engine.reset();
        self.enable_all();
    }
}
