use log::warn;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::game::{ColorId, GameConfig, GridEngine};
use crate::input::ColorControls;
use crate::ui::Cue;

/// Session state shared by the input handler and the renderer.
pub struct App<R: Rng = ThreadRng> {
    pub engine: GridEngine<R>,
    pub controls: ColorControls,
    pub cue: Option<Cue>,
    pub show_instructions: bool,
    pub should_quit: bool,
    pub bell_pending: bool,
}

impl App<ThreadRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GridEngine::new(config))
    }
}

impl<R: Rng> App<R> {
    pub fn with_engine(engine: GridEngine<R>) -> Self {
        let controls = ColorControls::new(engine.config().num_colors_used());
        Self {
            engine,
            controls,
            cue: None,
            show_instructions: false,
            should_quit: false,
            bell_pending: false,
        }
    }

    pub fn reset(&mut self) {
        self.controls.reset(&mut self.engine);
        self.set_cue(Cue::Reset);
    }

    pub fn select_color(&mut self, color: ColorId) {
        match self.controls.select(&mut self.engine, color) {
            Ok(Some(status)) => self.set_cue(Cue::for_status(status)),
            Ok(None) => {}
            Err(err) => warn!("ignoring key: {}", err),
        }
    }

    pub fn toggle_instructions(&mut self) {
        self.show_instructions = !self.show_instructions;
    }

    /// Returns true once per terminal cue.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    fn set_cue(&mut self, cue: Cue) {
        self.bell_pending = cue.rings_bell();
        self.cue = Some(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app() -> App<StdRng> {
        let config = GameConfig::new(2, 2, 2).unwrap();
        let engine =
            GridEngine::with_layout(config, &[vec![0, 1], vec![1, 0]], vec![1, 1], StdRng::seed_from_u64(2))
                .unwrap();
        App::with_engine(engine)
    }

    #[test]
    fn winning_move_sets_cue_and_bell() {
        let mut app = app();
        app.select_color(0);
        assert_eq!(app.engine.status(), GameStatus::Won);
        assert_eq!(app.cue, Some(Cue::Win));
        assert!(app.take_bell());
        assert!(!app.take_bell());
    }

    #[test]
    fn invalid_color_changes_nothing() {
        let mut app = app();
        app.select_color(5);
        assert_eq!(app.cue, None);
        assert_eq!(app.engine.status(), GameStatus::InProgress);
        assert_eq!(app.controls.enabled_count(), 2);
    }

    #[test]
    fn reset_restores_play() {
        let mut app = app();
        app.select_color(1);
        assert_eq!(app.cue, Some(Cue::Win));
        app.reset();
        assert_eq!(app.cue, Some(Cue::Reset));
        assert!(!app.take_bell());
        assert_eq!(app.controls.enabled_count(), 2);
        assert_eq!(app.engine.status(), GameStatus::InProgress);
    }
}
