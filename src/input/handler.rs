use crossterm::event::{KeyCode, KeyEventKind};
use rand::Rng;

use crate::app::App;

pub fn handle_input<R: Rng>(app: &mut App<R>, key_code: KeyCode, kind: KeyEventKind) {
    if kind != KeyEventKind::Press {
        return;
    }

    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        // Any other key closes the instructions, like dismissing a dialog
        _ if app.show_instructions => {
            app.show_instructions = false;
        }
        KeyCode::Char('i') | KeyCode::Char('I') => {
            app.toggle_instructions();
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset();
        }
        KeyCode::Char(c @ '1'..='9') => {
            // Button labels start at 1
            let color = c as usize - '1' as usize;
            app.select_color(color);
        }
        _ => {}
    }
}
