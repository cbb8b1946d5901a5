use ratatui::style::Color;

use crate::game::GameStatus;

/// The feedback played after a reset or a move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cue {
    Reset,
    KeepGoing,
    Win,
    Lose,
}

impl Cue {
    pub fn for_status(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => Cue::KeepGoing,
            GameStatus::Won => Cue::Win,
            GameStatus::Lost => Cue::Lose,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Cue::Reset => "New board. Match the dotted lines!",
            Cue::KeepGoing => "Hmm... keep going.",
            Cue::Win => "You matched every line. You win!",
            Cue::Lose => "Too many removed. You lose!",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Cue::Reset => Color::Cyan,
            Cue::KeepGoing => Color::Yellow,
            Cue::Win => Color::Green,
            Cue::Lose => Color::Red,
        }
    }

    pub fn rings_bell(self) -> bool {
        matches!(self, Cue::Win | Cue::Lose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_outcome_has_its_own_cue() {
        let cues = [
            Cue::for_status(GameStatus::InProgress),
            Cue::for_status(GameStatus::Won),
            Cue::for_status(GameStatus::Lost),
        ];
        assert_eq!(cues, [Cue::KeepGoing, Cue::Win, Cue::Lose]);
        assert_ne!(cues[0].message(), cues[1].message());
        assert_ne!(cues[1].message(), cues[2].message());
    }

    #[test]
    fn only_terminal_cues_ring() {
        assert!(!Cue::Reset.rings_bell());
        assert!(!Cue::KeepGoing.rings_bell());
        assert!(Cue::Win.rings_bell());
        assert!(Cue::Lose.rings_bell());
    }
}
