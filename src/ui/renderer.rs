use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::constants::SHOW_ICONS;
use crate::game::GridEngine;

const BUTTON_PANEL_WIDTH: u16 = 18;
const STATUS_HEIGHT: u16 = 3;

pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let size = f.size();
    let config = app.engine.config();

    // Two chars per cell, a target-line row between every grid row, plus borders
    let board_width = (config.num_cols() * 2 + 2) as u16;
    let board_height = (config.num_rows() * 2 + 1 + 2) as u16;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(BUTTON_PANEL_WIDTH),
            Constraint::Length(board_width),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[2];

    render_buttons(f, app, horizontal_chunks[1]);
    render_board(f, &app.engine, board_area);
    render_status(f, app, vertical_chunks[2]);

    if app.show_instructions {
        render_instructions_overlay(f, size);
    }
}

fn render_board<R: Rng>(f: &mut Frame, engine: &GridEngine<R>, area: Rect) {
    let config = engine.config();
    let rows = config.num_rows();
    let levels = engine.target_levels();

    let mut board_lines = Vec::with_capacity(rows * 2 + 1);

    // Boundary b sits above grid row b; a column's target line is at rows - level
    for boundary in 0..=rows {
        let spans: Vec<Span> = levels
            .iter()
            .map(|&level| {
                if rows - level == boundary {
                    Span::styled("╌╌", Style::default().fg(Color::White))
                } else {
                    Span::raw("  ")
                }
            })
            .collect();
        board_lines.push(Line::from(spans));

        if boundary == rows {
            break;
        }

        let spans: Vec<Span> = engine.grid()[boundary]
            .iter()
            .map(|cell| match config.descriptor(cell.color()) {
                Some(descriptor) if cell.is_alive() => {
                    if SHOW_ICONS {
                        Span::styled(
                            format!("{} ", descriptor.icon),
                            Style::default().fg(Color::DarkGray).bg(descriptor.color),
                        )
                    } else {
                        Span::styled("██", Style::default().fg(descriptor.color))
                    }
                }
                _ => Span::raw("  "),
            })
            .collect();
        board_lines.push(Line::from(spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("Color Drops"));

    f.render_widget(board_widget, area);
}

fn render_buttons<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let remaining = app.engine.remaining_colors();
    let mut lines = vec![Line::from(vec![Span::raw("")])];

    for (color, descriptor) in app.engine.config().colors_in_play().iter().enumerate() {
        let enabled = app.controls.is_enabled(color) && remaining.contains(&color);
        let swatch = if enabled { descriptor.color } else { Color::DarkGray };
        let label = Style::default().fg(if enabled { Color::White } else { Color::DarkGray });

        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", color + 1), label),
            Span::styled("████", Style::default().fg(swatch)),
            Span::styled(format!(" {}", descriptor.icon), label),
        ]));
    }

    lines.push(Line::from(vec![Span::raw("")]));
    lines.push(Line::from(vec![Span::raw("[R] Reset")]));
    lines.push(Line::from(vec![Span::raw("[I] Instructions")]));
    lines.push(Line::from(vec![Span::raw("[Q] Quit")]));

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Colors"));
    f.render_widget(widget, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let line = match app.cue {
        Some(cue) => Line::from(vec![Span::styled(cue.message(), Style::default().fg(cue.color()))]),
        None => Line::from(vec![Span::raw("Pick a color to remove it from the grid.")]),
    };

    let widget = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_instructions_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 40, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("• Press a color's number to remove all of that color from the grid.")]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(
            "• Remove the right colors so every stack exactly matches its dotted line.",
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("• Press R to start over.")]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Instructions"))
        .wrap(Wrap { trim: true });

    f.render_widget(widget, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text<R: Rng>(app: &App<R>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 50)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App<StdRng> {
        let config = GameConfig::new(2, 2, 2).unwrap();
        let engine =
            GridEngine::with_layout(config, &[vec![0, 1], vec![1, 0]], vec![1, 2], StdRng::seed_from_u64(6))
                .unwrap();
        App::with_engine(engine)
    }

    #[test]
    fn draws_board_buttons_and_targets() {
        let text = screen_text(&app());
        assert!(text.contains("Colors"));
        assert!(text.contains("[1] ████"));
        assert!(text.contains("[2] ████"));
        assert!(text.contains("╌╌"));
        assert!(text.contains("Pick a color"));
    }

    #[test]
    fn shows_cue_and_instructions() {
        let mut app = app();
        app.select_color(1);
        assert!(screen_text(&app).contains(crate::ui::Cue::Lose.message()));

        app.toggle_instructions();
        let text = screen_text(&app);
        assert!(text.contains("Press R to start over."));
    }
}
