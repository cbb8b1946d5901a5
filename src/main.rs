use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    style::Print,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{
    fs::File,
    io::stdout,
    time::Duration,
};

use colordrops::app::App;
use colordrops::constants;
use colordrops::game::GameConfig;
use colordrops::input::handle_input;
use colordrops::ui::ui;

// The TUI owns the screen, so logs go to a file and only when RUST_LOG asks for them
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(constants::LOG_FILE)
        .with_context(|| format!("could not create {}", constants::LOG_FILE))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::new(constants::NUM_ROWS, constants::NUM_COLS, constants::NUM_COLORS_USED)
        .context("invalid game constants")?;
    let mut app = App::new(config);
    log::info!("starting with target levels {:?}", app.engine.target_levels());

    // Setup terminal
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup, even when the loop failed
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, &*app))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                handle_input(app, code, kind);
            }
        }

        if app.take_bell() {
            execute!(terminal.backend_mut(), Print('\x07'))?;
        }
    }
    Ok(())
}
