mod app;
mod audio;
mod config;
mod event;
mod game;
mod input;
mod ui;

use std::fs::File;
use std::io;

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use app::App;
use audio::{Bell, Sfx, Silent};
use config::Config;
use event::{Event, EventHandler};

fn main() -> io::Result<()> {
    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    init_logging(&config)?;
    log::info!("fakeout starting, tick every {}ms", config.tick_ms);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Key releases let held keys end exactly; without them presses lapse.
    let reports_release = supports_keyboard_enhancement().unwrap_or(false);
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    log::debug!("terminal reports key releases: {reports_release}");
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let sfx: Box<dyn Sfx> = if config.bell {
        Box::new(Bell::stdout())
    } else {
        Box::new(Silent)
    };
    let mut app = App::new(reports_release, sfx);
    let event_handler = EventHandler::new(config.tick_ms);

    let result = run(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    if reports_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("game loop failed: {e}");
    }
    log::info!("fakeout exiting");
    result
}

/// Input, update, render: once per tick until the player quits.
fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, events: &EventHandler) -> io::Result<()> {
    terminal.draw(|frame| ui::render(frame, app))?;
    loop {
        match events.next()? {
            Event::Key(key) => app.on_key(key),
            Event::Tick => {
                app.on_tick();
                terminal.draw(|frame| ui::render(frame, app))?;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// The terminal belongs to the game, so logs only go to a file and only
/// when one is configured.
fn init_logging(config: &Config) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
