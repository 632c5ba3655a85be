use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::load_config;
use crate::model::BinderConfig;
use crate::store::{Hierarchy, Intent, apply};

use super::input;
use super::render;
use super::theme::Theme;

/// Main application state: the hierarchy plus view-only concerns.
///
/// The hierarchy is only ever replaced wholesale through [`App::dispatch`],
/// so a draw always sees one consistent snapshot.
pub struct App {
    pub state: Hierarchy,
    pub theme: Theme,
    /// Show key hints in the status row
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &BinderConfig) -> Self {
        App {
            state: Hierarchy::new(),
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            should_quit: false,
        }
    }

    /// Route one intent through the store. The next draw renders the new
    /// snapshot.
    pub fn dispatch(&mut self, intent: Intent) {
        self.state = apply(&self.state, intent);
    }
}

pub fn run(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path.map(Path::new))?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
