//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::panel::Panel;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the panel until the user quits
pub fn run_tui(panel: Panel) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, App::new(panel));
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, mut app: App) -> Result<()> {
    // Show the loading state before the first blocking call
    terminal.draw(|frame| super::views::render(frame, &mut app))?;
    app.panel.load_accounts();
    app.sync_sidebar();

    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| super::views::render(frame, &mut app))?;

        match events.next()? {
            Event::Key(key_event) => {
                let before = app.panel.request_count();
                handle_event(&mut app, Event::Key(key_event));
                if app.panel.request_count() != before {
                    events.discard_pending();
                }
            }
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
