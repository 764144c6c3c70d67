mod components;
mod draw;

use crate::app::{AppState, Focus};
use crate::fetcher::FetchEvent;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

pub type UiError = Box<dyn Error + Send + Sync>;

/// Sets up the alternate screen, runs the event loop until quit, and restores
/// the terminal even when the loop errors.
pub fn run(rx: Receiver<FetchEvent>) -> Result<(), UiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    rx: Receiver<FetchEvent>,
) -> Result<(), UiError> {
    let mut state = AppState::new();
    let mut should_quit = false;
    let tick_rate = Duration::from_millis(250);

    while !should_quit {
        terminal.draw(|f| {
            draw::draw(f, &mut state);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    should_quit = handle_key(&mut state, key.code, key.modifiers);
                }
            }
        }

        // Fetch completions arrive in either order; each one replaces its
        // collection and triggers a recompute on the next frame.
        while let Ok(fetch_event) = rx.try_recv() {
            state.apply_event(fetch_event);
        }
    }

    Ok(())
}

fn handle_key(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('q') if state.focus == Focus::Table => return true,
        KeyCode::Tab => state.focus_next(),
        KeyCode::Backspace => state.pop_filter_char(),
        KeyCode::Enter => state.confirm_selection(),
        KeyCode::Down => state.select_next(),
        KeyCode::Up => state.select_previous(),
        KeyCode::Char('j') if state.focus == Focus::Table => state.select_next(),
        KeyCode::Char('k') if state.focus == Focus::Table => state.select_previous(),
        KeyCode::Char(c) => state.push_filter_char(c),
        _ => {}
    }
    false
}
