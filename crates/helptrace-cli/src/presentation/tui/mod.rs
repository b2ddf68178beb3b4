mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

use helptrace_types::Dataset;

use super::theme::Theme;
use app::{AppState, DetailTab};

pub fn run(dataset: Dataset, theme: Theme) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut app_state = AppState::new(dataset, theme);
    let mut should_quit = false;

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = std::time::Instant::now();

    while !should_quit {
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if app_state.search_mode {
                    handle_search_key(&mut app_state, key.code);
                } else {
                    handle_key(&mut app_state, key.code, &mut should_quit);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = std::time::Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_key(state: &mut AppState, code: KeyCode, should_quit: &mut bool) {
    match code {
        KeyCode::Char('q') => {
            *should_quit = true;
        }
        KeyCode::Esc => {
            if state.detail.is_some() {
                state.close_detail();
            } else {
                *should_quit = true;
            }
        }
        KeyCode::Tab => {
            state.close_detail();
            state.tab = state.tab.toggled();
        }
        KeyCode::Char('/') => {
            state.tab = app::ActiveTab::Sessions;
            state.search_mode = true;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_previous();
        }
        KeyCode::Enter => {
            if state.tab == app::ActiveTab::Sessions {
                state.open_detail();
            }
        }
        KeyCode::Char('1') | KeyCode::Left => {
            if state.detail.is_some() {
                state.detail = Some(DetailTab::Transcript);
            }
        }
        KeyCode::Char('2') | KeyCode::Right => {
            if state.detail.is_some() {
                state.detail = Some(DetailTab::Summary);
            }
        }
        KeyCode::Char('t') => {
            state.toggle_theme();
        }
        _ => {}
    }
}

fn handle_search_key(state: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            state.search_mode = false;
            state.search_query.clear();
            state.clamp_selection();
        }
        KeyCode::Enter => {
            state.search_mode = false;
        }
        KeyCode::Backspace => {
            state.search_query.pop();
            state.clamp_selection();
        }
        KeyCode::Char(c) => {
            state.search_query.push(c);
            state.clamp_selection();
        }
        _ => {}
    }
}
