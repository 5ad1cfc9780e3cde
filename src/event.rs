//! Input events and key handling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::{App, CategoryFocus, CategoryPage, FilterPage, MainMenuEntry, MainMenuState, Page};
use crate::chef::{ChefFocus, ChefPanel, FormField};
use crate::menu::{Course, CourseFilter, MenuCatalog};
use crate::nav::NavAction;

/// Events consumed by the main loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    Input(Event),
    Tick,
}

/// What a key press asks the app to do beyond updating page state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Navigate(NavAction),
    Quit,
}

/// Forward terminal input into `tx` until the receiver goes away.
/// Runs on a blocking thread since crossterm's reader blocks.
pub fn read_input(tx: mpsc::UnboundedSender<AppEvent>, poll_interval: Duration) {
    loop {
        if tx.is_closed() {
            break;
        }
        match event::poll(poll_interval) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if tx.send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read terminal event: {}", e);
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                warn!("Failed to poll terminal: {}", e);
                break;
            }
        }
    }
    debug!("Input reader stopped");
}

pub fn handle_event(app: &mut App, event: Event) {
    // Resize is handled by ratatui on the next draw
    if let Event::Key(key) = event {
        handle_key(app, key);
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only handle key press events (not release)
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    let outcome = match &mut app.page {
        Page::Splash => handle_splash(key.code),
        Page::MainMenu(menu) => handle_main_menu(menu, key.code),
        Page::Category(page) => handle_category(page, &app.catalog, key.code),
        Page::Filter(page) => handle_filter(page, key.code),
        Page::Chef(panel) => handle_chef(panel, &mut app.catalog, key),
    };

    match outcome {
        KeyOutcome::Handled => {}
        KeyOutcome::Navigate(action) => app.navigate(action),
        KeyOutcome::Quit => app.quit(),
    }
}

fn handle_splash(code: KeyCode) -> KeyOutcome {
    // The splash cannot be skipped, only abandoned
    match code {
        KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
        _ => KeyOutcome::Handled,
    }
}

fn handle_main_menu(menu: &mut MainMenuState, code: KeyCode) -> KeyOutcome {
    match code {
        KeyCode::Up | KeyCode::Char('k') => {
            menu.up();
            KeyOutcome::Handled
        }
        KeyCode::Down | KeyCode::Char('j') => {
            menu.down();
            KeyOutcome::Handled
        }
        KeyCode::Enter => KeyOutcome::Navigate(menu.selected().action()),
        KeyCode::Char('1') => KeyOutcome::Navigate(NavAction::OpenCategory(Course::Starters)),
        KeyCode::Char('2') => KeyOutcome::Navigate(NavAction::OpenCategory(Course::MainMeal)),
        KeyCode::Char('3') => KeyOutcome::Navigate(NavAction::OpenCategory(Course::Desserts)),
        KeyCode::Char('f') => KeyOutcome::Navigate(MainMenuEntry::FilterAll.action()),
        KeyCode::Char('c') => KeyOutcome::Navigate(MainMenuEntry::ChefPanel.action()),
        KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
        _ => KeyOutcome::Handled,
    }
}

fn handle_category(page: &mut CategoryPage, catalog: &MenuCatalog, code: KeyCode) -> KeyOutcome {
    match code {
        KeyCode::Esc | KeyCode::Backspace => return KeyOutcome::Navigate(NavAction::Back),
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Tab => page.toggle_focus(),
        KeyCode::Up | KeyCode::Char('k') => page.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => {
            let count = page.dishes(catalog).len();
            page.cursor_down(count);
        }
        KeyCode::Char('o') => page.checkout(),
        KeyCode::Enter | KeyCode::Char('a') if page.focus == CategoryFocus::Dishes => {
            page.add_selected(catalog)
        }
        KeyCode::Char('+') | KeyCode::Char('=') => page.adjust_selected(1),
        KeyCode::Char('-') => page.adjust_selected(-1),
        KeyCode::Char('d') | KeyCode::Delete => page.remove_selected(),
        _ => {}
    }
    KeyOutcome::Handled
}

fn handle_filter(page: &mut FilterPage, code: KeyCode) -> KeyOutcome {
    match code {
        KeyCode::Esc | KeyCode::Backspace => return KeyOutcome::Navigate(NavAction::Back),
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => page.next_filter(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => page.prev_filter(),
        KeyCode::Char(c @ '0'..='3') => {
            let index = c as usize - '0' as usize;
            page.select(CourseFilter::ALL[index]);
        }
        KeyCode::Char('g') => page.grouped = !page.grouped,
        _ => {}
    }
    KeyOutcome::Handled
}

fn handle_chef(panel: &mut ChefPanel, catalog: &mut MenuCatalog, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Esc => return KeyOutcome::Navigate(NavAction::Back),
        KeyCode::Tab => {
            panel.focus = panel.focus.next();
            return KeyOutcome::Handled;
        }
        KeyCode::BackTab => {
            panel.focus = panel.focus.prev();
            return KeyOutcome::Handled;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            panel.save(catalog);
            return KeyOutcome::Handled;
        }
        _ => {}
    }

    match panel.focus {
        ChefFocus::List => match key.code {
            KeyCode::Up | KeyCode::Char('k') => panel.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => panel.cursor_down(catalog.len()),
            KeyCode::Enter | KeyCode::Char('e') => panel.edit_selected(catalog),
            KeyCode::Char('d') | KeyCode::Delete => panel.delete_selected(catalog),
            KeyCode::Char('n') => {
                panel.form.reset();
                panel.focus = ChefFocus::Field(FormField::Name);
            }
            KeyCode::Char('q') => return KeyOutcome::Quit,
            _ => {}
        },
        ChefFocus::Field(FormField::Course) => match key.code {
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
                panel.form.course = panel.form.course.next()
            }
            KeyCode::Left | KeyCode::Char('h') => panel.form.course = panel.form.course.prev(),
            KeyCode::Enter => panel.save(catalog),
            _ => {}
        },
        ChefFocus::Field(field) => match key.code {
            KeyCode::Enter => panel.save(catalog),
            KeyCode::Backspace => {
                if let Some(text) = panel.form.text_mut(field) {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = panel.form.text_mut(field) {
                    text.push(c);
                }
            }
            _ => {}
        },
    }
    KeyOutcome::Handled
}
