//! Terminal rendering. Every screen is a pure function of `App`.

mod chef;
mod listing;
mod orders;
mod theme;

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, MainMenuEntry, MainMenuState, Page, Status};

pub use theme::Theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(format!(
        "  {} - {}",
        app.config.restaurant_name,
        app.screen().title()
    ))
    .style(theme.title)
    .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border));
    frame.render_widget(header, chunks[0]);

    // Content based on current page
    let hints: &[(&str, &str)] = match &app.page {
        Page::Splash => {
            render_splash(frame, chunks[1], app, &theme);
            &[("q", "Quit")]
        }
        Page::MainMenu(menu) => {
            render_main_menu(frame, chunks[1], menu, &theme);
            &[("↑/↓", "Navigate"), ("Enter", "Select"), ("1-3", "Course"), ("f", "Filter"), ("c", "Chef"), ("q", "Quit")]
        }
        Page::Category(page) => {
            orders::render(frame, chunks[1], app, page, &theme);
            &[("↑/↓", "Move"), ("Enter", "Add"), ("Tab", "Dishes/Order"), ("+/-", "Qty"), ("d", "Remove"), ("o", "Checkout"), ("Esc", "Back")]
        }
        Page::Filter(page) => {
            listing::render(frame, chunks[1], app, page, &theme);
            &[("←/→", "Course"), ("0-3", "Pick"), ("g", "Group"), ("Esc", "Back")]
        }
        Page::Chef(panel) => {
            chef::render(frame, chunks[1], app, panel, &theme);
            &[("Tab", "Next field"), ("Enter", "Save"), ("e", "Edit"), ("d", "Delete"), ("n", "New"), ("Esc", "Back")]
        }
    };

    // Footer
    let footer = Paragraph::new(key_hints(hints, &theme))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(theme.border));
    frame.render_widget(footer, chunks[2]);
}

fn key_hints<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {key} "), theme.key_hint));
        spans.push(Span::styled(*label, theme.muted));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn status_line<'a>(status: Option<&'a Status>, theme: &Theme) -> Paragraph<'a> {
    match status {
        Some(status) => {
            let style = if status.is_error { theme.danger } else { theme.success };
            Paragraph::new(status.text.as_str()).style(style)
        }
        None => Paragraph::new(""),
    }
}

fn render_splash(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(3), // Title
            Constraint::Length(1),
            Constraint::Length(1), // Progress
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::styled(format!("Welcome to {}", app.config.restaurant_name), theme.title),
        Line::raw(""),
        Line::styled("Preparing the menu...", theme.muted),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    let delay = app.config.splash_delay().as_secs_f64();
    let remaining = app.navigator().splash_remaining(Instant::now()).as_secs_f64();
    let ratio = if delay > 0.0 {
        (1.0 - remaining / delay).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let gauge = Gauge::default()
        .gauge_style(theme.focused_border)
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, centered(rows[3], 40));
}

fn render_main_menu(frame: &mut Frame, area: Rect, menu: &MainMenuState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(" What would you like? ")
        .title_style(theme.title);

    let items: Vec<ListItem> = MainMenuEntry::ALL
        .iter()
        .map(|entry| {
            let style = match entry {
                MainMenuEntry::Course(course) => theme.course(*course),
                MainMenuEntry::FilterAll => theme.normal,
                MainMenuEntry::ChefPanel => theme.key_hint,
            };
            ListItem::new(format!("  {}  ", entry.label())).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected)
        .highlight_symbol("▸ ");
    let mut state = ListState::default().with_selected(Some(menu.cursor));
    frame.render_stateful_widget(list, centered(area, 40), &mut state);
}

/// Horizontally centered strip of at most `width` columns
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
