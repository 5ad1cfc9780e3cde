use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{status_line, Theme};
use crate::app::App;
use crate::chef::{ChefFocus, ChefPanel, FormField};

pub fn render(frame: &mut Frame, area: Rect, app: &App, panel: &ChefPanel, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_form(frame, columns[0], panel, theme);
    render_menu(frame, columns[1], app, panel, theme);
}

fn render_form(frame: &mut Frame, area: Rect, panel: &ChefPanel, theme: &Theme) {
    let title = if panel.form.editing().is_some() {
        " Update Dish "
    } else {
        " Add Dish "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_for(matches!(panel.focus, ChefFocus::Field(_))))
        .title(title)
        .title_style(theme.title);

    let mut constraints: Vec<Constraint> = FormField::ALL.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(1)); // Status
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(block.inner(area));
    frame.render_widget(block, area);

    for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
        let focused = panel.focus == ChefFocus::Field(*field);
        let value = match field {
            FormField::Name => panel.form.name.clone(),
            FormField::Course => format!("◂ {} ▸", panel.form.course),
            FormField::Price => panel.form.price.clone(),
            FormField::Description => panel.form.description.clone(),
        };
        let cursor = if focused && *field != FormField::Course { "▏" } else { "" };

        let input = Paragraph::new(Line::from(vec![
            Span::styled(value, theme.normal),
            Span::styled(cursor, theme.key_hint),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_for(focused))
                .title(field.label()),
        );
        frame.render_widget(input, *row);
    }

    frame.render_widget(
        status_line(panel.status.as_ref(), theme),
        rows[FormField::ALL.len()],
    );
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App, panel: &ChefPanel, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_for(panel.focus == ChefFocus::List))
        .title(format!(" Current Menu ({}) ", app.catalog.len()))
        .title_style(theme.title);

    if app.catalog.is_empty() {
        frame.render_widget(
            Paragraph::new("No dishes yet. Add some on the left!")
                .style(theme.muted)
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .catalog
        .iter()
        .map(|item| {
            let marker = if panel.form.editing() == Some(item.name.as_str()) {
                "✎ "
            } else {
                ""
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, theme.key_hint),
                    Span::styled(item.name.as_str(), theme.normal),
                    Span::raw("  "),
                    Span::styled(app.money(item.price), theme.price),
                    Span::raw("  "),
                    Span::styled(item.course.label(), theme.course(item.course)),
                ]),
                Line::styled(format!("  {}", item.description), theme.muted),
            ])
        })
        .collect();

    let mut list = List::new(items).block(block);
    let mut state = ListState::default();
    if panel.focus == ChefFocus::List {
        list = list.highlight_style(theme.selected).highlight_symbol("▸ ");
    }
    state.select(Some(panel.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
