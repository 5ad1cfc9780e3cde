//! Category page: dish list on the left, order summary on the right

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{status_line, Theme};
use crate::app::{App, CategoryFocus, CategoryPage};

pub fn render(frame: &mut Frame, area: Rect, app: &App, page: &CategoryPage, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_dishes(frame, columns[0], app, page, theme);
    render_order(frame, columns[1], app, page, theme);
}

fn render_dishes(frame: &mut Frame, area: Rect, app: &App, page: &CategoryPage, theme: &Theme) {
    let dishes = page.dishes(&app.catalog);
    let mut title = format!(" {} ", page.course);
    if page.showing_defaults(&app.catalog) {
        title.push_str("(house selection) ");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_for(page.focus == CategoryFocus::Dishes))
        .title(title)
        .title_style(theme.course(page.course));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(block.inner(area));
    frame.render_widget(block, area);

    if dishes.is_empty() {
        let empty = Paragraph::new("No dishes available.").style(theme.muted);
        frame.render_widget(empty, rows[0]);
    } else {
        let items: Vec<ListItem> = dishes
            .iter()
            .map(|dish| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(dish.name.as_str(), theme.normal),
                        Span::raw("  "),
                        Span::styled(app.money(dish.price), theme.price),
                    ]),
                    Line::styled(format!("  {}", dish.description), theme.muted),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme.selected)
            .highlight_symbol("▸ ");
        let mut state = ListState::default().with_selected(Some(page.dish_cursor));
        frame.render_stateful_widget(list, rows[0], &mut state);
    }

    frame.render_widget(status_line(page.status.as_ref(), theme), rows[1]);
}

fn render_order(frame: &mut Frame, area: Rect, app: &App, page: &CategoryPage, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_for(page.focus == CategoryFocus::Cart))
        .title(format!(" Order Summary ({} items) ", page.cart.item_count()))
        .title_style(theme.title);

    if let Some(receipt) = &page.receipt {
        let mut lines = vec![
            Line::styled("Order placed!", theme.success),
            Line::raw(format!("at {}", receipt.placed_at.format("%H:%M"))),
            Line::raw(""),
        ];
        lines.extend(receipt.lines.iter().map(|line| {
            Line::raw(format!(
                "{} x{}  {}",
                line.item.name,
                line.quantity,
                app.money(line.total())
            ))
        }));
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("Total: {}", app.money(receipt.total)),
            theme.price,
        ));
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(block.inner(area));
    frame.render_widget(block, area);

    if page.cart.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing ordered yet.").style(theme.muted),
            rows[0],
        );
        return;
    }

    let items: Vec<ListItem> = page
        .cart
        .lines()
        .iter()
        .map(|line| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", line.item.name), theme.normal),
                Span::styled(format!("x{} ", line.quantity), theme.key_hint),
                Span::styled(app.money(line.total()), theme.price),
            ]))
        })
        .collect();
    let mut list = List::new(items);
    let mut state = ListState::default();
    if page.focus == CategoryFocus::Cart {
        list = list.highlight_style(theme.selected).highlight_symbol("▸ ");
        state.select(Some(page.cart_cursor));
    }
    frame.render_stateful_widget(list, rows[0], &mut state);

    let total = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(format!("Total: {}", app.money(page.cart.total())), theme.price),
    ]);
    frame.render_widget(total, rows[1]);
}
