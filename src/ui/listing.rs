//! Filter-by-course view and the grouped menu listing

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use super::Theme;
use crate::app::{App, FilterPage};
use crate::menu::{group_by_course, CourseFilter, MenuItem};

pub fn render(frame: &mut Frame, area: Rect, app: &App, page: &FilterPage, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let selected = CourseFilter::ALL
        .iter()
        .position(|f| *f == page.filter)
        .unwrap_or(0);
    let tabs = Tabs::new(CourseFilter::ALL.iter().map(|f| f.label()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(" Course "),
        )
        .style(theme.normal)
        .highlight_style(theme.selected)
        .select(selected);
    frame.render_widget(tabs, rows[0]);

    let results = page.results(&app.catalog);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(format!(" {} ({}) ", page.filter.label(), results.len()))
        .title_style(theme.title);

    let lines = if results.is_empty() {
        vec![Line::styled("No items found.", theme.muted)]
    } else if page.grouped {
        grouped_lines(app, &results, theme)
    } else {
        results
            .iter()
            .flat_map(|item| item_lines(app, item, true, theme))
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rows[1],
    );
}

/// Dishes under one heading per course, courses in first-seen order
fn grouped_lines<'a>(app: &App, items: &[&'a MenuItem], theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (course, dishes) in group_by_course(items.iter().copied()) {
        lines.push(Line::styled(course.label(), theme.course(course)));
        for dish in dishes {
            lines.extend(item_lines(app, dish, false, theme));
        }
        lines.push(Line::raw(""));
    }
    lines
}

fn item_lines<'a>(app: &App, item: &'a MenuItem, show_course: bool, theme: &Theme) -> Vec<Line<'a>> {
    let mut heading = vec![
        Span::styled(item.name.as_str(), theme.normal),
        Span::raw("  "),
        Span::styled(app.money(item.price), theme.price),
    ];
    if show_course {
        heading.push(Span::raw("  "));
        heading.push(Span::styled(format!("Course: {}", item.course), theme.course(item.course)));
    }

    vec![
        Line::from(heading),
        Line::styled(format!("  {}", item.description), theme.muted),
    ]
}
