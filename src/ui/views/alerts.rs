//! Alerts view - category filter buttons and the filtered feed

use crate::core::{Alert, AlertsState, CategoryFilter};
use crate::ui::layout;
use crate::ui::theme::{self, tone_color};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the alerts feed
pub fn render_alerts_view(f: &mut Frame, state: &AlertsState, area: Rect) {
    let (header_area, filter_area, feed_area) = layout::alerts_rows(area);

    let header = Paragraph::new(Line::styled(
        "Stay informed about important city updates and notifications",
        Style::default().fg(Color::Gray),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" City Alerts & News ", theme::title())),
    );
    f.render_widget(header, header_area);

    render_filters(f, state.selected_category(), filter_area);

    let visible = state.visible();
    if visible.is_empty() {
        render_empty(f, feed_area);
    } else {
        render_feed(f, &visible, feed_area);
    }
}

fn render_filters(f: &mut Frame, selected: CategoryFilter, area: Rect) {
    f.render_widget(
        Block::default().borders(Borders::ALL).title("Category (←→ or click)"),
        area,
    );

    for (option, rect) in layout::filter_buttons(area) {
        let style = if option == selected {
            theme::active()
        } else {
            Style::default().fg(Color::Gray)
        };
        f.render_widget(
            Paragraph::new(layout::filter_button_text(option)).style(style),
            rect,
        );
    }
}

fn render_feed(f: &mut Frame, alerts: &[&Alert], area: Rect) {
    let items: Vec<ListItem> = alerts.iter().map(|alert| alert_item(alert)).collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} alert(s)", alerts.len())),
    );
    f.render_widget(list, area);
}

fn alert_item(alert: &Alert) -> ListItem<'static> {
    let tone = alert.priority.tone();

    let heading = Line::from(vec![
        Span::styled(
            format!(" {} ", alert.priority.icon()),
            Style::default().fg(tone_color(tone)),
        ),
        Span::styled(alert.title.clone(), theme::title()),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", alert.category),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(format!(" {} ", alert.priority), theme::badge(tone)),
    ]);

    ListItem::new(vec![
        heading,
        Line::styled(format!("    {}", alert.description), Style::default().fg(Color::Gray)),
        Line::styled(format!("    🕒 {}", alert.timestamp), theme::muted()),
        Line::from(""),
    ])
}

fn render_empty(f: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new(vec![
        Line::from(""),
        Line::styled("✔", Style::default().fg(Color::Green)),
        Line::styled("No alerts in this category", theme::title()),
        Line::styled("Check back later for updates", theme::muted()),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(placeholder, area);
}
