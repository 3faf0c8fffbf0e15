//! Navigation bar and footer

use crate::app::App;
use crate::core::View;
use crate::ui::{layout, theme};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the link bar, highlighting the current view
pub fn render_navigation(f: &mut Frame, current: View, area: Rect) {
    f.render_widget(Block::default().borders(Borders::ALL), area);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled(
            " CP ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" CityPulse ", theme::title()),
    ]));
    if let Some(brand_area) = layout::brand_area(area) {
        f.render_widget(brand, brand_area);
    }

    for (view, rect) in layout::nav_links(area) {
        let style = if view == current {
            theme::active()
        } else {
            Style::default().fg(Color::Gray)
        };
        f.render_widget(Paragraph::new(layout::nav_link_text(view)).style(style), rect);
    }
}

/// Key help for the current view
pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.is_text_entry() {
        "Type to edit │ Tab/↑↓: Field │ Enter: Submit │ Esc: Stop editing │ Ctrl-C: Quit"
    } else {
        match app.view {
            View::Dashboard => "1-4/Tab: Switch view │ q: Quit",
            View::Alerts => "←→/click: Category │ 1-4/Tab: Switch view │ q: Quit",
            View::CityMap => {
                "←↑↓→: Move │ Enter/click: Details │ Esc: Close │ 1-4/Tab: Switch view │ q: Quit"
            }
            View::Feedback if app.feedback.is_confirmation_open() => "Enter/Esc: Close",
            View::Feedback => "Enter/click: Start editing │ 1-4/Tab: Switch view │ q: Quit",
        }
    };

    let footer = Paragraph::new(help)
        .block(Block::default().borders(Borders::ALL))
        .style(theme::muted());

    f.render_widget(footer, area);
}
