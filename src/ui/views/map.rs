//! City map view - zone canvas, legend and detail panel

use crate::core::{zone_tone, MapState, Zone, MAP_EXTENT};
use crate::ui::layout;
use crate::ui::theme::{self, tone_color};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as GridLine, Rectangle},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

/// Grid spacing in map units
const GRID_STEP: f64 = 10.0;

/// Render the city map
pub fn render_map_view(f: &mut Frame, state: &MapState, area: Rect) {
    let (map_area, side_area) = layout::map_columns(area);

    render_canvas(f, state, map_area);

    let legend_height = state.categories().len() as u16 + 2;
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(legend_height), Constraint::Min(0)])
        .split(side_area);

    render_legend(f, state, side[0]);
    match state.selected_zone() {
        Some(zone) => render_details(f, zone, side[1]),
        None => render_hint(f, side[1]),
    }
}

fn render_canvas(f: &mut Frame, state: &MapState, area: Rect) {
    let inner_width = area.width.saturating_sub(2).max(1);
    // map units covered by one terminal column
    let cell_width = MAP_EXTENT / f64::from(inner_width);
    let selected = state.selected_zone().map(|z| z.id);
    let cursor = state.cursor_zone().map(|z| z.id);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Interactive City Map ", theme::title())),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, MAP_EXTENT])
        .y_bounds([0.0, MAP_EXTENT])
        .paint(move |ctx| {
            let mut step = 0.0;
            while step <= MAP_EXTENT {
                ctx.draw(&GridLine {
                    x1: step,
                    y1: 0.0,
                    x2: step,
                    y2: MAP_EXTENT,
                    color: Color::Rgb(40, 40, 40),
                });
                ctx.draw(&GridLine {
                    x1: 0.0,
                    y1: step,
                    x2: MAP_EXTENT,
                    y2: step,
                    color: Color::Rgb(40, 40, 40),
                });
                step += GRID_STEP;
            }
            ctx.layer();

            for zone in state.zones() {
                let b = &zone.bounds;
                let is_selected = selected == Some(zone.id);
                let color = if is_selected {
                    Color::White
                } else {
                    tone_color(zone.tone())
                };
                // canvas y grows upwards
                ctx.draw(&Rectangle {
                    x: b.x,
                    y: MAP_EXTENT - b.y - b.height,
                    width: b.width,
                    height: b.height,
                    color,
                });
            }
            ctx.layer();

            for zone in state.zones() {
                let marker = if cursor == Some(zone.id) { "▶ " } else { "" };
                let label = fit(&format!("{}{}", marker, zone.name), zone.bounds.width / cell_width);
                let (cx, cy) = zone.bounds.center();
                let x = cx - label.chars().count() as f64 * cell_width / 2.0;

                let mut style = Style::default().fg(tone_color(zone.tone()));
                if selected == Some(zone.id) {
                    style = style.fg(Color::White).add_modifier(Modifier::BOLD);
                }
                ctx.print(x, MAP_EXTENT - cy, Line::styled(label, style));
            }
        });

    f.render_widget(canvas, area);
}

fn render_legend(f: &mut Frame, state: &MapState, area: Rect) {
    let lines: Vec<Line> = state
        .categories()
        .into_iter()
        .map(|category| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(tone_color(zone_tone(category)))),
                Span::styled(category.to_string(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let legend = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Zone Types"));
    f.render_widget(legend, area);
}

fn render_details(f: &mut Frame, zone: &Zone, area: Rect) {
    let heading = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled("📍 Category", heading),
        Line::from(zone.category.clone()),
        Line::from(""),
        Line::styled(zone.description.clone(), Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled("📞 Contact", heading),
        Line::from(zone.contact.clone()),
        Line::from(""),
        Line::styled("🕒 Hours", heading),
        Line::from(zone.hours.clone()),
    ];

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tone_color(zone.tone())))
                .title(Span::styled(format!(" {} ", zone.name), theme::title()))
                .title_bottom(Span::styled(" Esc/x: close ", theme::muted())),
        );
    f.render_widget(details, area);
}

fn render_hint(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new("Click on any zone to view detailed information")
        .wrap(Wrap { trim: true })
        .style(theme::muted())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(hint, area);
}

/// Cut a label to `max` columns
fn fit(label: &str, max: f64) -> String {
    let max = max.floor().max(1.0) as usize;
    if label.chars().count() <= max {
        label.to_string()
    } else {
        let cut: String = label.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
