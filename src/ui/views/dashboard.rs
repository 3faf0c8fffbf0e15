//! Dashboard view - city metrics and live clock

use crate::core::{DashboardState, TrafficLevel};
use crate::ui::theme::{self, tone_color};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the dashboard
pub fn render_dashboard_view(f: &mut Frame, state: &DashboardState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + clock
            Constraint::Length(6), // Metric cards
            Constraint::Length(6), // Traffic
            Constraint::Length(4), // Quick stats
            Constraint::Min(0),
        ])
        .split(area);

    render_header(f, state, chunks[0]);
    render_metric_cards(f, state, chunks[1]);
    render_traffic(f, state, chunks[2]);
    render_quick_stats(f, state, chunks[3]);
}

fn render_header(f: &mut Frame, state: &DashboardState, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::raw("🕒 "),
        Span::styled(state.clock_text(), Style::default().fg(Color::Gray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" City Dashboard ", theme::title())),
    );

    f.render_widget(header, area);
}

fn render_metric_cards(f: &mut Frame, state: &DashboardState, area: Rect) {
    let metrics = &state.metrics;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let temperature = Paragraph::new(vec![
        big_value(format!("{}°C", metrics.temperature), Color::White),
        Line::from(""),
        Line::styled(format!("💧 Humidity: {}%", metrics.humidity), theme::muted()),
    ])
    .block(live_card("☁ Temperature"));
    f.render_widget(temperature, cards[0]);

    render_aqi_card(f, state, cards[1]);

    let wind = Paragraph::new(vec![
        big_value(metrics.wind_speed.to_string(), Color::White),
        Line::from(""),
        Line::styled("km/h", theme::muted()),
    ])
    .block(live_card("🌬 Wind Speed"));
    f.render_widget(wind, cards[2]);
}

fn render_aqi_card(f: &mut Frame, state: &DashboardState, area: Rect) {
    let aqi = state.metrics.aqi;
    let level = state.metrics.aqi_level();
    let color = tone_color(level.tone());

    let block = live_card("📈 Air Quality Index");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(big_value(aqi.to_string(), Color::White)), rows[0]);

    // bar saturates at 100
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .percent(aqi.min(100) as u16)
        .label("");
    f.render_widget(gauge, rows[1]);

    f.render_widget(
        Paragraph::new(Line::styled(level.label(), Style::default().fg(color))),
        rows[2],
    );
}

fn render_traffic(f: &mut Frame, state: &DashboardState, area: Rect) {
    let density = state.metrics.traffic_density;
    let level = state.metrics.traffic_level();

    let block = card("🚗 Traffic Density · Real-time traffic monitoring");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let current = Line::from(vec![
        Span::raw("Current Density  "),
        Span::styled(
            format!("{}%", density),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({})", level), Style::default().fg(tone_color(level.tone()))),
    ]);
    f.render_widget(Paragraph::new(current), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(tone_color(level.tone()))
                .bg(Color::DarkGray),
        )
        .percent(density.min(100) as u16)
        .label(format!("{}%", density));
    f.render_widget(gauge, rows[1]);

    let legend: Vec<Span> = TrafficLevel::ALL
        .iter()
        .flat_map(|l| {
            [
                Span::styled("● ", Style::default().fg(tone_color(l.tone()))),
                Span::styled(format!("{}    ", l.range_label()), theme::muted()),
            ]
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(legend)).alignment(Alignment::Center),
        rows[2],
    );
}

fn render_quick_stats(f: &mut Frame, state: &DashboardState, area: Rect) {
    let metrics = &state.metrics;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let stats = [
        ("Active Alerts", metrics.active_alerts, Color::Yellow),
        ("Public Facilities", metrics.public_facilities, Color::Green),
        ("Service Requests", metrics.service_requests, Color::LightBlue),
    ];

    for ((label, value, color), cell) in stats.into_iter().zip(cells.iter()) {
        let widget = Paragraph::new(big_value(value.to_string(), color)).block(card(label));
        f.render_widget(widget, *cell);
    }
}

fn card(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", title), Style::default().fg(Color::Gray)))
}

/// Card for a sensor-backed metric
fn live_card(title: &str) -> Block<'static> {
    card(title).title(Title::from(Span::styled(" Live ", theme::muted())).alignment(Alignment::Right))
}

fn big_value(text: String, color: Color) -> Line<'static> {
    Line::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
}
