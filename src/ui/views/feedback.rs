//! Feedback view - citizen form, info panels and confirmation overlay

use crate::core::{FeedbackState, FormField};
use crate::ui::layout::{self, FeedbackRegions};
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the feedback form
pub fn render_feedback_view(f: &mut Frame, state: &FeedbackState, area: Rect) {
    let regions = layout::feedback_regions(area);

    render_form(f, state, &regions);
    render_info(f, regions.info);

    if state.is_confirmation_open() {
        render_confirmation(f, area);
    }
}

fn render_form(f: &mut Frame, state: &FeedbackState, regions: &FeedbackRegions) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Feedback & Citizen Connect ", theme::title()));
    f.render_widget(block, regions.form);

    f.render_widget(
        Paragraph::new(Line::styled(
            "Share your thoughts and help us improve our city services",
            theme::muted(),
        )),
        regions.intro,
    );

    for (field, row) in FormField::ALL.into_iter().zip(regions.fields) {
        render_field(f, state, field, row);
    }

    let submit = Paragraph::new(Line::styled(
        "[ Submit Feedback ]",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(submit, regions.submit);
}

fn render_field(f: &mut Frame, state: &FeedbackState, field: FormField, area: Rect) {
    let focused = state.focused() == Some(field);
    let error = state.errors().get(field);
    let value = state.data().get(field);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    f.render_widget(
        Paragraph::new(Line::styled(format!("{} {}", field.icon(), field.label()), label_style)),
        rows[0],
    );

    let border = if error.is_some() {
        Color::Red
    } else if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let text = if value.is_empty() && !focused {
        Line::styled(field.placeholder(), theme::muted())
    } else if focused {
        Line::from(format!("{}▏", value))
    } else {
        Line::from(value.to_string())
    };

    let input = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(input, rows[1]);

    if let Some(message) = error {
        f.render_widget(
            Paragraph::new(Line::styled(message.to_string(), Style::default().fg(Color::Red))),
            rows[2],
        );
    }
}

fn render_info(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(6)])
        .split(area);

    let point = |title: &'static str, text: &'static str, color: Color| {
        [
            Line::from(vec![
                Span::styled("✔ ", Style::default().fg(color)),
                Span::styled(title, theme::title()),
            ]),
            Line::styled(format!("  {}", text), theme::muted()),
        ]
    };

    let mut connect = vec![
        Line::styled(
            "Your feedback helps us build a better city. We're committed to listening to \
             our citizens and continuously improving our services.",
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
    ];
    connect.extend(point(
        "Quick Response",
        "We review all feedback within 24-48 hours",
        Color::Blue,
    ));
    connect.extend(point(
        "Action-Oriented",
        "Your suggestions directly influence city improvements",
        Color::Magenta,
    ));
    connect.extend(point(
        "Community Focus",
        "Building better services together with citizens",
        Color::LightBlue,
    ));

    f.render_widget(
        Paragraph::new(connect)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Connect With Us ")),
        rows[0],
    );

    let follow = Paragraph::new(vec![
        Line::styled(
            "Stay updated with the latest city news and announcements on social media.",
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::from("[ Twitter ] [ Facebook ] [ Instagram ] [ LinkedIn ]"),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(" Follow Us "));
    f.render_widget(follow, rows[1]);
}

fn render_confirmation(f: &mut Frame, area: Rect) {
    let popup = layout::centered(area, 56, 13);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::styled("✔", Style::default().fg(Color::Green)),
        Line::styled("Thank You!", theme::title()),
        Line::from(""),
        Line::styled(
            "Your feedback has been successfully submitted. We appreciate your input \
             and will review it shortly.",
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::styled("Connect with us on social media:", theme::title()),
        Line::from("[ @CityPulse ]  [ fb.com/citypulse ]"),
        Line::from(""),
        Line::styled("[ Close ]", theme::active()),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    f.render_widget(dialog, popup);
}
