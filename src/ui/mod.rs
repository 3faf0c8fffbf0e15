//! UI layer - terminal controller, event loop and views

pub mod layout;
pub mod theme;
pub mod views;

use crate::app::{App, AppEvent};
use crate::clock::ClockMount;
use crate::core::View;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{CrosstermBackend, TestBackend},
    layout::Rect,
    Frame, Terminal,
};
use std::io;
use tokio::sync::mpsc;

/// Render one full frame: navigation, current view, footer
pub fn draw(f: &mut Frame, app: &App) {
    let screen = layout::screen(f.area());

    views::render_navigation(f, app.view, screen.nav);
    match app.view {
        View::Dashboard => views::render_dashboard_view(f, &app.dashboard, screen.body),
        View::Alerts => views::render_alerts_view(f, &app.alerts, screen.body),
        View::CityMap => views::render_map_view(f, &app.map, screen.body),
        View::Feedback => views::render_feedback_view(f, &app.feedback, screen.body),
    }
    views::render_footer(f, app, screen.footer);
}

/// Draw one frame off-screen and return it as plain text
pub fn render_snapshot(app: &App, width: u16, height: u16) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| draw(f, app))?;

    let buffer = terminal.backend().buffer();
    let lines: Vec<String> = buffer
        .content
        .chunks(buffer.area.width.max(1) as usize)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Main TUI controller
pub struct TUI {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    mouse: bool,
}

impl TUI {
    /// Take over the terminal
    pub fn new(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, mouse })
    }

    /// Run until the user quits.
    ///
    /// Each pass mounts or unmounts the dashboard clock, applies pending
    /// background events, redraws, then waits briefly for input.
    pub fn run(
        &mut self,
        app: &mut App,
        events: &mut mpsc::UnboundedReceiver<AppEvent>,
        clock: &mut ClockMount,
    ) -> Result<()> {
        loop {
            clock.sync(app.dashboard_mounted());

            while let Ok(event) = events.try_recv() {
                app.process_event(event);
            }

            self.terminal.draw(|f| draw(f, app))?;

            if app.should_quit {
                break;
            }

            if App::should_poll_input()? {
                match App::read_event()? {
                    Event::Key(key) => app.handle_key(key),
                    Event::Mouse(mouse) => {
                        let size = self.terminal.size()?;
                        app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                    }
                    _ => {}
                }
            }
        }

        clock.sync(false);
        Ok(())
    }
}

impl Drop for TUI {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        if self.mouse {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = self.terminal.show_cursor();
    }
}
