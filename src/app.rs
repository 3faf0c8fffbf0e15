//! Application state and input handling

use crate::core::{AlertsState, DashboardState, FeedbackState, FormField, MapState, View};
use crate::ui::layout::{self, FeedbackTarget};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Duration;

/// Events delivered to the UI loop from background tasks
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Dashboard clock tick
    Tick(DateTime<Local>),
}

/// Application state: the current view plus each view's own state
pub struct App {
    pub view: View,
    pub dashboard: DashboardState,
    pub alerts: AlertsState,
    pub map: MapState,
    pub feedback: FeedbackState,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(View::Dashboard)
    }
}

impl App {
    /// Create a new app showing `start_view`
    pub fn new(start_view: View) -> Self {
        Self {
            view: start_view,
            dashboard: DashboardState::default(),
            alerts: AlertsState::default(),
            map: MapState::default(),
            feedback: FeedbackState::default(),
            should_quit: false,
        }
    }

    /// Navigate to another view
    pub fn switch_view(&mut self, view: View) {
        if self.view != view {
            log::info!("Navigate: {} -> {}", self.view.path(), view.path());
            self.view = view;
        }
    }

    /// Whether the dashboard (and so its clock) is on screen
    pub fn dashboard_mounted(&self) -> bool {
        self.view == View::Dashboard && !self.should_quit
    }

    /// Keystrokes go into a form field
    pub fn is_text_entry(&self) -> bool {
        self.view == View::Feedback
            && self.feedback.focused().is_some()
            && !self.feedback.is_confirmation_open()
    }

    /// Apply an event from a background task
    pub fn process_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick(now) => self.dashboard.on_tick(now),
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        if self.is_text_entry() {
            self.handle_form_key(key);
            return;
        }

        if self.view == View::Feedback && self.feedback.is_confirmation_open() {
            // modal: only closing is possible
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q')
            ) {
                self.feedback.close_confirmation();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.switch_view(self.view.next());
                return;
            }
            KeyCode::BackTab => {
                self.switch_view(self.view.prev());
                return;
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.switch_view(View::from_index(c as usize - '1' as usize));
                return;
            }
            _ => {}
        }

        match self.view {
            View::Dashboard => {}
            View::Alerts => self.handle_alerts_key(key),
            View::CityMap => self.handle_map_key(key),
            View::Feedback => self.handle_feedback_key(key),
        }
    }

    /// Keys that work everywhere, even while typing. Returns true if consumed.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.switch_view(self.view.next()),
            KeyCode::Char('p') if ctrl => self.switch_view(self.view.prev()),
            KeyCode::F(n @ 1..=4) => self.switch_view(View::from_index(n as usize - 1)),
            _ => return false,
        }
        true
    }

    fn handle_alerts_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.alerts.select_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.alerts.select_next(),
            _ => {}
        }
    }

    fn handle_map_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.map.move_cursor_toward(-1.0, 0.0),
            KeyCode::Right | KeyCode::Char('l') => self.map.move_cursor_toward(1.0, 0.0),
            KeyCode::Up | KeyCode::Char('k') => self.map.move_cursor_toward(0.0, -1.0),
            KeyCode::Down | KeyCode::Char('j') => self.map.move_cursor_toward(0.0, 1.0),
            KeyCode::Enter | KeyCode::Char(' ') => self.map.select_cursor(),
            KeyCode::Esc | KeyCode::Char('x') => self.map.close(),
            _ => {}
        }
    }

    /// Feedback view while no field is focused
    fn handle_feedback_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('i') | KeyCode::Down => {
                self.feedback.focus(Some(FormField::Name))
            }
            KeyCode::Up => self.feedback.focus(Some(FormField::Message)),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.feedback.focus(None),
            KeyCode::Tab | KeyCode::Down => self.feedback.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.feedback.focus_prev(),
            KeyCode::Enter => {
                self.feedback.submit();
            }
            KeyCode::Backspace => self.feedback.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.feedback.push_char(c)
            }
            _ => {}
        }
    }

    /// Handle mouse input; `screen` is the full terminal area
    pub fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(view) = layout::nav_hit(screen, mouse.column, mouse.row) {
            self.switch_view(view);
            return;
        }

        let (column, row) = (mouse.column, mouse.row);
        match self.view {
            View::Dashboard => {}
            View::Alerts => {
                if let Some(filter) = layout::filter_hit(screen, column, row) {
                    self.alerts.set_selected_category(filter);
                }
            }
            View::CityMap => {
                if let Some((x, y)) = layout::map_point(screen, column, row) {
                    self.map.click(x, y);
                }
            }
            View::Feedback if self.feedback.is_confirmation_open() => {
                // modal: a click anywhere dismisses it
                self.feedback.close_confirmation();
            }
            View::Feedback => match layout::feedback_hit(screen, column, row) {
                Some(FeedbackTarget::Field(field)) => self.feedback.focus(Some(field)),
                Some(FeedbackTarget::Submit) => {
                    self.feedback.submit();
                }
                None => {}
            },
        }
    }

    /// Check if we should poll for input
    pub fn should_poll_input() -> Result<bool> {
        Ok(event::poll(Duration::from_millis(100))?)
    }

    /// Get terminal event
    pub fn read_event() -> Result<Event> {
        Ok(event::read()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_navigation() {
        let mut app = App::default();
        app.handle_key(press(KeyCode::Char('3')));
        assert_eq!(app.view, View::CityMap);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.view, View::Feedback);
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.view, View::CityMap);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new(View::Feedback);
        app.handle_key(press(KeyCode::Enter));
        assert!(app.is_text_entry());
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::default();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_dashboard_mount_state() {
        let mut app = App::default();
        assert!(app.dashboard_mounted());
        app.switch_view(View::Alerts);
        assert!(!app.dashboard_mounted());
    }

    #[test]
    fn test_tick_updates_dashboard() {
        let mut app = App::default();
        let later = app.dashboard.now() + chrono::Duration::seconds(5);
        app.process_event(AppEvent::Tick(later));
        assert_eq!(app.dashboard.now(), later);
    }
}
