//! Screen geometry shared by rendering and mouse hit-testing

use crate::core::{CategoryFilter, FormField, View, MAP_EXTENT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;

pub const BRAND: &str = " CP  CityPulse ";

/// Screen regions
pub struct Screen {
    pub nav: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn screen(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(0),    // Current view
            Constraint::Length(3), // Footer
        ])
        .split(area);

    Screen {
        nav: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Text of one navigation link
pub fn nav_link_text(view: View) -> String {
    format!(" {} {} ", view.icon(), view.label())
}

/// Brand badge inside the navigation bar; None when the bar has no inner row
pub fn brand_area(nav: Rect) -> Option<Rect> {
    let inner = inset(nav);
    if inner.height == 0 || inner.width == 0 {
        return None;
    }
    let width = (Span::raw(BRAND).width() as u16).min(inner.width);
    Some(Rect::new(inner.x, inner.y, width, 1))
}

/// Where each navigation link is drawn; links that do not fit are dropped
pub fn nav_links(nav: Rect) -> Vec<(View, Rect)> {
    let inner = inset(nav);
    let start = inner.x.saturating_add(Span::raw(BRAND).width() as u16 + 2);
    row_of_buttons(inner, start, View::ALL.map(|view| (view, nav_link_text(view))))
}

/// Navigation link under a terminal cell
pub fn nav_hit(area: Rect, column: u16, row: u16) -> Option<View> {
    hit(nav_links(screen(area).nav), column, row)
}

/// Alerts view: (header, filter strip, feed)
pub fn alerts_rows(body: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Filter buttons
            Constraint::Min(0),    // Feed
        ])
        .split(body);
    (chunks[0], chunks[1], chunks[2])
}

/// Text of one category filter button
pub fn filter_button_text(filter: CategoryFilter) -> String {
    format!(" {} ", filter.label())
}

/// Where each category filter button is drawn inside the filter strip
pub fn filter_buttons(strip: Rect) -> Vec<(CategoryFilter, Rect)> {
    let inner = inset(strip);
    row_of_buttons(
        inner,
        inner.x,
        CategoryFilter::OPTIONS.map(|filter| (filter, filter_button_text(filter))),
    )
}

/// Category filter button under a terminal cell (alerts view)
pub fn filter_hit(area: Rect, column: u16, row: u16) -> Option<CategoryFilter> {
    let (_, strip, _) = alerts_rows(screen(area).body);
    hit(filter_buttons(strip), column, row)
}

/// Feedback view regions
pub struct FeedbackRegions {
    pub form: Rect,
    pub info: Rect,
    pub intro: Rect,
    /// Name, Email, Message
    pub fields: [Rect; 3],
    pub submit: Rect,
}

pub fn feedback_regions(body: Rect) -> FeedbackRegions {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Intro
            Constraint::Length(5), // Name
            Constraint::Length(5), // Email
            Constraint::Length(7), // Message
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(inset(columns[0]));

    FeedbackRegions {
        form: columns[0],
        info: columns[1],
        intro: rows[0],
        fields: [rows[1], rows[2], rows[3]],
        submit: rows[4],
    }
}

/// Clickable parts of the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTarget {
    Field(FormField),
    Submit,
}

/// Form element under a terminal cell (feedback view)
pub fn feedback_hit(area: Rect, column: u16, row: u16) -> Option<FeedbackTarget> {
    let regions = feedback_regions(screen(area).body);
    if contains(regions.submit, column, row) {
        return Some(FeedbackTarget::Submit);
    }
    FormField::ALL
        .into_iter()
        .zip(regions.fields)
        .find(|(_, rect)| contains(*rect, column, row))
        .map(|(field, _)| FeedbackTarget::Field(field))
}

/// Lay out one-row buttons left to right from `start`, one cell apart.
/// Buttons that do not fit are dropped; nothing fits in a zero-height row.
fn row_of_buttons<T, const N: usize>(inner: Rect, start: u16, buttons: [(T, String); N]) -> Vec<(T, Rect)> {
    if inner.height == 0 {
        return Vec::new();
    }

    let right = inner.x.saturating_add(inner.width);
    let mut x = start;
    let mut placed = Vec::new();

    for (item, text) in buttons {
        let width = Span::raw(text).width() as u16;
        if x.saturating_add(width) > right {
            break;
        }
        placed.push((item, Rect::new(x, inner.y, width, 1)));
        x = x.saturating_add(width + 1);
    }
    placed
}

fn hit<T>(buttons: Vec<(T, Rect)>, column: u16, row: u16) -> Option<T> {
    buttons
        .into_iter()
        .find(|(_, rect)| contains(*rect, column, row))
        .map(|(item, _)| item)
}

/// City map view: (map panel, side panel)
pub fn map_columns(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(body);
    (chunks[0], chunks[1])
}

/// Drawable area of the map canvas (inside its border)
pub fn map_canvas(area: Rect) -> Rect {
    let (map, _) = map_columns(screen(area).body);
    inset(map)
}

/// Translate a terminal cell to map coordinates (0-100, y downwards)
pub fn map_point(area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    let canvas = map_canvas(area);
    if canvas.width == 0 || canvas.height == 0 || !contains(canvas, column, row) {
        return None;
    }

    let x = (f64::from(column - canvas.x) + 0.5) / f64::from(canvas.width) * MAP_EXTENT;
    let y = (f64::from(row - canvas.y) + 0.5) / f64::from(canvas.height) * MAP_EXTENT;
    Some((x, y))
}

/// Centered rectangle of at most `width` x `height`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Area inside a one-cell border
fn inset(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_do_not_overlap() {
        let links = nav_links(Rect::new(0, 0, 120, 3));
        assert_eq!(links.len(), 4);
        for pair in links.windows(2) {
            assert!(pair[0].1.x + pair[0].1.width < pair[1].1.x);
        }
    }

    #[test]
    fn test_narrow_nav_drops_links() {
        assert!(nav_links(Rect::new(0, 0, 30, 3)).len() < 4);
    }

    #[test]
    fn test_short_nav_has_no_links() {
        for height in 0..=2 {
            let nav = Rect::new(0, 0, 120, height);
            assert!(nav_links(nav).is_empty());
            assert!(brand_area(nav).is_none());
        }
        assert!(brand_area(Rect::new(0, 0, 120, 3)).is_some());
    }

    #[test]
    fn test_filter_buttons_hit() {
        let area = Rect::new(0, 0, 120, 40);
        let (_, strip, _) = alerts_rows(screen(area).body);
        let buttons = filter_buttons(strip);
        assert_eq!(buttons.len(), CategoryFilter::OPTIONS.len());

        let (filter, rect) = buttons[4];
        assert_eq!(filter_hit(area, rect.x + 1, rect.y), Some(filter));
        assert_eq!(filter_hit(area, rect.x, strip.y), None);
    }

    #[test]
    fn test_feedback_hit() {
        let area = Rect::new(0, 0, 120, 40);
        let regions = feedback_regions(screen(area).body);

        let email = regions.fields[1];
        assert_eq!(
            feedback_hit(area, email.x + 2, email.y + 2),
            Some(FeedbackTarget::Field(FormField::Email))
        );
        assert_eq!(
            feedback_hit(area, regions.submit.x + 1, regions.submit.y),
            Some(FeedbackTarget::Submit)
        );
        assert_eq!(feedback_hit(area, regions.info.x + 1, regions.info.y + 1), None);
    }

    #[test]
    fn test_nav_hit() {
        let area = Rect::new(0, 0, 120, 40);
        let (view, rect) = nav_links(screen(area).nav)[2];
        assert_eq!(nav_hit(area, rect.x, rect.y), Some(view));
        assert_eq!(nav_hit(area, 0, 20), None);
    }

    #[test]
    fn test_map_point_corners() {
        let area = Rect::new(0, 0, 100, 40);
        let canvas = map_canvas(area);

        let (x, y) = map_point(area, canvas.x, canvas.y).unwrap();
        assert!(x < 5.0 && y < 5.0);

        let (x, y) = map_point(area, canvas.x + canvas.width - 1, canvas.y + canvas.height - 1).unwrap();
        assert!(x > 95.0 && y > 95.0);

        assert!(map_point(area, 0, 0).is_none());
    }

    #[test]
    fn test_centered_clamps() {
        let rect = centered(Rect::new(0, 0, 20, 10), 50, 4);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }
}
