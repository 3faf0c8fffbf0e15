//! Alerts feed - fixed notifications and the category filter

use super::Tone;
use crate::error::CityError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Alert category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlertCategory {
    Traffic,
    Health,
    Weather,
    #[serde(rename = "Public Notice")]
    PublicNotice,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 4] = [
        AlertCategory::Traffic,
        AlertCategory::Health,
        AlertCategory::Weather,
        AlertCategory::PublicNotice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Traffic => "Traffic",
            Self::Health => "Health",
            Self::Weather => "Weather",
            Self::PublicNotice => "Public Notice",
        }
    }
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Alert priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::High => Tone::Destructive,
            Self::Medium => Tone::Warning,
            Self::Low => Tone::Success,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::High => "⚠",
            Self::Medium => "ℹ",
            Self::Low => "✔",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single notification in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: AlertCategory,
    pub priority: Priority,
    /// Display-only, e.g. "10 minutes ago"
    pub timestamp: String,
}

impl Alert {
    fn new(
        id: u32,
        title: &str,
        description: &str,
        category: AlertCategory,
        priority: Priority,
        timestamp: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            category,
            priority,
            timestamp: timestamp.to_string(),
        }
    }
}

/// The fixed alert list shown in the feed
pub fn mock_alerts() -> Vec<Alert> {
    use AlertCategory::*;
    use Priority::*;

    vec![
        Alert::new(
            1,
            "Heavy Traffic on Main Street",
            "Major congestion reported due to road construction. Consider alternate routes.",
            Traffic,
            High,
            "10 minutes ago",
        ),
        Alert::new(
            2,
            "Air Quality Alert",
            "AQI levels are moderate. Sensitive groups should limit outdoor activities.",
            Health,
            Medium,
            "1 hour ago",
        ),
        Alert::new(
            3,
            "Thunderstorm Warning",
            "Severe thunderstorms expected this evening. Stay indoors if possible.",
            Weather,
            High,
            "2 hours ago",
        ),
        Alert::new(
            4,
            "Community Meeting Scheduled",
            "Town hall meeting on urban development plans scheduled for next week.",
            PublicNotice,
            Low,
            "3 hours ago",
        ),
        Alert::new(
            5,
            "Water Supply Maintenance",
            "Scheduled water supply interruption in Zone 3 from 9 AM to 2 PM tomorrow.",
            PublicNotice,
            Medium,
            "5 hours ago",
        ),
        Alert::new(
            6,
            "Vaccination Drive",
            "Free vaccination camp at City Health Center this weekend.",
            Health,
            Medium,
            "1 day ago",
        ),
    ]
}

/// Category selection: everything, or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(AlertCategory),
}

impl CategoryFilter {
    /// Filter buttons in display order
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(AlertCategory::Traffic),
        CategoryFilter::Only(AlertCategory::Health),
        CategoryFilter::Only(AlertCategory::Weather),
        CategoryFilter::Only(AlertCategory::PublicNotice),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, alert: &Alert) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => alert.category == *category,
        }
    }

    fn position(&self) -> usize {
        Self::OPTIONS.iter().position(|o| o == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::OPTIONS[(self.position() + 1) % Self::OPTIONS.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::OPTIONS.len();
        Self::OPTIONS[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = CityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Self::OPTIONS
            .iter()
            .copied()
            .find(|o| o.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| CityError::UnknownCategory(s.to_string()))
    }
}

/// Filter alerts by category, preserving source order
pub fn filter_alerts(alerts: &[Alert], filter: CategoryFilter) -> Vec<&Alert> {
    alerts.iter().filter(|a| filter.matches(a)).collect()
}

/// State owned by the Alerts view
#[derive(Debug, Clone)]
pub struct AlertsState {
    alerts: Vec<Alert>,
    selected: CategoryFilter,
}

impl Default for AlertsState {
    fn default() -> Self {
        Self::new(mock_alerts())
    }
}

impl AlertsState {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self {
            alerts,
            selected: CategoryFilter::All,
        }
    }

    pub fn set_selected_category(&mut self, filter: CategoryFilter) {
        if self.selected != filter {
            log::debug!("Alert filter: {} -> {}", self.selected, filter);
        }
        self.selected = filter;
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.selected
    }

    /// Alerts matching the current selection
    pub fn visible(&self) -> Vec<&Alert> {
        filter_alerts(&self.alerts, self.selected)
    }

    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn select_next(&mut self) {
        self.set_selected_category(self.selected.next());
    }

    pub fn select_prev(&mut self) {
        self.set_selected_category(self.selected.prev());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_unique() {
        let alerts = mock_alerts();
        let ids: HashSet<u32> = alerts.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), alerts.len());
        assert_eq!(alerts.len(), 6);
    }

    #[test]
    fn test_all_returns_full_list() {
        let state = AlertsState::default();
        let visible: Vec<u32> = state.visible().iter().map(|a| a.id).collect();
        assert_eq!(visible, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_by_each_category() {
        let alerts = mock_alerts();
        for category in AlertCategory::ALL {
            let filtered = filter_alerts(&alerts, CategoryFilter::Only(category));
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|a| a.category == category));
        }
    }

    #[test]
    fn test_union_of_categories_recovers_order() {
        let alerts = mock_alerts();
        let mut ids: Vec<u32> = AlertCategory::ALL
            .iter()
            .flat_map(|c| filter_alerts(&alerts, CategoryFilter::Only(*c)))
            .map(|a| a.id)
            .collect();
        ids.sort_unstable();
        let all: Vec<u32> = alerts.iter().map(|a| a.id).collect();
        assert_eq!(ids, all);
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let state = {
            let mut s = AlertsState::default();
            s.set_selected_category(CategoryFilter::Only(AlertCategory::PublicNotice));
            s
        };
        let ids: Vec<u32> = state.visible().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn test_empty_result() {
        let mut state = AlertsState::new(vec![mock_alerts().remove(0)]);
        state.set_selected_category(CategoryFilter::Only(AlertCategory::Weather));
        assert!(state.visible().is_empty());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "public-notice".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(AlertCategory::PublicNotice)
        );
        assert!("sports".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_cycle_filters() {
        let mut state = AlertsState::default();
        state.select_prev();
        assert_eq!(
            state.selected_category(),
            CategoryFilter::Only(AlertCategory::PublicNotice)
        );
        state.select_next();
        assert_eq!(state.selected_category(), CategoryFilter::All);
    }
}
