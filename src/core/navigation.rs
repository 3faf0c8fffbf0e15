//! Navigation - the fixed set of in-app routes

use crate::error::CityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One screen of the application, addressed by a static path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum View {
    #[default]
    Dashboard,
    Alerts,
    CityMap,
    Feedback,
}

impl View {
    /// All views in link-bar order
    pub const ALL: [View; 4] = [View::Dashboard, View::Alerts, View::CityMap, View::Feedback];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Alerts => "/alerts",
            Self::CityMap => "/map",
            Self::Feedback => "/feedback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Alerts => "Alerts",
            Self::CityMap => "City Map",
            Self::Feedback => "Feedback",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Dashboard => "🏠",
            Self::Alerts => "🔔",
            Self::CityMap => "🗺",
            Self::Feedback => "💬",
        }
    }

    /// Position in the link bar
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    /// View at a link-bar position (wraps around)
    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx % Self::ALL.len()]
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    /// Resolve a route path such as `/alerts`
    pub fn from_path(path: &str) -> Result<Self, CityError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.path() == path)
            .ok_or_else(|| CityError::UnknownView(path.to_string()))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts a path (`/map`) or a short name (`map`, `city-map`, `Dashboard`)
impl FromStr for View {
    type Err = CityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('/') {
            return Self::from_path(trimmed);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "dashboard" | "home" => Ok(Self::Dashboard),
            "alerts" => Ok(Self::Alerts),
            "map" | "city-map" | "city map" | "citymap" => Ok(Self::CityMap),
            "feedback" => Ok(Self::Feedback),
            _ => Err(CityError::UnknownView(s.to_string())),
        }
    }
}

impl TryFrom<String> for View {
    type Error = CityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<View> for String {
    fn from(view: View) -> Self {
        view.path().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_path(view.path()).unwrap(), view);
        }
    }

    #[test]
    fn test_unknown_path() {
        assert!(matches!(
            View::from_path("/nowhere"),
            Err(CityError::UnknownView(p)) if p == "/nowhere"
        ));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("map".parse::<View>().unwrap(), View::CityMap);
        assert_eq!("Dashboard".parse::<View>().unwrap(), View::Dashboard);
        assert_eq!("/feedback".parse::<View>().unwrap(), View::Feedback);
        assert!("settings".parse::<View>().is_err());
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(View::Feedback.next(), View::Dashboard);
        assert_eq!(View::Dashboard.prev(), View::Feedback);
        assert_eq!(View::Alerts.next(), View::CityMap);
    }
}
