//! Dashboard metrics snapshot and threshold classification

use super::Tone;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Fixed city snapshot shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityMetrics {
    /// Degrees Celsius
    pub temperature: i32,
    pub aqi: u32,
    /// Percent
    pub humidity: u32,
    /// km/h
    pub wind_speed: u32,
    /// Percent of road capacity
    pub traffic_density: u32,
    pub active_alerts: u32,
    pub public_facilities: u32,
    pub service_requests: u32,
}

impl Default for CityMetrics {
    fn default() -> Self {
        Self {
            temperature: 24,
            aqi: 68,
            humidity: 65,
            wind_speed: 12,
            traffic_density: 72,
            active_alerts: 3,
            public_facilities: 127,
            service_requests: 42,
        }
    }
}

impl CityMetrics {
    pub fn aqi_level(&self) -> AqiLevel {
        AqiLevel::classify(self.aqi)
    }

    pub fn traffic_level(&self) -> TrafficLevel {
        TrafficLevel::classify(self.traffic_density)
    }
}

/// Air-quality band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AqiLevel {
    Good,
    Moderate,
    Unhealthy,
}

impl AqiLevel {
    pub fn classify(aqi: u32) -> Self {
        match aqi {
            0..=50 => Self::Good,
            51..=100 => Self::Moderate,
            _ => Self::Unhealthy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Unhealthy => "Unhealthy",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Good => Tone::Success,
            Self::Moderate => Tone::Warning,
            Self::Unhealthy => Tone::Destructive,
        }
    }
}

impl fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Traffic density band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

impl TrafficLevel {
    pub const ALL: [TrafficLevel; 3] = [TrafficLevel::Low, TrafficLevel::Medium, TrafficLevel::High];

    pub fn classify(density: u32) -> Self {
        match density {
            0..=40 => Self::Low,
            41..=70 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Legend text, e.g. "Low (0-40%)"
    pub fn range_label(&self) -> &'static str {
        match self {
            Self::Low => "Low (0-40%)",
            Self::Medium => "Medium (41-70%)",
            Self::High => "High (71-100%)",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Low => Tone::Success,
            Self::Medium => Tone::Warning,
            Self::High => Tone::Destructive,
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State owned by the Dashboard view
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub metrics: CityMetrics,
    now: DateTime<Local>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(CityMetrics::default(), Local::now())
    }
}

impl DashboardState {
    pub fn new(metrics: CityMetrics, now: DateTime<Local>) -> Self {
        Self { metrics, now }
    }

    /// Advance the displayed clock
    pub fn on_tick(&mut self, now: DateTime<Local>) {
        self.now = now;
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// e.g. "Monday, October 19, 2026 • 3:04:05 PM"
    pub fn clock_text(&self) -> String {
        self.now.format("%A, %B %-d, %Y • %-I:%M:%S %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_aqi_boundaries() {
        assert_eq!(AqiLevel::classify(50), AqiLevel::Good);
        assert_eq!(AqiLevel::classify(50).tone(), Tone::Success);
        assert_eq!(AqiLevel::classify(51), AqiLevel::Moderate);
        assert_eq!(AqiLevel::classify(51).tone(), Tone::Warning);
        assert_eq!(AqiLevel::classify(100), AqiLevel::Moderate);
        assert_eq!(AqiLevel::classify(101), AqiLevel::Unhealthy);
        assert_eq!(AqiLevel::classify(101).tone(), Tone::Destructive);
    }

    #[test]
    fn test_traffic_boundaries() {
        assert_eq!(TrafficLevel::classify(40), TrafficLevel::Low);
        assert_eq!(TrafficLevel::classify(41), TrafficLevel::Medium);
        assert_eq!(TrafficLevel::classify(70), TrafficLevel::Medium);
        assert_eq!(TrafficLevel::classify(71), TrafficLevel::High);
    }

    #[test]
    fn test_default_snapshot() {
        let metrics = CityMetrics::default();
        assert_eq!(metrics.aqi_level(), AqiLevel::Moderate);
        assert_eq!(metrics.traffic_level(), TrafficLevel::High);
    }

    #[test]
    fn test_tick_updates_clock() {
        let start = Local.with_ymd_and_hms(2024, 3, 4, 9, 5, 7).unwrap();
        let mut state = DashboardState::new(CityMetrics::default(), start);
        assert_eq!(state.clock_text(), "Monday, March 4, 2024 • 9:05:07 AM");

        state.on_tick(start + chrono::Duration::seconds(1));
        assert_eq!(state.clock_text(), "Monday, March 4, 2024 • 9:05:08 AM");
        assert_eq!(state.metrics, CityMetrics::default());
    }
}
