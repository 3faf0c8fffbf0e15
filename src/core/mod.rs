//! Core domain - fixtures, per-view state and the rules that drive it

mod alerts;
mod feedback;
mod metrics;
mod navigation;
mod tone;
mod zones;

pub use alerts::{filter_alerts, mock_alerts, Alert, AlertCategory, AlertsState, CategoryFilter, Priority};
pub use feedback::{validate_form, FeedbackState, FormData, FormErrors, FormField, FormPhase};
pub use metrics::{AqiLevel, CityMetrics, DashboardState, TrafficLevel};
pub use navigation::View;
pub use tone::Tone;
pub use zones::{mock_zones, zone_tone, MapState, Zone, ZoneBounds, MAP_EXTENT};
