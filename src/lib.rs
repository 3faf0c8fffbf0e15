//! CityPulse - municipal information dashboard for the terminal
//!
//! Four screens behind a navigation bar: live city metrics, a filterable
//! alerts feed, a clickable city map and a citizen feedback form. All data
//! is built in; nothing is fetched or stored.

pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod core;
pub mod error;
pub mod ui;

// Re-exports
pub use app::{App, AppEvent};
pub use clock::{ClockMount, ClockTimer};
pub use config::Config;
pub use crate::core::{
    validate_form, Alert, AlertCategory, CategoryFilter, FormData, FormErrors, FormField, View,
    Zone,
};
pub use error::CityError;

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
