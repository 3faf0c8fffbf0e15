//! Command-line interface: TUI options and one-shot subcommands

use crate::app::App;
use crate::config::Config;
use crate::core::{
    validate_form, AlertsState, AqiLevel, CategoryFilter, CityMetrics, FormData, MapState,
    TrafficLevel, View,
};
use crate::ui;
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "citypulse", version, about = "Municipal information dashboard for the terminal")]
pub struct Cli {
    /// Config file (default: <config dir>/citypulse/config.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// View to open first: /, /alerts, /map, /feedback (or a name)
    #[arg(long)]
    pub view: Option<View>,

    /// Dashboard clock period in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the alerts feed
    Alerts {
        /// All, Traffic, Health, Weather or "Public Notice"
        #[arg(long, default_value = "All")]
        category: CategoryFilter,
        #[arg(long)]
        json: bool,
    },
    /// Print the city map zones
    Zones {
        #[arg(long)]
        json: bool,
    },
    /// Print the dashboard metrics
    Metrics {
        #[arg(long)]
        json: bool,
    },
    /// Validate a feedback submission; exits non-zero when invalid
    Validate {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
        #[arg(long)]
        json: bool,
    },
    /// Draw a single frame of a view as text
    Render {
        #[arg(long, default_value = "/")]
        view: View,
        #[arg(long, default_value_t = 100)]
        width: u16,
        #[arg(long, default_value_t = 40)]
        height: u16,
        /// Alerts view: category to select
        #[arg(long)]
        category: Option<CategoryFilter>,
        /// Map view: zone to open in the detail panel
        #[arg(long)]
        zone: Option<u32>,
    },
}

impl Cli {
    /// Layer CLI flags over the loaded config
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(view) = self.view {
            config.start_view = view;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if self.no_mouse {
            config.mouse = false;
        }
        config.validate()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct MetricsReport {
    #[serde(flatten)]
    metrics: CityMetrics,
    aqi_level: AqiLevel,
    traffic_level: TrafficLevel,
}

/// Run a one-shot subcommand. Returns false when the command reports failure.
pub fn execute(command: &Command, out: &mut impl Write) -> Result<bool> {
    match command {
        Command::Alerts { category, json } => {
            let mut state = AlertsState::default();
            state.set_selected_category(*category);
            let visible = state.visible();

            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&visible)?)?;
            } else if visible.is_empty() {
                writeln!(out, "No alerts in this category")?;
            } else {
                for alert in visible {
                    writeln!(
                        out,
                        "[{}] {} · {} ({})",
                        alert.priority, alert.category, alert.title, alert.timestamp
                    )?;
                    writeln!(out, "    {}", alert.description)?;
                }
            }
        }
        Command::Zones { json } => {
            let map = MapState::default();
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(map.zones())?)?;
            } else {
                for zone in map.zones() {
                    let b = &zone.bounds;
                    writeln!(
                        out,
                        "{}. {} [{}] at ({}, {}) {}x{} · {} · {}",
                        zone.id, zone.name, zone.category, b.x, b.y, b.width, b.height, zone.contact, zone.hours
                    )?;
                }
            }
        }
        Command::Metrics { json } => {
            let metrics = CityMetrics::default();
            if *json {
                let report = MetricsReport {
                    metrics,
                    aqi_level: metrics.aqi_level(),
                    traffic_level: metrics.traffic_level(),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                writeln!(out, "Temperature:       {}°C", metrics.temperature)?;
                writeln!(out, "Humidity:          {}%", metrics.humidity)?;
                writeln!(out, "Air Quality Index: {} ({})", metrics.aqi, metrics.aqi_level())?;
                writeln!(out, "Wind Speed:        {} km/h", metrics.wind_speed)?;
                writeln!(
                    out,
                    "Traffic Density:   {}% ({})",
                    metrics.traffic_density,
                    metrics.traffic_level()
                )?;
                writeln!(out, "Active Alerts:     {}", metrics.active_alerts)?;
                writeln!(out, "Public Facilities: {}", metrics.public_facilities)?;
                writeln!(out, "Service Requests:  {}", metrics.service_requests)?;
            }
        }
        Command::Validate {
            name,
            email,
            message,
            json,
        } => {
            let errors = validate_form(&FormData::new(name.as_str(), email.as_str(), message.as_str()));
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&errors)?)?;
            } else if errors.is_empty() {
                writeln!(out, "ok")?;
            } else {
                for (field, msg) in errors.iter() {
                    writeln!(out, "{}: {}", field.label().to_lowercase(), msg)?;
                }
            }
            return Ok(errors.is_empty());
        }
        Command::Render {
            view,
            width,
            height,
            category,
            zone,
        } => {
            let mut app = App::new(*view);
            if let Some(category) = category {
                app.alerts.set_selected_category(*category);
            }
            if let Some(id) = zone {
                app.map.select_zone(*id)?;
            }
            writeln!(out, "{}", ui::render_snapshot(&app, *width, *height)?)?;
        }
    }

    Ok(true)
}
