//! City map zones - fixed facilities on a normalized 0-100 plane

use super::Tone;
use crate::error::CityError;
use serde::Serialize;

/// Side of the normalized map plane
pub const MAP_EXTENT: f64 = 100.0;

/// Rectangle in map coordinates (origin top-left, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ZoneBounds {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Fully inside the map plane
    pub fn in_range(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width >= 0.0
            && self.height >= 0.0
            && self.x + self.width <= MAP_EXTENT
            && self.y + self.height <= MAP_EXTENT
    }
}

/// A municipal facility on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    pub id: u32,
    pub name: String,
    /// Free-text category label, e.g. "Healthcare"
    pub category: String,
    pub description: String,
    pub contact: String,
    pub hours: String,
    pub bounds: ZoneBounds,
}

impl Zone {
    pub fn tone(&self) -> Tone {
        zone_tone(&self.category)
    }
}

/// Fixed category lookup with a muted fallback
pub fn zone_tone(category: &str) -> Tone {
    match category {
        "Parks & Recreation" => Tone::Success,
        "Healthcare" => Tone::Destructive,
        "Shopping" => Tone::Warning,
        "Education" => Tone::Info,
        "Public Services" => Tone::Primary,
        "Sports & Fitness" => Tone::Secondary,
        "Emergency Services" => Tone::Destructive,
        "Transportation" => Tone::Accent,
        "Government" => Tone::Primary,
        _ => Tone::Muted,
    }
}

fn zone(
    id: u32,
    name: &str,
    category: &str,
    description: &str,
    contact: &str,
    hours: &str,
    (x, y): (f64, f64),
) -> Zone {
    Zone {
        id,
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        contact: contact.to_string(),
        hours: hours.to_string(),
        bounds: ZoneBounds {
            x,
            y,
            width: 25.0,
            height: 25.0,
        },
    }
}

/// The fixed 3x3 zone layout
pub fn mock_zones() -> Vec<Zone> {
    vec![
        zone(
            1,
            "Central Park",
            "Parks & Recreation",
            "A beautiful urban park with walking trails, playgrounds, and picnic areas.",
            "+1 (555) 123-4567",
            "6:00 AM - 10:00 PM",
            (10.0, 10.0),
        ),
        zone(
            2,
            "City General Hospital",
            "Healthcare",
            "24/7 emergency services, specialized care units, and outpatient facilities.",
            "+1 (555) 234-5678",
            "24/7",
            (40.0, 10.0),
        ),
        zone(
            3,
            "Riverside Mall",
            "Shopping",
            "Premier shopping destination with 200+ stores, restaurants, and entertainment.",
            "+1 (555) 345-6789",
            "10:00 AM - 9:00 PM",
            (70.0, 10.0),
        ),
        zone(
            4,
            "Lincoln Elementary School",
            "Education",
            "K-5 public elementary school with modern facilities and experienced staff.",
            "+1 (555) 456-7890",
            "8:00 AM - 3:00 PM (Weekdays)",
            (10.0, 40.0),
        ),
        zone(
            5,
            "Community Library",
            "Public Services",
            "Public library with vast collection, digital resources, and community programs.",
            "+1 (555) 567-8901",
            "9:00 AM - 8:00 PM",
            (40.0, 40.0),
        ),
        zone(
            6,
            "Sports Complex",
            "Sports & Fitness",
            "Multi-sport facility with indoor courts, swimming pool, and fitness center.",
            "+1 (555) 678-9012",
            "6:00 AM - 11:00 PM",
            (70.0, 40.0),
        ),
        zone(
            7,
            "Fire Station #3",
            "Emergency Services",
            "24/7 fire and rescue services serving the downtown and east districts.",
            "911 / +1 (555) 789-0123",
            "24/7",
            (10.0, 70.0),
        ),
        zone(
            8,
            "Transit Hub",
            "Transportation",
            "Central bus and metro station with connections to all city zones.",
            "+1 (555) 890-1234",
            "5:00 AM - 12:00 AM",
            (40.0, 70.0),
        ),
        zone(
            9,
            "City Hall",
            "Government",
            "Municipal administration, permits, licenses, and public records.",
            "+1 (555) 901-2345",
            "8:00 AM - 5:00 PM (Weekdays)",
            (70.0, 70.0),
        ),
    ]
}

/// State owned by the City Map view
#[derive(Debug, Clone)]
pub struct MapState {
    zones: Vec<Zone>,
    selected: Option<usize>,
    /// Keyboard focus, independent of the detail panel
    cursor: usize,
}

impl Default for MapState {
    fn default() -> Self {
        Self::new(mock_zones())
    }
}

impl MapState {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            zones,
            selected: None,
            cursor: 0,
        }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Zone shown in the detail panel, if any
    pub fn selected_zone(&self) -> Option<&Zone> {
        self.selected.and_then(|idx| self.zones.get(idx))
    }

    /// Show a zone's details, replacing whatever was shown
    pub fn select_zone(&mut self, id: u32) -> Result<&Zone, CityError> {
        let idx = self
            .zones
            .iter()
            .position(|z| z.id == id)
            .ok_or(CityError::UnknownZone(id))?;

        log::debug!("Zone selected: {}", self.zones[idx].name);
        self.selected = Some(idx);
        self.cursor = idx;
        Ok(&self.zones[idx])
    }

    /// Hide the detail panel
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Topmost zone containing a map point
    pub fn zone_at(&self, x: f64, y: f64) -> Option<&Zone> {
        self.zones.iter().rev().find(|z| z.bounds.contains(x, y))
    }

    /// Select whatever zone lies under a click; clicks on empty ground are ignored
    pub fn click(&mut self, x: f64, y: f64) -> Option<&Zone> {
        let id = self.zone_at(x, y)?.id;
        self.select_zone(id).ok()
    }

    pub fn cursor_zone(&self) -> Option<&Zone> {
        self.zones.get(self.cursor)
    }

    /// Move the cursor to the nearest zone lying in direction (dx, dy).
    /// Stays put when nothing lies that way.
    pub fn move_cursor_toward(&mut self, dx: f64, dy: f64) {
        let Some(current) = self.cursor_zone() else {
            return;
        };
        let (cx, cy) = current.bounds.center();

        let best = self
            .zones
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != self.cursor)
            .filter_map(|(idx, zone)| {
                let (zx, zy) = zone.bounds.center();
                let (ox, oy) = (zx - cx, zy - cy);
                let along = ox * dx + oy * dy;
                if along <= 0.0 {
                    return None;
                }
                // sideways drift costs double
                let across = (ox * dy - oy * dx).abs();
                Some((idx, along + 2.0 * across))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((idx, _)) = best {
            self.cursor = idx;
        }
    }

    /// Open the detail panel for the zone under the keyboard cursor
    pub fn select_cursor(&mut self) {
        if let Some(id) = self.cursor_zone().map(|z| z.id) {
            let _ = self.select_zone(id);
        }
    }

    /// Distinct categories in first-seen order, for the legend
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for zone in &self.zones {
            if !seen.contains(&zone.category.as_str()) {
                seen.push(&zone.category);
            }
        }
        seen
    }
}
