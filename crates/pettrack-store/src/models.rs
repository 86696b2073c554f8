//! Data models for stored data.

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Maximum number of fixes retained in the history.
pub const MAX_FIXES: usize = 1000;

/// Number of fixes returned by a history query without a usable limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Device identifier used when a fix does not name its device.
pub const DEFAULT_DEVICE_ID: &str = "pet-tracker-001";

/// Battery percentage used when a fix does not report one.
pub const DEFAULT_BATTERY: f64 = 100.0;

/// Geofence radius in meters used when none is given.
pub const DEFAULT_RADIUS: f64 = 100.0;

/// A location fix stored in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    /// Unique, increasing identifier.
    pub id: i64,
    /// Reporting device.
    pub device_id: String,
    /// Latitude in degrees.
    #[serde(with = "crate::number")]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(with = "crate::number")]
    pub longitude: f64,
    /// Battery percentage.
    #[serde(default = "default_battery", with = "crate::number")]
    pub battery: f64,
    /// When this fix was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Fix {
    /// Build a stored fix from a candidate, applying defaults.
    pub fn from_new(id: i64, candidate: NewFix, timestamp: OffsetDateTime) -> Self {
        let device_id = candidate
            .device_id
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DEVICE_ID.to_string());

        Self {
            id,
            device_id,
            latitude: candidate.latitude,
            longitude: candidate.longitude,
            battery: or_default(candidate.battery, DEFAULT_BATTERY),
            timestamp,
        }
    }
}

/// A fix as submitted, before the store assigns id and timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewFix {
    pub latitude: f64,
    pub longitude: f64,
    pub device_id: Option<String>,
    pub battery: Option<f64>,
}

impl NewFix {
    /// Create a candidate with only coordinates set.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Default::default()
        }
    }

    /// Set the reporting device.
    pub fn device(mut self, device_id: &str) -> Self {
        self.device_id = Some(device_id.to_string());
        self
    }

    /// Set the battery percentage.
    pub fn battery(mut self, battery: f64) -> Self {
        self.battery = Some(battery);
        self
    }
}

/// A named circular region. Stored only, never evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geofence {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, with = "crate::number")]
    pub latitude: f64,
    #[serde(default, with = "crate::number")]
    pub longitude: f64,
    /// Radius in meters.
    #[serde(default = "default_radius", with = "crate::number")]
    pub radius: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Geofence {
    /// Build a stored geofence from a candidate, applying defaults.
    pub fn from_new(id: i64, candidate: NewGeofence, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            name: candidate.name,
            latitude: candidate.latitude,
            longitude: candidate.longitude,
            radius: or_default(candidate.radius, DEFAULT_RADIUS),
            created_at,
        }
    }
}

/// A geofence as submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewGeofence {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: Option<f64>,
}

impl NewGeofence {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            radius: None,
        }
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

/// The complete durable state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Fixes, newest first.
    #[serde(default)]
    pub locations: Vec<Fix>,
    /// Geofences, oldest first.
    #[serde(default)]
    pub geofences: Vec<Geofence>,
}

impl Snapshot {
    /// Highest id used by any record, if there are records.
    pub(crate) fn max_id(&self) -> Option<i64> {
        let fixes = self.locations.iter().map(|f| f.id);
        let geofences = self.geofences.iter().map(|g| g.id);
        fixes.chain(geofences).max()
    }
}

fn default_battery() -> f64 {
    DEFAULT_BATTERY
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

/// Names may have been stored as numbers or `null` by older writers.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Zero and NaN count as "not provided", like a missing value.
fn or_default(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => default,
    }
}
