//! HTTP REST API for a GPS pet tracker.
//!
//! This crate provides a service that:
//! - Accepts GPS fixes pushed by tracker devices
//! - Keeps the most recent 1000 fixes in a JSON snapshot
//! - Exposes the latest fix and recent history for polling clients
//! - Stores named circular geofences (descriptive only)
//!
//! # REST API Endpoints
//!
//! - `GET /` - Service status and endpoint listing
//! - `GET /api/health` - Health check with record counts
//! - `POST /api/location` - Submit a fix (`lat`, `lng`, optional `battery`, `device_id`)
//! - `GET /api/location/latest` - Most recent fix
//! - `GET /api/location/history?limit=N` - Recent fixes, newest first
//! - `GET /api/geofence` - List geofences
//! - `POST /api/geofence` - Create a geofence (`name`, `latitude`, `longitude`, optional `radius`)
//!
//! # Configuration
//!
//! The service reads configuration from `~/.config/pettrack/server.toml`:
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:3000"
//!
//! [storage]
//! path = "~/.local/share/pettrack/data.json"
//! ```
//!
//! The `PORT` environment variable replaces the port of `server.bind`.

pub mod api;
pub mod config;
pub mod state;

pub use config::{Config, ConfigError, ServerConfig, StorageConfig, ValidationError};
pub use state::AppState;
