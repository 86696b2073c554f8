//! Local data persistence for pet tracker GPS fixes.
//!
//! This crate keeps a bounded, newest-first history of location fixes and an
//! append-only list of named geofences in a single JSON snapshot file.
//!
//! # Features
//!
//! - Fixed-capacity fix history ([`MAX_FIXES`] entries, oldest evicted first)
//! - Default substitution for device id, battery and geofence radius
//! - Atomic snapshot replacement on every write
//! - Writers serialized by a store-owned mutex
//!
//! # Example
//!
//! ```no_run
//! use pettrack_store::{NewFix, Store};
//!
//! let store = Store::open_default()?;
//!
//! store.record_fix(NewFix::new(-6.2088, 106.8456))?;
//! let recent = store.fix_history(10)?;
//! # Ok::<(), pettrack_store::Error>(())
//! ```

mod error;
mod models;
pub mod number;
mod store;

pub use error::{Error, Result};
pub use models::{
    DEFAULT_BATTERY, DEFAULT_DEVICE_ID, DEFAULT_HISTORY_LIMIT, DEFAULT_RADIUS, Fix, Geofence,
    MAX_FIXES, NewFix, NewGeofence, Snapshot,
};
pub use store::Store;

/// Default snapshot path following platform conventions.
///
/// - Linux: `~/.local/share/pettrack/data.json`
/// - macOS: `~/Library/Application Support/pettrack/data.json`
/// - Windows: `C:\Users\<user>\AppData\Local\pettrack\data.json`
pub fn default_data_path() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("pettrack")
        .join("data.json")
}
