//! Main store implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{
    DEFAULT_HISTORY_LIMIT, Fix, Geofence, MAX_FIXES, NewFix, NewGeofence, Snapshot,
};

/// JSON snapshot store for fixes and geofences.
///
/// Every operation reads the whole snapshot from its medium. Writes hold
/// `write_lock` for the full load-mutate-persist cycle so concurrent writers
/// never clobber each other; readers rely on atomic replacement instead.
pub struct Store {
    medium: Medium,
    write_lock: Mutex<()>,
}

enum Medium {
    File(PathBuf),
    Memory(Mutex<Snapshot>),
}

impl Store {
    /// Open or create a snapshot file at the given path.
    ///
    /// A missing file is initialized with an empty snapshot. An existing file
    /// is parsed once so a corrupt snapshot fails at startup.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Create parent directories if needed
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| Error::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let store = Self {
            medium: Medium::File(path.to_path_buf()),
            write_lock: Mutex::new(()),
        };

        if path.exists() {
            info!("Opening snapshot at {}", path.display());
            let snapshot = store.load()?;
            debug!(
                "Loaded {} fixes and {} geofences",
                snapshot.locations.len(),
                snapshot.geofences.len()
            );
        } else {
            info!("Creating empty snapshot at {}", path.display());
            store.persist(&Snapshot::default())?;
        }

        Ok(store)
    }

    /// Open the default snapshot location.
    pub fn open_default() -> Result<Self> {
        Self::open(crate::default_data_path())
    }

    /// Open a store that lives only in memory (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            medium: Medium::Memory(Mutex::new(Snapshot::default())),
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file, if the store is file-backed.
    pub fn path(&self) -> Option<&Path> {
        match &self.medium {
            Medium::File(path) => Some(path.as_path()),
            Medium::Memory(_) => None,
        }
    }

    /// Load the complete current snapshot.
    pub fn snapshot(&self) -> Result<Snapshot> {
        self.load()
    }

    fn load(&self) -> Result<Snapshot> {
        match &self.medium {
            Medium::File(path) => {
                let content = fs::read(path).map_err(|e| Error::Read {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(serde_json::from_slice(&content)?)
            }
            Medium::Memory(snapshot) => {
                let snapshot = snapshot.lock().map_err(|_| Error::LockPoisoned)?;
                Ok(snapshot.clone())
            }
        }
    }

    fn persist(&self, snapshot: &Snapshot) -> Result<()> {
        match &self.medium {
            Medium::File(path) => {
                let content = serde_json::to_vec_pretty(snapshot)?;
                let dir = match path.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent,
                    _ => Path::new("."),
                };

                // Atomic replace so readers never see a half-written file
                let tmp_file = dir.join(format!(".data-{}.tmp", Uuid::new_v4()));
                fs::write(&tmp_file, content).map_err(|e| Error::Write {
                    path: tmp_file.clone(),
                    source: e,
                })?;
                fs::rename(&tmp_file, path).map_err(|e| {
                    let _ = fs::remove_file(&tmp_file);
                    Error::Write {
                        path: path.clone(),
                        source: e,
                    }
                })?;

                debug!(
                    "Persisted snapshot ({} fixes, {} geofences) to {}",
                    snapshot.locations.len(),
                    snapshot.geofences.len(),
                    path.display()
                );
                Ok(())
            }
            Medium::Memory(current) => {
                let mut current = current.lock().map_err(|_| Error::LockPoisoned)?;
                *current = snapshot.clone();
                Ok(())
            }
        }
    }

    /// Run one load-mutate-persist cycle under the write lock.
    ///
    /// The closure receives the next free id and the current time.
    fn mutate<T>(&self, f: impl FnOnce(&mut Snapshot, i64, OffsetDateTime) -> T) -> Result<T> {
        let _guard = self.write_lock.lock().map_err(|_| Error::LockPoisoned)?;

        let mut snapshot = self.load()?;
        let now = OffsetDateTime::now_utc();
        let id = next_id(&snapshot, now)?;

        let result = f(&mut snapshot, id, now);
        self.persist(&snapshot)?;

        Ok(result)
    }
}

/// Millisecond clock reading, bumped past the highest id already in use.
fn next_id(snapshot: &Snapshot, now: OffsetDateTime) -> Result<i64> {
    let millis = (now.unix_timestamp_nanos() / 1_000_000) as i64;
    match snapshot.max_id() {
        Some(max) if max >= millis => max.checked_add(1).ok_or(Error::IdsExhausted(max)),
        _ => Ok(millis),
    }
}

// Fix operations
impl Store {
    /// Record a fix as the newest entry, evicting the oldest beyond [`MAX_FIXES`].
    pub fn record_fix(&self, candidate: NewFix) -> Result<Fix> {
        self.mutate(|snapshot, id, now| {
            let fix = Fix::from_new(id, candidate, now);
            snapshot.locations.insert(0, fix.clone());
            if snapshot.locations.len() > MAX_FIXES {
                let evicted = snapshot.locations.len() - MAX_FIXES;
                snapshot.locations.truncate(MAX_FIXES);
                debug!("Evicted {} oldest fixes", evicted);
            }
            fix
        })
    }

    /// Get the most recently recorded fix.
    pub fn latest_fix(&self) -> Result<Option<Fix>> {
        let snapshot = self.load()?;
        Ok(snapshot.locations.into_iter().next())
    }

    /// Get up to `limit` fixes, newest first.
    ///
    /// A limit of zero or less falls back to [`DEFAULT_HISTORY_LIMIT`].
    pub fn fix_history(&self, limit: i64) -> Result<Vec<Fix>> {
        let limit = if limit > 0 {
            usize::try_from(limit).unwrap_or(usize::MAX)
        } else {
            DEFAULT_HISTORY_LIMIT
        };

        let mut fixes = self.load()?.locations;
        fixes.truncate(limit);
        Ok(fixes)
    }
}

// Geofence operations
impl Store {
    /// List all geofences in creation order.
    pub fn list_geofences(&self) -> Result<Vec<Geofence>> {
        Ok(self.load()?.geofences)
    }

    /// Append a new geofence.
    pub fn record_geofence(&self, candidate: NewGeofence) -> Result<Geofence> {
        self.mutate(|snapshot, id, now| {
            let geofence = Geofence::from_new(id, candidate, now);
            snapshot.geofences.push(geofence.clone());
            geofence
        })
    }
}
