//! Browser `localStorage` persistence for the timer snapshot.
//!
//! All writes are best effort: callers log failures and carry on.

use crate::config::STORAGE_KEY;
use blind_timer::snapshot::{Snapshot, SnapshotError};
use log::debug;
use std::fmt;
use web_sys::Storage;

#[derive(Debug)]
pub enum StorageError {
    Unavailable,
    Access(String),
    Snapshot(SnapshotError),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "localStorage is not available"),
            StorageError::Access(err) => write!(f, "localStorage access failed: {}", err),
            StorageError::Snapshot(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<SnapshotError> for StorageError {
    fn from(err: SnapshotError) -> Self {
        StorageError::Snapshot(err)
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    gloo_utils::window()
        .local_storage()
        .map_err(|e| StorageError::Access(format!("{:?}", e)))?
        .ok_or(StorageError::Unavailable)
}

/// Raw stored snapshot, if there is one.
pub fn load() -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(|e| StorageError::Access(format!("{:?}", e)))
}

pub fn save(snapshot: &Snapshot) -> Result<(), StorageError> {
    let json = snapshot.to_json()?;
    local_storage()?
        .set_item(STORAGE_KEY, &json)
        .map_err(|e| StorageError::Access(format!("{:?}", e)))?;
    debug!("Saved timer state: {}", json);
    Ok(())
}

pub fn clear() -> Result<(), StorageError> {
    local_storage()?
        .remove_item(STORAGE_KEY)
        .map_err(|e| StorageError::Access(format!("{:?}", e)))
}
