// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file-based entity store
//!
//! Layout under the root directory:
//!
//! ```text
//! leads/<id>.json
//! properties/<id>.json
//! assignments/<lead_id>--<property_id>.json
//! ```

use super::{guarded_stamp, EntityStore, Filter, StoreError};
use async_trait::async_trait;
use rb_core::{Assignment, PhaseStamp, Record, Tracked};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

const ASSIGNMENTS: &str = "assignments";

/// JSON file-based store
#[derive(Clone)]
pub struct JsonEntityStore {
    base_path: PathBuf,
    // Serialises read-modify-write sequences within this process
    write_lock: Arc<Mutex<()>>,
}

impl JsonEntityStore {
    /// Open a store at the given path, creating it if needed
    pub async fn open(base_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path).await?;
        Ok(Self {
            base_path,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path_for(&self, collection: &str, id: &str) -> Result<PathBuf, StoreError> {
        check_id(id)?;
        Ok(self
            .base_path
            .join(collection)
            .join(format!("{}.json", id)))
    }

    fn assignment_path(&self, lead_id: &str, property_id: &str) -> Result<PathBuf, StoreError> {
        check_id(lead_id)?;
        check_id(property_id)?;
        Ok(self
            .base_path
            .join(ASSIGNMENTS)
            .join(format!("{}--{}.json", lead_id, property_id)))
    }

    async fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, StoreError> {
        match fs::read_to_string(path).await {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write through a temporary file so readers never see a partial record
    async fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(value)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, path).await?;
        Ok(())
    }

    async fn remove(&self, path: &Path) -> Result<bool, StoreError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Paths of all records in a collection
    async fn list(&self, collection: &str) -> Result<Vec<PathBuf>, StoreError> {
        let dir = self.base_path.join(collection);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    async fn read_all<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, StoreError> {
        let mut records = Vec::new();
        for path in self.list(collection).await? {
            // A concurrent delete between list and read is not an error
            if let Some(record) = self.read(&path).await? {
                records.push(record);
            }
        }
        Ok(records)
    }

    async fn remove_all(&self, collection: &str) -> Result<usize, StoreError> {
        let mut removed = 0;
        for path in self.list(collection).await? {
            if self.remove(&path).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[async_trait]
impl EntityStore for JsonEntityStore {
    async fn create<T: Record>(&self, record: &T) -> Result<(), StoreError> {
        let _lock = self.write_lock.lock().await;
        let path = self.path_for(T::COLLECTION, record.id())?;
        if fs::try_exists(&path).await? {
            return Err(StoreError::AlreadyExists {
                collection: T::COLLECTION,
                id: record.id().to_string(),
            });
        }
        self.write(&path, record).await
    }

    async fn get<T: Record>(&self, id: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(T::COLLECTION, id)?;
        self.read(&path).await
    }

    async fn query<T: Tracked>(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        let mut records: Vec<T> = self.read_all(T::COLLECTION).await?;
        records.retain(|r| filter.matches(r));
        records.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(records)
    }

    async fn update<T: Record>(&self, record: &T) -> Result<(), StoreError> {
        let _lock = self.write_lock.lock().await;
        let path = self.path_for(T::COLLECTION, record.id())?;
        if !fs::try_exists(&path).await? {
            return Err(StoreError::not_found::<T>(record.id()));
        }
        self.write(&path, record).await
    }

    async fn update_phase<T: Tracked>(
        &self,
        id: &str,
        expected: &str,
        stamp: PhaseStamp,
    ) -> Result<T, StoreError> {
        let _lock = self.write_lock.lock().await;
        let path = self.path_for(T::COLLECTION, id)?;
        let current: T = self
            .read(&path)
            .await?
            .ok_or_else(|| StoreError::not_found::<T>(id))?;
        let updated = guarded_stamp(current, id, expected, stamp)?;
        self.write(&path, &updated).await?;
        Ok(updated)
    }

    async fn delete<T: Record>(&self, id: &str) -> Result<bool, StoreError> {
        let _lock = self.write_lock.lock().await;
        let path = self.path_for(T::COLLECTION, id)?;
        self.remove(&path).await
    }

    async fn truncate<T: Record>(&self) -> Result<usize, StoreError> {
        let _lock = self.write_lock.lock().await;
        self.remove_all(T::COLLECTION).await
    }

    async fn assign(&self, assignment: &Assignment) -> Result<(), StoreError> {
        let _lock = self.write_lock.lock().await;
        let path = self.assignment_path(&assignment.lead_id, &assignment.property_id)?;
        if fs::try_exists(&path).await? {
            return Ok(());
        }
        self.write(&path, assignment).await
    }

    async fn unassign(&self, lead_id: &str, property_id: &str) -> Result<bool, StoreError> {
        let _lock = self.write_lock.lock().await;
        let path = self.assignment_path(lead_id, property_id)?;
        self.remove(&path).await
    }

    async fn assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        let mut assignments: Vec<Assignment> = self.read_all(ASSIGNMENTS).await?;
        assignments.sort_by(|a, b| {
            (&a.lead_id, &a.property_id).cmp(&(&b.lead_id, &b.property_id))
        });
        Ok(assignments)
    }

    async fn clear_assignments(&self) -> Result<usize, StoreError> {
        let _lock = self.write_lock.lock().await;
        self.remove_all(ASSIGNMENTS).await
    }
}

/// Ids become file names, and `--` separates the two ids of an assignment
/// file, so an id may not contain `--` or start or end with `-`.
fn check_id(id: &str) -> Result<(), StoreError> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        && !id.starts_with('-')
        && !id.ends_with('-')
        && !id.contains("--");
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidId(id.to_string()))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
