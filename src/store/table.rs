//! A single persisted mapping: keyed `get`/`put`/`delete` over an in-memory
//! `BTreeMap`, flushed to a pretty-printed JSON file on every mutation.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// `BTreeMap` rather than `HashMap` so repeated saves of the same contents
/// produce byte-identical files.
pub struct JsonTable<K, V> {
    path: PathBuf,
    map: BTreeMap<K, V>,
}

impl<K, V> JsonTable<K, V>
where
    K: Ord + Clone + Serialize + DeserializeOwned,
    V: Clone + Serialize + DeserializeOwned,
{
    /// A missing or malformed file loads as an empty table; the failure is
    /// logged and never surfaced to the caller.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "malformed table file, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable table file, starting empty");
                BTreeMap::new()
            }
        };
        Self { path, map }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn put(&mut self, key: K, value: V) -> Result<(), StoreError> {
        self.modify(|map| {
            map.insert(key, value);
        })
    }

    pub fn delete<Q>(&mut self, key: &Q) -> Result<Option<V>, StoreError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut removed = None;
        self.modify(|map| removed = map.remove(key))?;
        Ok(removed)
    }

    /// Apply one batch of changes and flush the file exactly once. If the
    /// flush fails the previous contents are restored, so the in-memory map
    /// never runs ahead of what is on disk.
    pub fn modify<F>(&mut self, mutate: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeMap<K, V>),
    {
        let before = self.map.clone();
        mutate(&mut self.map);
        if let Err(e) = self.persist() {
            self.map = before;
            return Err(e);
        }
        Ok(())
    }

    /// Serialize the whole map and replace the file via a temp-file rename,
    /// so a successful call always leaves a complete file behind.
    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.map).map_err(|source| {
            StoreError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
