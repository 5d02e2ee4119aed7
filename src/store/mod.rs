//! Durable state for the bot: the service catalog (name -> price) and the
//! subscription table (subscriber id -> service + expiry), each backed by
//! its own JSON file.
//!
//! Every mutating method takes the table's write lock across the mutation
//! and the flush, so a command-path upsert and a sweep-path removal can
//! never interleave a load-mutate-save cycle against the same file.

mod table;

pub use table::{JsonTable, StoreError};

use crate::constants::{SERVICES_FILE, SUBSCRIPTIONS_FILE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;

/// One granted subscription. The expiry is absolute; presence in the table
/// is what makes a subscription active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub service: String,
    pub expiry: DateTime<Utc>,
}

pub struct Store {
    services: RwLock<JsonTable<String, f64>>,
    subscriptions: RwLock<JsonTable<u64, Subscription>>,
}

impl Store {
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self {
            services: RwLock::new(JsonTable::load(dir.join(SERVICES_FILE))),
            subscriptions: RwLock::new(JsonTable::load(dir.join(SUBSCRIPTIONS_FILE))),
        }
    }

    /// Upsert a catalog entry and flush the catalog file.
    pub async fn put_service(&self, name: &str, price: f64) -> Result<(), StoreError> {
        self.services.write().await.put(name.to_string(), price)
    }

    pub async fn service_exists(&self, name: &str) -> bool {
        self.services.read().await.contains(name)
    }

    pub async fn get_price(&self, name: &str) -> Option<f64> {
        self.services.read().await.get(name).copied()
    }

    pub async fn list_services(&self) -> Vec<(String, f64)> {
        self.services
            .read()
            .await
            .iter()
            .map(|(name, price)| (name.clone(), *price))
            .collect()
    }

    /// Upsert a subscription (replacing any prior grant for the same user)
    /// and flush the subscription file.
    pub async fn put_subscription(
        &self,
        user_id: u64,
        subscription: Subscription,
    ) -> Result<(), StoreError> {
        self.subscriptions
            .write()
            .await
            .put(user_id, subscription)
    }

    pub async fn get_subscription(&self, user_id: u64) -> Option<Subscription> {
        self.subscriptions.read().await.get(&user_id).cloned()
    }

    pub async fn subscription_count(&self) -> usize {
        self.subscriptions.read().await.len()
    }

    /// One sweep pass: remove every entry whose expiry is at or before `now`
    /// and flush the file exactly once, including when nothing expired.
    /// Returns the removed entries so the caller can notify each subscriber.
    pub async fn remove_expired(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<(u64, Subscription)>, StoreError> {
        let mut table = self.subscriptions.write().await;
        let expired: Vec<u64> = table
            .iter()
            .filter(|(_, sub)| now >= sub.expiry)
            .map(|(id, _)| *id)
            .collect();
        let mut removed = Vec::with_capacity(expired.len());
        table.modify(|map| {
            for id in expired {
                if let Some(sub) = map.remove(&id) {
                    removed.push((id, sub));
                }
            }
        })?;
        Ok(removed)
    }
}
