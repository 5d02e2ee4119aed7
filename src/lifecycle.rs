//! The expiry sweep. Runs once at startup and then on a fixed 60-second
//! interval; a subscription is active purely by being present in the table,
//! so a sweep pass is removal plus notification, nothing more.

use crate::constants::SWEEP_INTERVAL_SECS;
use crate::store::Store;
use crate::{notify, ui};
use chrono::Utc;
use serenity::http::Http;
use serenity::model::id::UserId;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Spawn the recurring sweep. The first interval tick fires immediately,
/// which gives the startup sweep before the 60-second cadence begins.
pub fn spawn_sweeper(http: Arc<Http>, store: Arc<Store>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(SWEEP_INTERVAL_SECS));
        loop {
            ticker.tick().await;
            run_sweep(&http, &store).await;
        }
    })
}

/// One sweep pass: snapshot the time once, drop every entry at or past its
/// expiry, flush the table once, then notify each removed subscriber on a
/// detached task so delivery never blocks the sweep.
pub async fn run_sweep(http: &Arc<Http>, store: &Store) {
    debug!("checking subscriptions");
    let now = Utc::now();
    let removed = match store.remove_expired(now).await {
        Ok(removed) => removed,
        Err(e) => {
            error!(error = %e, "expiry sweep could not persist the subscription table");
            return;
        }
    };
    if !removed.is_empty() {
        info!(count = removed.len(), "removed expired subscriptions");
    }
    for (user_id, subscription) in removed {
        let http = http.clone();
        tokio::spawn(async move {
            let embed = ui::error_embed(
                "Subscription Expired",
                format!(
                    "Your subscription to service {} has expired.",
                    subscription.service
                ),
            );
            if let Err(e) = notify::dm_user_id(&http, UserId::new(user_id), embed).await {
                warn!(error = %e, user_id, "failed to deliver expiry notice");
            }
        });
    }
}
