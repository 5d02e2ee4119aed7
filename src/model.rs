//! Shared application state, stored in Serenity's global context so every
//! event handler reaches the same `Store`.

use crate::store::Store;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

pub struct AppState {
    /// The single durable store for the service catalog and the
    /// subscription table. Passed by `Arc` into every handler invocation
    /// rather than living in module-level globals.
    pub store: Arc<Store>,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
