//! Handles `!add_service <name> <price>`: upsert a priced service into the
//! catalog.

use crate::{AppState, notify, ui};
use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::error;

/// Validate the raw arguments. The name must be non-empty and the price
/// must parse as a finite, non-negative number.
pub fn parse_args<'a>(args: &[&'a str]) -> Result<(&'a str, f64), ()> {
    let name = args.first().copied().filter(|name| !name.is_empty()).ok_or(())?;
    let price = args
        .get(1)
        .and_then(|raw| raw.parse::<f64>().ok())
        .ok_or(())?;
    if !price.is_finite() || price < 0.0 {
        return Err(());
    }
    Ok((name, price))
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = match parse_args(&args) {
        Ok((name, price)) => match state.store.put_service(name, price).await {
            Ok(()) => ui::success_embed(
                "Service Added",
                format!("Service `{}` added with price ${}", name, price),
            ),
            Err(e) => {
                error!(error = %e, service = name, "failed to persist service catalog");
                ui::error_embed("Error", "Failed to save the service catalog.")
            }
        },
        Err(()) => ui::error_embed("Error", "Invalid service name or price."),
    };
    notify::reply_embed(&ctx.http, msg, embed).await.ok();
}
