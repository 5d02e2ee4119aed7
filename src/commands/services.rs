//! Handles `!services`: list the catalog with prices.

use crate::{AppState, notify, ui};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let mut embed = ui::info_embed(
        "Available Services",
        "Here are the available services and their prices:",
    );
    for (name, price) in state.store.list_services().await {
        embed = embed.field(name, format!("${}", price), true);
    }
    notify::reply_embed(&ctx.http, msg, embed).await.ok();
}
