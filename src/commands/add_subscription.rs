//! Handles `!addsub <@user> <service> <days>`: grant a time-limited
//! subscription to a mentioned user and DM them about it.

use crate::store::Subscription;
use crate::{AppState, notify, ui};
use chrono::{DateTime, Duration, Utc};
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::*;
use tracing::{error, warn};

const USAGE_ERROR: &str =
    "Invalid command usage. Ensure the user, service, and duration are correct.";

/// Extract the user id from a raw `<@123>` or `<@!123>` mention token.
pub fn parse_mention(token: &str) -> Option<UserId> {
    let inner = token.strip_prefix("<@")?.strip_suffix('>')?;
    let inner = inner.strip_prefix('!').unwrap_or(inner);
    inner.parse::<u64>().ok().map(UserId::new)
}

/// Validate the duration argument: whole days, strictly positive.
pub fn parse_days(arg: Option<&str>) -> Option<i64> {
    arg?.parse::<i64>().ok().filter(|days| *days > 0)
}

/// Compute `now + days`, rejecting durations the timestamp type cannot
/// represent. `+` on `DateTime` panics past that range.
pub fn expiry_after(now: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    let delta = Duration::try_days(days)?;
    now.checked_add_signed(delta)
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };

    // The mention must match a user Discord actually delivered with the
    // message; a hand-typed `<@id>` for a user the bot cannot see fails.
    let user = args
        .first()
        .copied()
        .and_then(parse_mention)
        .and_then(|id| msg.mentions.iter().find(|user| user.id == id));
    let service = args.get(1).copied();
    let days = parse_days(args.get(2).copied());

    let (user, service, days) = match (user, service, days) {
        (Some(user), Some(service), Some(days)) => (user, service, days),
        _ => {
            notify::reply_embed(&ctx.http, msg, ui::error_embed("Error", USAGE_ERROR))
                .await
                .ok();
            return;
        }
    };
    if !state.store.service_exists(service).await {
        notify::reply_embed(&ctx.http, msg, ui::error_embed("Error", USAGE_ERROR))
            .await
            .ok();
        return;
    }

    let Some(expiry) = expiry_after(Utc::now(), days) else {
        notify::reply_embed(&ctx.http, msg, ui::error_embed("Error", USAGE_ERROR))
            .await
            .ok();
        return;
    };
    let subscription = Subscription {
        service: service.to_string(),
        expiry,
    };
    if let Err(e) = state.store.put_subscription(user.id.get(), subscription).await {
        error!(error = %e, user_id = user.id.get(), "failed to persist subscription");
        notify::reply_embed(
            &ctx.http,
            msg,
            ui::error_embed("Error", "Failed to save the subscription."),
        )
        .await
        .ok();
        return;
    }

    // The subscription is already durable at this point; the DM is
    // best-effort, but the operator is told when it could not be delivered.
    let dm = ui::success_embed(
        "Subscription Added",
        format!(
            "You have been subscribed to service {} for {} days. It will expire on {}.",
            service,
            days,
            expiry.to_rfc3339()
        ),
    );
    let reply = match notify::dm_user(&ctx.http, user, dm).await {
        Ok(_) => ui::success_embed(
            "Subscription Added",
            format!(
                "User {} has been subscribed to service {} for {} days.",
                user.tag(),
                service,
                days
            ),
        ),
        Err(e) => {
            warn!(error = %e, user_id = user.id.get(), "failed to DM new subscriber");
            ui::error_embed(
                "Error",
                "Failed to send DM to the user. They might have DMs disabled or have not shared a server with the bot.",
            )
        }
    };
    notify::reply_embed(&ctx.http, msg, reply).await.ok();
}
