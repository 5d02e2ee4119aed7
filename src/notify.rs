//! Outbound delivery: embed replies attached to a triggering message, and
//! unsolicited embed DMs. Every path returns the delivery result so each
//! caller decides whether to await it, log it, or drop it.

use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::model::user::User;

/// Reply in the channel of the triggering message, referencing it.
pub async fn reply_embed(
    http: &Http,
    msg: &Message,
    embed: CreateEmbed,
) -> serenity::Result<Message> {
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(http, builder).await
}

/// Push an embed to an already-resolved user's DM channel.
pub async fn dm_user(http: &Http, user: &User, embed: CreateEmbed) -> serenity::Result<Message> {
    user.dm(http, CreateMessage::new().embed(embed)).await
}

/// Resolve a user id over HTTP, then DM them. Used by the expiry sweep,
/// which only has the id it stored when the subscription was granted.
pub async fn dm_user_id(
    http: &Http,
    user_id: UserId,
    embed: CreateEmbed,
) -> serenity::Result<Message> {
    let user = user_id.to_user(http).await?;
    dm_user(http, &user, embed).await
}
