use std::env;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::model::id::UserId;
use serenity::prelude::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

use subkeeper_bot::AppState;
use subkeeper_bot::handler::Handler;
use subkeeper_bot::store::Store;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let operator_id_str =
        env::var("OPERATOR_ID").expect("Expected OPERATOR_ID in the environment.");
    let operator_id = UserId::new(
        operator_id_str
            .parse::<u64>()
            .expect("OPERATOR_ID must be a valid Discord user id."),
    );
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| ".".to_string());

    let app_state = Arc::new(AppState {
        store: Arc::new(Store::open(&data_dir)),
    });

    // DIRECT_MESSAGES is required for the subscription and expiry DMs.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::DIRECT_MESSAGES;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler { operator_id })
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        error!(error = %why, "client error");
    }
}
