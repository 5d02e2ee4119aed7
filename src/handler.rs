use crate::{AppState, commands, constants, lifecycle};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::{channel::Message, gateway::Ready, id::UserId};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use tracing::info;

enum Command {
    AddService,
    AddSub,
    Services,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add_service" => Ok(Command::AddService),
            "addsub" => Ok(Command::AddSub),
            "services" => Ok(Command::Services),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler {
    pub operator_id: UserId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        // Only the operator drives the bot; everyone else gets silence, not
        // a permission error.
        if msg.author.id != self.operator_id {
            return;
        }
        let Some(command_body) = msg.content.strip_prefix(constants::COMMAND_PREFIX) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(&command_str.to_lowercase()).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::AddService => commands::add_service::run_prefix(&ctx, &msg, args_vec).await,
            Command::AddSub => commands::add_subscription::run_prefix(&ctx, &msg, args_vec).await,
            Command::Services => commands::services::run_prefix(&ctx, &msg).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "connected and ready");
        let Some(state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        // Detached deliberately; the sweeper runs for the life of the process.
        let _ = lifecycle::spawn_sweeper(ctx.http.clone(), state.store.clone());
    }
}
