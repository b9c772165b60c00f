use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod models;
mod services;
mod utils;

use api::ollama::OllamaClient;
use api::yahoo::YahooFinanceClient;

struct Handler;

struct BotData;

impl TypeMapKey for BotData {
    type Value = Instant;
}

struct MarketData;

impl TypeMapKey for MarketData {
    type Value = YahooFinanceClient;
}

struct LlmClient;

impl TypeMapKey for LlmClient {
    type Value = OllamaClient;
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        // Check for rate limits now that bot is connected
        debug!("Checking Discord rate limit status...");
        match ctx.http.get_current_user().await {
            Ok(_) => {
                info!("No rate limit detected - Bot is fully ready!");
            }
            Err(e) => {
                let error_msg = e.to_string();
                if error_msg.contains("429")
                    || error_msg.contains("rate limit")
                    || error_msg.contains("Ratelimited")
                {
                    warn!("Bot is being rate limited by Discord! Error: {}", error_msg);
                } else {
                    warn!("Failed to check rate limit status: {}", error_msg);
                }
            }
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("nsebot=debug".parse().unwrap())
                .add_directive("serenity=warn".parse().unwrap()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🤖 Starting NSE stock market chatbot...");
    info!("📈 Ask about any NSE-listed stock or the best-performing stock over a time period.");

    let market_client = match std::env::var("YAHOO_BASE_URL") {
        Ok(url) => {
            info!("Using market data base URL override: {}", url);
            YahooFinanceClient::with_base_url(url)
        }
        Err(_) => YahooFinanceClient::new(),
    };

    let llm_client = match std::env::var("OLLAMA_URL") {
        Ok(url) => {
            let model = std::env::var("OLLAMA_MODEL")
                .unwrap_or_else(|_| OllamaClient::DEFAULT_MODEL.to_string());
            info!("🧠 Local LLM enabled: {} @ {}", model, url);
            Some(OllamaClient::new(url, model))
        }
        Err(_) => {
            info!("Local LLM disabled (OLLAMA_URL not set)");
            None
        }
    };

    let token = std::env::var("DISCORD_TOKEN").expect("DISCORD_TOKEN not set");
    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler)
        .await
        .expect("Failed to create client");

    // Store the start time and API clients in client data
    {
        let mut data = client.data.write().await;
        data.insert::<BotData>(Instant::now());
        data.insert::<MarketData>(market_client);
        if let Some(llm) = llm_client {
            data.insert::<LlmClient>(llm);
        }
    }

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }
}
