use serenity::builder::CreateEmbed;
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::symbol_service;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let companies = symbol_service::STOCK_SYMBOLS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ");

    let embed = CreateEmbed::default()
        .title("📈 Indian Stock Market Chatbot (NSE India)")
        .description(
            "Ask about any NSE-listed stock or the best-performing stock over a specific time period. No commands needed, just ask in plain English.",
        )
        .color(0x00b0f4)
        .field(
            "🔎 Stock lookup",
            "End your question with the company name, e.g. `tell me about RELIANCE` or just `WIPRO`",
            false,
        )
        .field(
            "🏆 Best performer",
            "Include the words `best` and `stock`, e.g. `best stock in 2 months`",
            false,
        )
        .field(
            "⏱ Timeframes",
            "Phrases like `5 days`, `3 weeks`, `2 months` or `1 year` are understood; the default is 1 month",
            false,
        )
        .field("📊 Known companies", companies, false)
        .field(
            "⚡ Rate Limiting",
            "5-second cooldown per user between questions",
            false,
        );

    msg.channel_id
        .send_message(
            ctx,
            serenity::builder::CreateMessage::default().embed(embed),
        )
        .await
        .map_err(|e| format!("Failed to send help message: {}", e))?;

    Ok(())
}
