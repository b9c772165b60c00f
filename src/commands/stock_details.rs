use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::chart_service::DEFAULT_CHART_PERIOD;
use crate::services::{detail_service, llm_service};
use crate::utils::truncate_chars;

// Discord caps embed descriptions at 4096 chars; leave room for the labels
const MAX_INSIGHT_CHARS: usize = 1800;

/// Answer a single-stock question. When a local model is configured the
/// reply leads with its commentary; the detail lookup uses the last word of
/// the message as the company name.
pub async fn execute(ctx: &Context, msg: &Message, stock_name: &str) -> Result<(), String> {
    tracing::info!(
        "🔎 Stock lookup from user {}: {:?}",
        msg.author.id,
        stock_name
    );

    let (market, llm) = {
        let data = ctx.data.read().await;
        (
            data.get::<crate::MarketData>()
                .ok_or("Market data client not initialized".to_string())?
                .clone(),
            data.get::<crate::LlmClient>().cloned(),
        )
    };

    if let Err(e) = msg.channel_id.broadcast_typing(ctx.http.as_ref()).await {
        tracing::warn!("Failed to broadcast typing: {}", e);
    }

    let insight = match &llm {
        Some(llm) => Some(match llm_service::ask(llm, &msg.content).await {
            Ok(text) => truncate_chars(text.trim(), MAX_INSIGHT_CHARS),
            Err(e) => {
                tracing::warn!("LLM call failed: {}", e);
                format!("⚠️ AI insight unavailable: {}", e)
            }
        }),
        None => None,
    };

    match detail_service::get_stock_details(&market, stock_name).await {
        Ok(details) => {
            let mut embed = serenity::builder::CreateEmbed::default()
                .title(format!(
                    "📊 Stock Details for {} ({})",
                    details.company_name, details.symbol
                ))
                .color(0x00ff00);
            if let Some(insight) = &insight {
                embed = embed.description(format!("🤖 **AI Insight:** {}", insight));
            }
            for (label, value) in details.detail_fields() {
                embed = embed.field(label, value, false);
            }

            msg.channel_id
                .send_message(
                    ctx,
                    serenity::builder::CreateMessage::default().embed(embed),
                )
                .await
                .map_err(|e| e.to_string())?;

            super::send_chart(ctx, msg, &market, stock_name, DEFAULT_CHART_PERIOD).await
        }
        Err(lookup_error) => match insight {
            // Still deliver the model's commentary along with the lookup failure
            Some(insight) => {
                let embed = serenity::builder::CreateEmbed::default()
                    .title("🤖 AI Insight")
                    .description(format!("{}\n\n{}", insight, lookup_error))
                    .color(0x00b0f4);
                msg.channel_id
                    .send_message(
                        ctx,
                        serenity::builder::CreateMessage::default().embed(embed),
                    )
                    .await
                    .map_err(|e| e.to_string())?;
                Ok(())
            }
            None => Err(lookup_error),
        },
    }
}
