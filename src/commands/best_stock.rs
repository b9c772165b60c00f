use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::{detail_service, scan_service, timeframe_service};

/// Answer a "best stock" question: extract the timeframe, scan the symbol
/// table for the best performer, then reply with its details and chart.
pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    tracing::info!(
        "🏆 Best-stock query from user {}: {:?}",
        msg.author.id,
        msg.content
    );

    let client = {
        let data = ctx.data.read().await;
        data.get::<crate::MarketData>()
            .ok_or("Market data client not initialized".to_string())?
            .clone()
    };

    let timeframe = timeframe_service::extract_timeframe(&msg.content);

    // The scan makes ten serial API calls; show typing while it runs
    if let Err(e) = msg.channel_id.broadcast_typing(ctx.http.as_ref()).await {
        tracing::warn!("Failed to broadcast typing: {}", e);
    }

    let best = scan_service::find_best_performer(&client, &timeframe)
        .await?
        .ok_or("❌ Could not determine the best stock.".to_string())?;

    tracing::info!(
        "✓ Best performer over {}: {} ({:+.2}%)",
        timeframe,
        best.company,
        best.fractional_return * 100.0
    );

    let details = detail_service::get_stock_details(&client, best.company).await?;

    let mut embed = serenity::builder::CreateEmbed::default()
        .title(format!("🏆 Best-Performing Stock - Last {}", timeframe))
        .description(format!(
            "The best-performing stock in the last **{}** is **{}** ({:+.2}%)",
            timeframe,
            best.company,
            best.fractional_return * 100.0
        ))
        .color(0x00ff00);
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

    super::send_chart(ctx, msg, &client, best.company, &timeframe).await
}
