pub mod best_stock;
pub mod help;
pub mod ping;
pub mod stock_details;

use std::collections::HashMap;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use lazy_static::lazy_static;
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::Context;
use tokio::sync::Mutex;

use crate::api::yahoo::YahooFinanceClient;
use crate::services::{chart_service, symbol_service};
use crate::utils::clean_api_error;

lazy_static! {
    static ref MESSAGE_COOLDOWNS: Mutex<HashMap<UserId, u64>> = Mutex::new(HashMap::new());
}

const COOLDOWN_SECONDS: u64 = 5;

/// Seconds a user still has to wait, given when they last got through
fn cooldown_remaining(last_time: Option<u64>, now: u64) -> Option<u64> {
    let last = last_time?;
    let elapsed = now.saturating_sub(last);
    if elapsed < COOLDOWN_SECONDS {
        Some(COOLDOWN_SECONDS - elapsed)
    } else {
        None
    }
}

/// What the user is asking for, decided from the raw message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// "best" and "stock" both appear somewhere in the question
    BestStock,
    Help,
    Ping,
    /// Anything else; the last word of the message is treated as the company name
    StockQuery { stock_name: String },
}

/// Classify a free-text question. Returns None for empty messages.
pub fn classify(content: &str) -> Option<Intent> {
    let lowered = content.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    if words.contains(&"best") && words.contains(&"stock") {
        return Some(Intent::BestStock);
    }
    if words == ["help"] {
        return Some(Intent::Help);
    }
    if words == ["ping"] {
        return Some(Intent::Ping);
    }
    let stock_name = content.split_whitespace().last()?.to_string();
    Some(Intent::StockQuery { stock_name })
}

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let Some(intent) = classify(&msg.content) else {
        return;
    };

    let user_id = msg.author.id;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    // Check rate limit before doing any work
    let should_cooldown = {
        let mut cooldowns = MESSAGE_COOLDOWNS.lock().await;
        let remaining = cooldown_remaining(cooldowns.get(&user_id).copied(), now);
        if remaining.is_none() {
            cooldowns.insert(user_id, now);
        }
        remaining
    };

    if let Some(remaining) = should_cooldown {
        let _ = msg
            .channel_id
            .send_message(
                ctx,
                serenity::builder::CreateMessage::default().embed(
                    serenity::builder::CreateEmbed::default()
                        .title("Slow Down")
                        .description(format!(
                            "⏳ Please wait {} seconds before asking again.",
                            remaining
                        ))
                        .color(0xffa500),
                ),
            )
            .await;
        return;
    }

    let result = match intent {
        Intent::BestStock => best_stock::execute(ctx, msg).await,
        Intent::Help => help::execute(ctx, msg).await,
        Intent::Ping => ping::execute(ctx, msg).await,
        Intent::StockQuery { stock_name } => stock_details::execute(ctx, msg, &stock_name).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ Error handling message {:?}: {}", msg.content, e);

        let clean = clean_api_error(&e);
        let user_message = if clean.starts_with('❌') {
            clean
        } else {
            format!("❌ {}", clean)
        };

        let embed = serenity::builder::CreateEmbed::default()
            .title("Something Went Wrong")
            .description(user_message)
            .color(0xff0000);

        let _ = msg
            .channel_id
            .send_message(
                ctx,
                serenity::builder::CreateMessage::default().embed(embed),
            )
            .await;
    }
}

/// Fetch a stock's history, render the candlestick chart, and send it as a
/// file attachment.
pub(crate) async fn send_chart(
    ctx: &Context,
    msg: &Message,
    client: &YahooFinanceClient,
    stock_name: &str,
    period: &str,
) -> Result<(), String> {
    let symbol = symbol_service::resolve(stock_name);
    let display_name = symbol_service::display_symbol(&symbol);

    let candles = client
        .chart(&symbol, period)
        .await
        .map_err(|e| format!("❌ Error fetching stock chart: {}", e))?;

    tracing::info!(
        "Generating chart for {display_name} over {period} ({} candles)",
        candles.len()
    );
    let chart_data = chart_service::render_candlestick(&display_name, period, &candles, 1024, 768)?;
    tracing::debug!("✓ Chart generated: {} bytes", chart_data.len());

    let temp_path = format!("/tmp/chart_{}_{}.png", display_name, period);
    fs::write(&temp_path, &chart_data)
        .map_err(|e| format!("Failed to write chart file: {}", e))?;

    let attachment = serenity::all::CreateAttachment::path(&temp_path)
        .await
        .map_err(|e| format!("Failed to create attachment: {}", e))?;

    msg.channel_id
        .send_message(
            ctx,
            serenity::builder::CreateMessage::default().add_file(attachment),
        )
        .await
        .map_err(|e| format!("Failed to send chart: {}", e))?;

    // Clean up once Discord has taken the upload
    let temp_path_clone = temp_path.clone();
    tokio::spawn(async move {
        tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;
        if let Err(e) = fs::remove_file(&temp_path_clone) {
            tracing::warn!(
                "Failed to delete temporary chart file {}: {}",
                temp_path_clone,
                e
            );
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_stock_intent_needs_both_words() {
        assert_eq!(classify("best stock in 2 months"), Some(Intent::BestStock));
        assert_eq!(
            classify("which stock is the BEST right now"),
            Some(Intent::BestStock)
        );
        // "best" alone falls through to a stock query
        assert_eq!(
            classify("best performer"),
            Some(Intent::StockQuery {
                stock_name: "performer".to_string()
            })
        );
    }

    #[test]
    fn test_stock_query_takes_last_word() {
        assert_eq!(
            classify("tell me about WIPRO"),
            Some(Intent::StockQuery {
                stock_name: "WIPRO".to_string()
            })
        );
    }

    #[test]
    fn test_help_and_ping_must_be_the_whole_message() {
        assert_eq!(classify("help"), Some(Intent::Help));
        assert_eq!(classify("  ping "), Some(Intent::Ping));
        assert_eq!(
            classify("help me pick a stock please"),
            Some(Intent::StockQuery {
                stock_name: "please".to_string()
            })
        );
    }

    #[test]
    fn test_empty_message_is_ignored() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
    }

    #[test]
    fn test_cooldown_window() {
        // first message from a user always passes
        assert_eq!(cooldown_remaining(None, 100), None);
        // a second message 2s later still has 3s to wait
        assert_eq!(cooldown_remaining(Some(100), 102), Some(3));
        // after the window expires the user gets through again
        assert_eq!(cooldown_remaining(Some(100), 105), None);
    }
}
