use plotters::prelude::*;

use crate::models::Candle;

/// Period used for single-stock charts when the question names none
pub const DEFAULT_CHART_PERIOD: &str = "6mo";

/// Render an OHLC series as a candlestick chart PNG.
///
/// Draws through a temp file because BitMapBackend wants a path, then reads
/// the bytes back and removes the file.
pub fn render_candlestick(
    display_symbol: &str,
    period: &str,
    candles: &[Candle],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    if candles.len() < 2 {
        return Err(format!("❌ No data available for {}.", display_symbol));
    }

    let temp_file = format!(
        "/tmp/nsebot_chart_{}.png",
        chrono::Utc::now().timestamp_millis()
    );

    {
        let backend = BitMapBackend::new(&temp_file, (width, height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        // Price range spans the wicks, not just the closes
        let min_price = candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        let max_price = candles
            .iter()
            .map(|c| c.high)
            .fold(f64::NEG_INFINITY, f64::max);

        let price_range = (max_price - min_price).max(1e-8);
        let padding = price_range * 0.1;
        let y_min = (min_price - padding).max(0.0);
        let y_max = max_price + padding;

        let x_min = candles[0].timestamp;
        let x_max = candles[candles.len() - 1].timestamp;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                &format!("{} Stock Price - Last {}", display_symbol, period),
                ("sans-serif", 40.0).into_font(),
            )
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .y_desc("Stock Price (INR)")
            .x_desc("Date")
            .draw()
            .map_err(|e| format!("Failed to draw mesh: {}", e))?;

        let body_width = candle_px_width(width, candles.len());
        chart
            .draw_series(candles.iter().map(|c| {
                CandleStick::new(
                    c.timestamp,
                    c.open,
                    c.high,
                    c.low,
                    c.close,
                    GREEN.filled(),
                    RED.filled(),
                    body_width,
                )
            }))
            .map_err(|e| format!("Failed to draw candles: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render chart: {}", e))?;
    }

    use std::fs;
    let image_data =
        fs::read(&temp_file).map_err(|e| format!("Failed to read chart file: {}", e))?;
    let _ = fs::remove_file(&temp_file);

    Ok(image_data)
}

/// Candle body width in pixels, leaving a 2px gap between neighbors
fn candle_px_width(chart_width: u32, count: usize) -> u32 {
    let plot_width = chart_width.saturating_sub(90);
    let per_candle = plot_width / count.max(1) as u32;
    per_candle.saturating_sub(2).clamp(1, 12)
}
