//! Data models for nsebot commands and services
//!
//! This module organizes the result and data transfer structs used across
//! commands. Each model represents the output of a service operation.

pub mod candle;
pub mod details;
pub mod performance;

// Re-export commonly used types for convenience
pub use candle::Candle;
pub use details::StockDetails;
pub use performance::PerformanceResult;
