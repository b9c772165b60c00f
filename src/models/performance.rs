//! Best-performer scan models

/// Winner of a best-performer scan over the fixed symbol table
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceResult {
    pub company: &'static str,
    /// (last close - first close) / first close over the scanned period
    pub fractional_return: f64,
}
