//! Income/expense chart data

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Totals for one calendar period, as aggregated by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// Period label, e.g. "2024-01"
    pub month: String,
    pub income: Money,
    pub expenses: Money,
}

/// Maps chart values onto a fixed drawing height.
///
/// The largest income or expense value spans the full `ceiling`. An all-zero
/// (or empty) series uses a factor of 1 so nothing divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    max: f64,
    factor: f64,
}

impl ChartScale {
    pub fn new(points: &[ChartDataPoint], ceiling: f64) -> Self {
        let max = points
            .iter()
            .flat_map(|p| [p.income.as_f64(), p.expenses.as_f64()])
            .fold(0.0_f64, f64::max);

        let factor = if max > 0.0 { ceiling / max } else { 1.0 };
        Self { max, factor }
    }

    /// Largest value in the series (0 when empty)
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Scaled height of `value`
    pub fn height(&self, value: Money) -> f64 {
        value.as_f64() * self.factor
    }
}
