//! Sales history ingestion
//!
//! Two entry paths converge on the same validated batch: a delimited
//! two-column import and one-at-a-time manual entry. Either path must
//! reach the forecast-eligibility floor before the forecast pipeline is
//! invoked; insufficient input is rejected, never truncated or padded.

use shared::{check_forecast_eligible, coerce_sales_point, SalesPoint, ValidationError, MIN_HISTORY_POINTS};

/// Parse a two-column `ds,y` table. The header row is skipped and rows
/// that fail coercion are dropped from the batch; the surviving batch
/// must still be forecast-eligible.
pub fn parse_sales_csv(text: &str) -> Result<Vec<SalesPoint>, ValidationError> {
    let points: Vec<SalesPoint> = text
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut columns = line.splitn(2, ',');
            let ds = columns.next()?;
            let y_raw = columns.next()?;
            coerce_sales_point(ds, y_raw)
        })
        .collect();
    check_forecast_eligible(&points)?;
    Ok(points)
}

/// Accumulator for manually entered sales points. Lives in memory only
/// and is cleared after a successful forecast submission, not before.
#[derive(Debug, Default)]
pub struct ManualHistory {
    points: Vec<SalesPoint>,
}

impl ManualHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one point; each point is validated on entry
    pub fn add(&mut self, ds: &str, y_raw: &str) -> Result<(), ValidationError> {
        let point =
            coerce_sales_point(ds, y_raw).ok_or_else(|| ValidationError::InvalidSalesPoint {
                ds: ds.to_string(),
                y: y_raw.to_string(),
            })?;
        self.points.push(point);
        Ok(())
    }

    pub fn points(&self) -> &[SalesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// How many more points are needed before the batch is
    /// forecast-eligible
    pub fn remaining(&self) -> usize {
        MIN_HISTORY_POINTS.saturating_sub(self.points.len())
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }
}
