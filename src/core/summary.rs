use serde::Serialize;

use super::format::format_inr;
use super::types::ProjectionResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: f64,
    /// Fraction of the total value, in `[0, 1]`.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub invested_amount: String,
    pub estimated_returns: String,
    pub total_value: String,
    pub chart: [ChartSlice; 2],
}

impl ProjectionSummary {
    pub fn from_result(result: &ProjectionResult) -> Self {
        let share = |value: f64| {
            if result.total_value > 0.0 {
                value / result.total_value
            } else {
                0.0
            }
        };

        Self {
            invested_amount: format_inr(result.invested_amount),
            estimated_returns: format_inr(result.estimated_returns),
            total_value: format_inr(result.total_value),
            chart: [
                ChartSlice {
                    name: "Invested Amount",
                    value: result.invested_amount,
                    share: share(result.invested_amount),
                },
                ChartSlice {
                    name: "Est. Returns",
                    value: result.estimated_returns,
                    share: share(result.estimated_returns),
                },
            ],
        }
    }
}
