use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentMode {
    /// Monthly installment (systematic investment plan).
    Sip,
    /// Single upfront sum.
    Lumpsum,
}

impl InvestmentMode {
    pub fn label(self) -> &'static str {
        match self {
            InvestmentMode::Sip => "SIP",
            InvestmentMode::Lumpsum => "Lumpsum",
        }
    }

    pub fn amount_label(self) -> &'static str {
        match self {
            InvestmentMode::Sip => "Monthly investment",
            InvestmentMode::Lumpsum => "Total investment",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    pub amount: f64,
    pub rate_percent: f64,
    pub years: u32,
    pub mode: InvestmentMode,
}

impl ProjectionInput {
    pub fn new(mode: InvestmentMode, amount: f64, rate_percent: f64, years: u32) -> Self {
        Self {
            amount,
            rate_percent,
            years,
            mode,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub invested_amount: f64,
    pub estimated_returns: f64,
    pub total_value: f64,
}

impl ProjectionResult {
    /// Builds a result from the invested sum and the rounded total; returns are
    /// always derived so the three figures stay consistent.
    pub(crate) fn from_total(invested_amount: f64, total_value: f64) -> Self {
        Self {
            invested_amount,
            estimated_returns: total_value - invested_amount,
            total_value,
        }
    }

    pub(crate) fn flat(invested_amount: f64) -> Self {
        Self {
            invested_amount,
            estimated_returns: 0.0,
            total_value: invested_amount,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    pub year: u32,
    #[serde(flatten)]
    pub result: ProjectionResult,
}
