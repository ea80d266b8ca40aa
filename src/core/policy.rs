use super::types::{InvestmentMode, ProjectionInput};

pub const MIN_AMOUNT: f64 = 500.0;
pub const MAX_SIP_AMOUNT: f64 = 1_000_000.0;
pub const MAX_LUMPSUM_AMOUNT: f64 = 10_000_000.0;
pub const MIN_RATE_PERCENT: f64 = 1.0;
pub const MAX_RATE_PERCENT: f64 = 30.0;
pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 40;

pub const DEFAULT_AMOUNT: f64 = 25_000.0;
pub const DEFAULT_RATE_PERCENT: f64 = 12.0;
pub const DEFAULT_YEARS: u32 = 10;

/// Ranges a caller must hold inputs to before invoking the engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputLimits {
    pub min_amount: f64,
    pub max_amount: f64,
    pub min_rate_percent: f64,
    pub max_rate_percent: f64,
    pub min_years: u32,
    pub max_years: u32,
}

impl InputLimits {
    pub fn for_mode(mode: InvestmentMode) -> Self {
        let max_amount = match mode {
            InvestmentMode::Sip => MAX_SIP_AMOUNT,
            InvestmentMode::Lumpsum => MAX_LUMPSUM_AMOUNT,
        };
        Self {
            min_amount: MIN_AMOUNT,
            max_amount,
            min_rate_percent: MIN_RATE_PERCENT,
            max_rate_percent: MAX_RATE_PERCENT,
            min_years: MIN_YEARS,
            max_years: MAX_YEARS,
        }
    }

    /// Non-finite values collapse to zero before range clamping.
    pub fn sanitize(value: f64) -> f64 {
        if value.is_finite() { value } else { 0.0 }
    }

    pub fn clamp_amount(&self, amount: f64) -> f64 {
        Self::sanitize(amount).clamp(self.min_amount, self.max_amount)
    }

    pub fn clamp_rate(&self, rate_percent: f64) -> f64 {
        Self::sanitize(rate_percent).clamp(self.min_rate_percent, self.max_rate_percent)
    }

    pub fn clamp_years(&self, years: f64) -> u32 {
        let years = Self::sanitize(years).trunc();
        years.clamp(f64::from(self.min_years), f64::from(self.max_years)) as u32
    }
}

/// Builds an engine-ready input from raw caller values.
pub fn clamp_input(mode: InvestmentMode, amount: f64, rate_percent: f64, years: f64) -> ProjectionInput {
    let limits = InputLimits::for_mode(mode);
    ProjectionInput::new(
        mode,
        limits.clamp_amount(amount),
        limits.clamp_rate(rate_percent),
        limits.clamp_years(years),
    )
}

/// Moves an input to another mode, adjusting only the amount: SIP caps it at the
/// monthly maximum, lumpsum lifts it to the minimum ticket.
pub fn switch_mode(input: &ProjectionInput, mode: InvestmentMode) -> ProjectionInput {
    let amount = match mode {
        InvestmentMode::Sip => input.amount.min(MAX_SIP_AMOUNT),
        InvestmentMode::Lumpsum => input.amount.max(MIN_AMOUNT),
    };
    ProjectionInput { amount, mode, ..*input }
}

pub fn default_input(mode: InvestmentMode) -> ProjectionInput {
    ProjectionInput::new(mode, DEFAULT_AMOUNT, DEFAULT_RATE_PERCENT, DEFAULT_YEARS)
}
