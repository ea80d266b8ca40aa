use super::types::{InvestmentMode, ProjectionInput, ProjectionResult};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Projects a monthly installment paid at the start of each month.
///
/// The monthly rate is the compound equivalent of the annual rate, so twelve
/// months of growth reproduce `rate_percent` exactly. The total is rounded once,
/// after the full annuity-due expression is evaluated.
pub fn sip_projection(installment: f64, rate_percent: f64, years: u32) -> ProjectionResult {
    let periods = f64::from(years) * MONTHS_PER_YEAR;
    let invested_amount = installment * periods;

    if rate_percent == 0.0 {
        return ProjectionResult::flat(invested_amount);
    }

    let monthly_rate = monthly_rate_from_annual(rate_percent / 100.0);
    let growth = (1.0 + monthly_rate).powf(periods);
    let total_value = round_half_up(
        installment * ((growth - 1.0) / monthly_rate) * (1.0 + monthly_rate),
    );

    ProjectionResult::from_total(invested_amount, total_value)
}

/// Projects a single upfront sum with annual compounding.
pub fn lumpsum_projection(principal: f64, rate_percent: f64, years: u32) -> ProjectionResult {
    if rate_percent == 0.0 {
        return ProjectionResult::flat(principal);
    }

    let annual_rate = rate_percent / 100.0;
    let total_value = round_half_up(principal * (1.0 + annual_rate).powf(f64::from(years)));

    ProjectionResult::from_total(principal, total_value)
}

pub fn project(input: &ProjectionInput) -> ProjectionResult {
    project_years(input, input.years)
}

pub(crate) fn project_years(input: &ProjectionInput, years: u32) -> ProjectionResult {
    match input.mode {
        InvestmentMode::Sip => sip_projection(input.amount, input.rate_percent, years),
        InvestmentMode::Lumpsum => lumpsum_projection(input.amount, input.rate_percent, years),
    }
}

fn monthly_rate_from_annual(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / MONTHS_PER_YEAR) - 1.0
}

/// Nearest whole unit, ties toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
