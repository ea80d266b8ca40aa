mod engine;
mod format;
mod policy;
mod series;
mod summary;
mod types;

pub use engine::{lumpsum_projection, project, round_half_up, sip_projection};
pub use format::format_inr;
pub use policy::{
    DEFAULT_AMOUNT, DEFAULT_RATE_PERCENT, DEFAULT_YEARS, InputLimits, clamp_input, default_input,
    switch_mode,
};
pub use series::{ProjectionSeries, build_series};
pub use summary::{ChartSlice, ProjectionSummary};
pub use types::{InvestmentMode, ProjectionInput, ProjectionResult, YearlyProjection};
