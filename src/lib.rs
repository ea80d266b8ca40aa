//! SIP and lumpsum investment growth estimator.
//!
//! `core` holds the pure valuation engine and the year-by-year series builder;
//! `api` exposes it through a clap CLI and an axum JSON endpoint.

pub mod api;
pub mod core;
pub mod error;

pub use error::{AppError, AppResult};
