use clap::{Args, Parser, Subcommand, ValueEnum};

use super::{ProjectionResponse, build_projection_response};
use crate::core::{
    DEFAULT_AMOUNT, DEFAULT_RATE_PERCENT, DEFAULT_YEARS, InvestmentMode, clamp_input, format_inr,
};
use crate::error::AppResult;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliInvestmentMode {
    Sip,
    Lumpsum,
}

impl From<CliInvestmentMode> for InvestmentMode {
    fn from(value: CliInvestmentMode) -> Self {
        match value {
            CliInvestmentMode::Sip => InvestmentMode::Sip,
            CliInvestmentMode::Lumpsum => InvestmentMode::Lumpsum,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "sipcalc",
    about = "SIP and lumpsum investment growth estimator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Project a single investment and print the result
    Project(ProjectArgs),
    /// Serve the projection JSON API over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[arg(long, value_enum, default_value_t = CliInvestmentMode::Sip)]
    mode: CliInvestmentMode,
    #[arg(
        long,
        default_value_t = DEFAULT_AMOUNT,
        help = "Monthly installment (sip) or upfront sum (lumpsum), clamped to 500..=1000000 / 500..=10000000"
    )]
    amount: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_RATE_PERCENT,
        help = "Expected annual return in percent, clamped to 1..=30"
    )]
    rate: f64,
    #[arg(
        long,
        default_value_t = f64::from(DEFAULT_YEARS),
        help = "Time period in whole years, clamped to 1..=40"
    )]
    years: f64,
    #[arg(long, help = "Include the year by year growth table")]
    breakdown: bool,
    #[arg(long, help = "Print the JSON document served by the HTTP API")]
    json: bool,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

pub fn run_projection_command(args: &ProjectArgs) -> AppResult<String> {
    let input = clamp_input(args.mode.into(), args.amount, args.rate, args.years);
    let response = build_projection_response(&input, args.breakdown);

    if args.json {
        let mut out = serde_json::to_string_pretty(&response)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(render_text(&response))
}

pub fn render_text(response: &ProjectionResponse) -> String {
    let input = &response.input;
    let summary = &response.summary;
    let mut lines = vec![
        format!("{} Calculator", input.mode.label()),
        summary_line(input.mode.amount_label(), &format_inr(input.amount)),
        summary_line(
            "Expected return rate (p.a)",
            &format!("{}%", input.rate_percent),
        ),
        summary_line("Time period", &format!("{} Yr", input.years)),
        String::new(),
        summary_line("Invested amount", &summary.invested_amount),
        summary_line("Est. returns", &summary.estimated_returns),
        summary_line("Total value", &summary.total_value),
    ];
    lines.extend(summary.chart.iter().map(|slice| {
        summary_line(
            &format!("{} share", slice.name),
            &format!("{:.1}%", slice.share * 100.0),
        )
    }));

    if !response.yearly.is_empty() {
        lines.push(String::new());
        lines.push(table_line(
            "Year",
            "Invested Amount",
            "Est. Returns",
            "Total Value",
        ));
        lines.push("-".repeat(68));
        lines.extend(response.yearly.iter().map(|row| {
            table_line(
                &row.year.to_string(),
                &format_inr(row.result.invested_amount),
                &format_inr(row.result.estimated_returns),
                &format_inr(row.result.total_value),
            )
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn summary_line(label: &str, value: &str) -> String {
    format!("  {label:<28}{value:>18}")
}

fn table_line(year: &str, invested: &str, returns: &str, total: &str) -> String {
    format!("{year:>5} {invested:>20} {returns:>20} {total:>20}")
}
