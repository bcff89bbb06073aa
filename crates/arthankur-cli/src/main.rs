mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::cash_flow::CashFlowArgs;
use commands::credit_scoring::CreditScoreArgs;
use commands::format::FormatInrArgs;
use commands::funding::FundingStatsArgs;
use commands::loans::LoanArgs;
use commands::working_capital::WorkingCapitalArgs;

/// Loan, cash-flow, working-capital and funding calculators for Arthankur
#[derive(Parser)]
#[command(
    name = "arth",
    version,
    about = "Loan, cash-flow, working-capital and funding calculators",
    long_about = "A CLI over the Arthankur financial engine with decimal precision. \
                  Computes loan EMIs and schedules, fixed-growth cash flow projections, \
                  working capital ratios, a heuristic CIBIL-style score and funding \
                  request summaries. Inputs come from --input files, piped JSON or flags."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the EMI, total interest and total payment for a loan
    Emi(LoanArgs),
    /// Build a month-by-month amortization schedule
    AmortizationSchedule(LoanArgs),
    /// Project monthly cash flow over 3, 6 or 12 months
    CashFlow(CashFlowArgs),
    /// Liquidity ratios, cash conversion cycle and advisory flags
    WorkingCapital(WorkingCapitalArgs),
    /// Heuristic CIBIL-style credit score (not a bureau score)
    CreditScore(CreditScoreArgs),
    /// Summarise a list of funding requests
    FundingStats(FundingStatsArgs),
    /// Format an amount in rupees with Indian digit grouping
    FormatInr(FormatInrArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::loans::run_emi(args),
        Commands::AmortizationSchedule(args) => commands::loans::run_schedule(args),
        Commands::CashFlow(args) => commands::cash_flow::run_cash_flow(args),
        Commands::WorkingCapital(args) => commands::working_capital::run_working_capital(args),
        Commands::CreditScore(args) => commands::credit_scoring::run_credit_score(args),
        Commands::FundingStats(args) => commands::funding::run_funding_stats(args),
        Commands::FormatInr(args) => commands::format::run_format_inr(args),
        Commands::Version => {
            println!("arth {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
