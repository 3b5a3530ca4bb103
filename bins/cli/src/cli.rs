//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "br-fin", version, about = "Finance agent pack for ledgers, budgets, and forecasts")]
pub struct Cli {
    /// Emit JSON log lines (overrides config file)
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show pack information
    Info,

    /// List available agents
    List,

    /// Verify a JSON array of ledger entries and report duplicates
    Audit {
        /// Path to the ledger JSON file
        ledger: PathBuf,
    },

    /// Forecast the next value of a JSON time series
    Forecast {
        /// Path to the series JSON file
        series: PathBuf,

        /// Moving-average window (overrides config file)
        #[arg(short, long)]
        window: Option<usize>,
    },

    /// Reconcile an account against an expected balance
    Reconcile {
        /// Path to the ledger JSON file
        ledger: PathBuf,

        /// Account to reconcile
        #[arg(long)]
        account: String,

        /// Expected closing balance
        #[arg(long, allow_negative_numbers = true)]
        expected: Decimal,

        /// First day of the period (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last day of the period (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },

    /// Print the weekly burn-rate report for a month-to-date spend
    Budget {
        /// Month-to-date spend
        #[arg(long)]
        spend: Decimal,

        /// Days elapsed this month
        #[arg(long)]
        days_elapsed: u32,

        /// Days in the month
        #[arg(long)]
        days_in_month: u32,

        /// Monthly budget limit (overrides config file)
        #[arg(long)]
        limit: Option<Decimal>,

        /// Report date, defaults to today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Replay spend events from a JSON-lines file and print alerts
    Watch {
        /// Path to the events file, one JSON object per line
        events: PathBuf,

        /// Alert threshold (overrides config file)
        #[arg(long)]
        threshold: Option<Decimal>,
    },
}
