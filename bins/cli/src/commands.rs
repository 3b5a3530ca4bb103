//! Subcommand handlers.
//!
//! Each handler reads its input, calls into `finpack-core`, and prints the
//! result. Domain errors are converted to `AppError` here.

use std::path::Path;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;

use chrono::{NaiveDate, Utc};
use finpack_core::alerts::CostWatcher;
use finpack_core::budget::{BudgetError, BurnRateForecaster, SpendPeriod, SpendSource};
use finpack_core::forecast::ForecastService;
use finpack_core::ledger::AuditService;
use finpack_core::reconcile::ReconcileService;
use finpack_shared::{AppConfig, AppError};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::cli::Command;
use crate::input::{self, JsonLinesStream, StdoutNotifier};

/// Pack identifier reported by `info`.
pub const PACK_ID: &str = "pack.finance";

/// Agents reported by `list`.
pub const AGENTS: [&str; 5] = ["budgeteer", "reconcile", "forecast", "audit", "cost-watcher"];

/// Runs one subcommand.
pub fn run(command: Command, config: &AppConfig) -> Result<ExitCode, AppError> {
    match command {
        Command::Info => {
            print_json(&json!({
                "pack_id": PACK_ID,
                "version": env!("CARGO_PKG_VERSION"),
                "agents": AGENTS,
                "status": "active",
            }))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::List => {
            for agent in AGENTS {
                println!("{agent}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Audit { ledger } => audit(&ledger),
        Command::Forecast { series, window } => {
            forecast(&series, window.unwrap_or(config.forecast.window))
        }
        Command::Reconcile {
            ledger,
            account,
            expected,
            start,
            end,
        } => reconcile(&ledger, &account, expected, start, end),
        Command::Budget {
            spend,
            days_elapsed,
            days_in_month,
            limit,
            today,
        } => {
            let forecaster = BurnRateForecaster::new(limit.unwrap_or(config.budget.limit))
                .with_channel(config.budget.channel.clone());
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let report = forecaster.build_weekly_report(
                &ReportedSpend(spend),
                days_elapsed,
                days_in_month,
                today,
                None,
            )?;
            println!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Watch { events, threshold } => {
            let watcher = CostWatcher::new(
                config.alerts.channel.clone(),
                threshold.unwrap_or(config.alerts.threshold),
            );
            let mut stream = JsonLinesStream::open(&events)?;
            let posted =
                watcher.stream_alerts(&mut stream, &StdoutNotifier, &AtomicBool::new(false))?;
            info!(posted, "replayed spend events");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn audit(path: &Path) -> Result<ExitCode, AppError> {
    let entries = input::parse_ledger(&input::read_file(path)?)?;
    let report = AuditService::verify_entries(&entries);
    let duplicates = AuditService::detect_duplicates(&entries);

    print_json(&json!({
        "report": report,
        "duplicates": duplicates,
    }))?;

    Ok(if report.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn forecast(path: &Path, window: usize) -> Result<ExitCode, AppError> {
    let points = input::parse_series(&input::read_file(path)?)?;
    let result = ForecastService::simple_moving_average(&points, window)?;
    print_json(&result)?;
    Ok(ExitCode::SUCCESS)
}

fn reconcile(
    path: &Path,
    account: &str,
    expected: Decimal,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<ExitCode, AppError> {
    let entries = input::parse_ledger(&input::read_file(path)?)?;
    let report =
        ReconcileService::reconcile_account(entries.as_slice(), account, expected, start, end)?;
    print_json(&report)?;
    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Internal(format!("failed to encode output: {err}")))?;
    println!("{text}");
    Ok(())
}

/// Spend figure supplied on the command line.
struct ReportedSpend(Decimal);

impl SpendSource for ReportedSpend {
    fn unblended_cost(&self, _period: &SpendPeriod) -> Result<Option<String>, BudgetError> {
        Ok(Some(self.0.to_string()))
    }
}
