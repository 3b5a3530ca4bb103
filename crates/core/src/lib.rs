//! Core business logic for finpack.
//!
//! This crate contains pure finance logic with ZERO file, network, or
//! console dependencies. Anything that talks to the outside world is
//! supplied by the caller through a trait.
//!
//! # Modules
//!
//! - `ledger` - Ledger entry audit checks and duplicate detection
//! - `forecast` - Moving-average forecasts and trend detection
//! - `reconcile` - Account reconciliation against an expected balance
//! - `budget` - Budget arithmetic and burn-rate forecasting
//! - `alerts` - Threshold alerts over spend events
//! - `notify` - Outbound message delivery

pub mod alerts;
pub mod budget;
pub mod forecast;
pub mod ledger;
pub mod notify;
pub mod reconcile;
