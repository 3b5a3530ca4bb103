//! Shared types, errors, formatting, and configuration for finpack.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes with display conventions
//! - Display formatting for amounts and percentages
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod format;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use format::{format_currency, format_percentage, group_thousands};
