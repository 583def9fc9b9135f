//! Net worth and financial independence projection engine
//!
//! This crate simulates a portfolio of growth assets and amortizing
//! liabilities year by year until age 85, under inflation, contribution
//! escalation, progressive (or flat) taxation, and scheduled one-time life
//! events. It supports:
//! - Growth assets with escalating annual contributions
//! - Amortizing liabilities with fixed monthly payments
//! - One-time life events funded by a tiered withdrawal order
//! - Progressive federal brackets with single/joint standard deductions
//! - Inflation-adjusted ("real dollar") reporting and net income attribution
//!
//! The engine is fully deterministic: a run is a pure function of its plan
//! configuration and the injected start year. It never reads the clock,
//! performs I/O, or samples randomness, so identical inputs produce
//! bit-identical projections.
//!
//! # Builder
//!
//! Use the fluent builder for constructing plans in code:
//!
//! ```ignore
//! use fipath_core::{HoldingRecord, PlanBuilder, TaxStatus, run_simulation};
//!
//! let plan = PlanBuilder::new()
//!     .start_age(30)
//!     .annual_spend(60_000.0)
//!     .holding(HoldingRecord::asset(
//!         "Brokerage", "Stock Market", 100_000.0, 1_000.0, 0.07, TaxStatus::Taxable,
//!     ))
//!     .holding(HoldingRecord::liability("Mortgage", 300_000.0, 0.04, 2_000.0))
//!     .event("Down Payment", 35, 50_000.0)
//!     .build();
//!
//! let projection = run_simulation(&plan, 2025)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod simulation;
pub mod taxes;
pub mod withdrawal;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{HoldingRecord, PlanBuilder, PlanConfig, Settings};
pub use error::ConfigError;
pub use model::{Asset, Entity, Liability, LifeEvent, Projection, ProjectionRow, TaxStatus};
pub use simulation::{TERMINAL_AGE, run_simulation};
pub use taxes::FilingStatus;
