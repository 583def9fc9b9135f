//! Plan builder
//!
//! A fluent API for assembling a `PlanConfig` in code. Mostly used by tests
//! and callers that construct plans programmatically rather than loading a
//! persisted document.
//!
//! # Example
//!
//! ```ignore
//! use fipath_core::{HoldingRecord, PlanBuilder, TaxStatus};
//!
//! let plan = PlanBuilder::new()
//!     .start_age(30)
//!     .annual_spend(60_000.0)
//!     .swr(0.04)
//!     .holding(HoldingRecord::asset(
//!         "Brokerage", "Stock Market", 100_000.0, 1_000.0, 0.07, TaxStatus::Taxable,
//!     ))
//!     .event("Down Payment", 35, 50_000.0)
//!     .build();
//! ```

use super::{HoldingRecord, PlanConfig};
use crate::model::LifeEvent;
use crate::taxes::FilingStatus;

/// Builder for creating plans with chained setters
#[derive(Debug, Clone, Default)]
pub struct PlanBuilder {
    plan: PlanConfig,
}

impl PlanBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Settings
    // =========================================================================

    #[must_use]
    pub fn start_age(mut self, age: u8) -> Self {
        self.plan.settings.start_age = age;
        self
    }

    #[must_use]
    pub fn filing_status(mut self, filing_status: FilingStatus) -> Self {
        self.plan.settings.filing_status = filing_status;
        self
    }

    #[must_use]
    pub fn annual_spend(mut self, amount: f64) -> Self {
        self.plan.settings.annual_spend = amount;
        self
    }

    /// Set the safe withdrawal rate as a fraction (0.04 for 4%)
    #[must_use]
    pub fn swr(mut self, rate: f64) -> Self {
        self.plan.settings.swr = rate;
        self
    }

    #[must_use]
    pub fn inflation(mut self, rate: f64) -> Self {
        self.plan.settings.inflation_rate = rate;
        self
    }

    /// Set the annual contribution escalation (simulated raises)
    #[must_use]
    pub fn contribution_growth(mut self, rate: f64) -> Self {
        self.plan.settings.contribution_growth = rate;
        self
    }

    /// Use the progressive bracket calculator (the default)
    #[must_use]
    pub fn progressive_tax(mut self) -> Self {
        self.plan.settings.use_progressive_tax = true;
        self
    }

    /// Replace the progressive calculator with a flat rate
    #[must_use]
    pub fn flat_tax(mut self, rate: f64) -> Self {
        self.plan.settings.use_progressive_tax = false;
        self.plan.settings.flat_tax_rate = rate;
        self
    }

    #[must_use]
    pub fn retirement_age(mut self, age: u8) -> Self {
        self.plan.settings.retirement_age = age;
        self
    }

    // =========================================================================
    // Portfolio and events
    // =========================================================================

    /// Add a portfolio record; order of calls is the simulation order
    #[must_use]
    pub fn holding(mut self, record: HoldingRecord) -> Self {
        self.plan.portfolio.push(record);
        self
    }

    /// Schedule a one-time life event at the given age, cost in today's
    /// currency
    #[must_use]
    pub fn event(mut self, name: impl Into<String>, age: u8, cost: f64) -> Self {
        self.plan.events.push(LifeEvent {
            name: name.into(),
            age,
            cost,
        });
        self
    }

    #[must_use]
    pub fn build(self) -> PlanConfig {
        self.plan
    }
}
