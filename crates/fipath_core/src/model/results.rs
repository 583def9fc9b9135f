//! Projection results
//!
//! One `ProjectionRow` per simulated year, in increasing year order,
//! immutable once emitted. Per-entity figures are reported in real dollars
//! (today's purchasing power) and align positionally with the projection's
//! `columns`, so output columns are driven entirely by the configured entity
//! names.

use serde::{Deserialize, Serialize};

/// Cumulative inflation factor after `years` years at a fixed annual rate.
///
/// Dividing a nominal amount by this factor expresses it in real (year-0)
/// dollars; multiplying a today's-currency cost by it inflates the cost to
/// the given year. Year 0 yields a factor of exactly 1.
pub fn inflation_factor(rate: f64, years: i32) -> f64 {
    (1.0 + rate).powi(years)
}

/// One simulated year of output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionRow {
    /// Calendar year
    pub year: i16,
    /// Simulated age
    pub age: u8,
    /// Real-dollar balance per entity, aligned with `Projection::columns`.
    /// Liabilities are signed negative.
    pub balances: Vec<f64>,
    /// Attributed net passive income per entity, aligned with
    /// `Projection::columns`. Always 0 for liabilities and for assets outside
    /// the year's withdrawal base.
    pub incomes: Vec<f64>,
    /// Aggregate real-dollar net worth (assets minus liabilities)
    pub net_worth: f64,
    /// Net annual passive income the withdrawal base supports this year
    pub passive_income: f64,
    /// The plan's spending target. Constant across rows: it is a target, not
    /// an inflation-adjusted figure.
    pub annual_spending: f64,
}

/// Complete results from a single simulation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Projection {
    /// Entity names in configured portfolio order; `balances` and `incomes`
    /// in every row align with this
    pub columns: Vec<String>,
    pub rows: Vec<ProjectionRow>,
}

impl Projection {
    /// First year where net passive income covers the spending target, if
    /// financial independence is reached within the horizon
    pub fn fi_row(&self) -> Option<&ProjectionRow> {
        self.rows
            .iter()
            .find(|row| row.passive_income >= row.annual_spending)
    }

    /// Net worth in the final simulated year (0 for an empty projection)
    pub fn final_net_worth(&self) -> f64 {
        self.rows.last().map_or(0.0, |row| row.net_worth)
    }

    /// Rows up to and including the given age, for callers that display a
    /// shorter window than the simulated horizon
    pub fn rows_through_age(&self, age: u8) -> impl Iterator<Item = &ProjectionRow> {
        self.rows.iter().filter(move |row| row.age <= age)
    }
}
