//! Plan configuration
//!
//! `PlanConfig` is the engine's input: the persisted document with top-level
//! `portfolio`, `events`, and `settings` keys, deserialized directly. Record
//! keys are accepted in both snake_case and the Title-case form older
//! documents used (`"Name"`, `"Balance"`, `"Tax Type"`, ...), via serde
//! aliases.
//!
//! The engine never simulates against the configuration itself: it builds an
//! owned working set of entities from the records at the start of every run,
//! so caller-held configuration is never aliased or mutated and repeated
//! runs are independent.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{Asset, Entity, Liability, LifeEvent, TaxStatus};
use crate::taxes::FilingStatus;

pub mod builder;

pub use builder::PlanBuilder;

/// Portfolio records with this category build a `Liability`; any other
/// category builds an `Asset`.
pub const LIABILITY_CATEGORY: &str = "Debt/Liability";

fn default_start_age() -> u8 {
    30
}

fn default_annual_spend() -> f64 {
    60_000.0
}

fn default_swr() -> f64 {
    0.04
}

fn default_inflation_rate() -> f64 {
    0.025
}

fn default_contribution_growth() -> f64 {
    0.03
}

fn default_flat_tax_rate() -> f64 {
    0.15
}

fn default_retirement_age() -> u8 {
    65
}

fn default_true() -> bool {
    true
}

/// One portfolio entry, asset or liability, as persisted
///
/// For assets, `monthly` is the monthly contribution (the engine works with
/// `monthly * 12` per year) and `rate` is the annual growth rate. For
/// liabilities, `monthly` is the fixed payment and `rate` the annual
/// interest rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoldingRecord {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Category")]
    pub category: String,
    #[serde(alias = "Balance")]
    pub balance: f64,
    #[serde(alias = "Monthly", alias = "monthlyContribution", alias = "monthlyPayment")]
    pub monthly: f64,
    #[serde(alias = "Rate", alias = "growthRate", alias = "interestRate")]
    pub rate: f64,
    #[serde(default, alias = "Tax Type", alias = "taxStatus")]
    pub tax_status: TaxStatus,
}

impl HoldingRecord {
    /// Convenience constructor for an asset record
    pub fn asset(
        name: impl Into<String>,
        category: impl Into<String>,
        balance: f64,
        monthly_contribution: f64,
        growth_rate: f64,
        tax_status: TaxStatus,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            balance,
            monthly: monthly_contribution,
            rate: growth_rate,
            tax_status,
        }
    }

    /// Convenience constructor for a liability record
    pub fn liability(
        name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        monthly_payment: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: LIABILITY_CATEGORY.to_string(),
            balance,
            monthly: monthly_payment,
            rate: interest_rate,
            tax_status: TaxStatus::NotApplicable,
        }
    }

    pub fn is_liability(&self) -> bool {
        self.category == LIABILITY_CATEGORY
    }

    /// Construct a fresh owned entity from this record
    pub fn build(&self) -> Entity {
        if self.is_liability() {
            Entity::Liability(Liability {
                name: self.name.clone(),
                balance: self.balance,
                annual_interest_rate: self.rate,
                monthly_payment: self.monthly,
                category: "Debt".to_string(),
            })
        } else {
            Entity::Asset(Asset {
                name: self.name.clone(),
                balance: self.balance,
                annual_contribution: self.monthly * 12.0,
                annual_growth_rate: self.rate,
                tax_status: self.tax_status,
                category: self.category.clone(),
            })
        }
    }
}

/// Scalar simulation parameters
///
/// Serialized field names match the persisted document; defaults match the
/// original planner so a partial `settings` object is usable as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(
        rename = "user_age",
        alias = "startAge",
        alias = "start_age",
        default = "default_start_age"
    )]
    pub start_age: u8,
    #[serde(default, alias = "filingStatus")]
    pub filing_status: FilingStatus,
    #[serde(alias = "annualSpend", default = "default_annual_spend")]
    pub annual_spend: f64,
    /// Safe withdrawal rate: the fraction of the eligible asset base assumed
    /// spendable per year
    #[serde(alias = "safeWithdrawalRate", default = "default_swr")]
    pub swr: f64,
    #[serde(alias = "inflationRate", default = "default_inflation_rate")]
    pub inflation_rate: f64,
    #[serde(
        rename = "contrib_growth",
        alias = "contributionGrowthRate",
        alias = "contribution_growth",
        default = "default_contribution_growth"
    )]
    pub contribution_growth: f64,
    /// Progressive brackets when true, otherwise the flat rate below
    #[serde(
        rename = "use_progressive",
        alias = "useProgressiveTax",
        alias = "use_progressive_tax",
        default = "default_true"
    )]
    pub use_progressive_tax: bool,
    #[serde(
        rename = "tax_flat_rate",
        alias = "flatTaxRate",
        alias = "flat_tax_rate",
        default = "default_flat_tax_rate"
    )]
    pub flat_tax_rate: f64,
    /// Age from which tax-advantaged pre-retirement assets join the
    /// withdrawal base
    #[serde(alias = "retirementEligibilityAge", default = "default_retirement_age")]
    pub retirement_age: u8,
    /// Display-window label carried by some documents; the engine always
    /// simulates the full horizon and ignores this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_age: default_start_age(),
            filing_status: FilingStatus::default(),
            annual_spend: default_annual_spend(),
            swr: default_swr(),
            inflation_rate: default_inflation_rate(),
            contribution_growth: default_contribution_growth(),
            use_progressive_tax: true,
            flat_tax_rate: default_flat_tax_rate(),
            retirement_age: default_retirement_age(),
            timeframe: None,
        }
    }
}

impl Settings {
    /// The post-tax portfolio size needed to support the spending target at
    /// the configured safe withdrawal rate
    pub fn fi_number(&self) -> f64 {
        self.annual_spend / self.swr
    }
}

/// Complete plan: the persisted document's `portfolio` / `events` /
/// `settings` keys
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlanConfig {
    #[serde(default)]
    pub portfolio: Vec<HoldingRecord>,
    #[serde(default)]
    pub events: Vec<LifeEvent>,
    #[serde(default)]
    pub settings: Settings,
}

impl PlanConfig {
    /// Check the plan for structural defects before simulating.
    ///
    /// Only structure is rejected: empty or duplicate names and non-finite
    /// numbers. Out-of-range but well-formed values (negative growth rates,
    /// zero spending) are simulated as given.
    pub fn validate(&self) -> crate::error::Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (index, record) in self.portfolio.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(ConfigError::EmptyEntityName { index });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(ConfigError::DuplicateEntityName(record.name.clone()));
            }
            for (field, value) in [
                ("balance", record.balance),
                ("monthly amount", record.monthly),
                ("rate", record.rate),
            ] {
                if !value.is_finite() {
                    return Err(ConfigError::NonFiniteNumber {
                        entity: record.name.clone(),
                        field,
                    });
                }
            }
        }

        for (index, event) in self.events.iter().enumerate() {
            if event.name.trim().is_empty() {
                return Err(ConfigError::EmptyEventName { index });
            }
            if !event.cost.is_finite() {
                return Err(ConfigError::NonFiniteNumber {
                    entity: event.name.clone(),
                    field: "cost",
                });
            }
        }

        Ok(())
    }

    /// Build the owned working set for one run, in configured portfolio
    /// order. Every call produces fresh entities; the plan itself is never
    /// aliased by a run.
    pub fn build_entities(&self) -> Vec<Entity> {
        self.portfolio.iter().map(HoldingRecord::build).collect()
    }

    /// The example plan written for first-time users: a 401k, a Roth IRA, a
    /// mortgage, and a down-payment event at 35
    pub fn example() -> Self {
        Self {
            portfolio: vec![
                HoldingRecord::asset(
                    "401k",
                    "Stock Market",
                    50_000.0,
                    1_000.0,
                    0.07,
                    TaxStatus::PreTax,
                ),
                HoldingRecord::asset(
                    "Roth IRA",
                    "Stock Market",
                    20_000.0,
                    500.0,
                    0.07,
                    TaxStatus::Roth,
                ),
                HoldingRecord::liability("Mortgage", 300_000.0, 0.04, 2_000.0),
            ],
            events: vec![LifeEvent {
                name: "Down Payment".to_string(),
                age: 35,
                cost: 50_000.0,
            }],
            settings: Settings {
                timeframe: Some("Until Age 85".to_string()),
                ..Settings::default()
            },
        }
    }
}
