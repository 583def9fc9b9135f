//! The year-stepping simulation orchestrator
//!
//! Drives the whole projection: applies due life events, advances each
//! entity one year, computes real-dollar figures and the eligibility-gated
//! withdrawal base, taxes the gross passive income, attributes the net back
//! to individual assets, and emits one row per year.
//!
//! The run always covers the full horizon to [`TERMINAL_AGE`] regardless of
//! how much of it a caller intends to display: a life event scheduled past
//! the display window must still drain the assets that later rows are
//! computed from. Callers truncate the returned rows instead of requesting
//! a shorter run.

use crate::config::PlanConfig;
use crate::error::Result;
use crate::model::{Entity, Projection, ProjectionRow, TaxStatus, inflation_factor};
use crate::taxes::{flat_tax_net, progressive_tax};
use crate::withdrawal::fund_event;

/// Fixed terminal age; the projection runs until age 85
pub const TERMINAL_AGE: u8 = 85;

/// Run the full projection for a plan.
///
/// Validates the plan, builds an owned working set from the records (the
/// caller's configuration is never aliased), and simulates every year from
/// the start age through [`TERMINAL_AGE`]. `start_year` is the calendar year
/// of year 0; the engine never reads the clock itself, so a run is a pure
/// function of its arguments.
///
/// Fails only on structural configuration defects; once the year loop
/// starts, no error can occur. Insolvency does not stop a run: balances
/// clamp at zero and ride out the remaining years.
pub fn run_simulation(plan: &PlanConfig, start_year: i16) -> Result<Projection> {
    plan.validate()?;

    let settings = &plan.settings;
    let mut entities = plan.build_entities();
    let columns: Vec<String> = entities
        .iter()
        .map(|entity| entity.name().to_string())
        .collect();

    // Negative when the start age is already past the terminal age, which
    // yields an empty projection
    let horizon = i32::from(TERMINAL_AGE) - i32::from(settings.start_age);

    let mut rows = Vec::with_capacity((horizon + 1).max(0) as usize);
    for year_index in 0..=horizon {
        let age = i32::from(settings.start_age) + year_index;

        // A. Life events fire before this year's growth, so an event's
        // withdrawal reduces the base that growth is computed on
        for event in &plan.events {
            if i32::from(event.age) == age {
                fund_event(
                    &mut entities,
                    event.cost,
                    settings.inflation_rate,
                    year_index,
                );
            }
        }

        // B. Advance each entity and record real-dollar values
        let discount = inflation_factor(settings.inflation_rate, year_index);
        let can_access_retirement = age >= i32::from(settings.retirement_age);

        let mut balances = Vec::with_capacity(entities.len());
        let mut base_values = vec![0.0; entities.len()];
        let mut net_worth = 0.0;
        let mut withdrawal_base = 0.0;

        for (slot, entity) in entities.iter_mut().enumerate() {
            match entity {
                Entity::Asset(asset) => {
                    if year_index > 0 {
                        asset.grow_annually(settings.contribution_growth);
                    }
                    let real_value = asset.balance / discount;
                    net_worth += real_value;
                    balances.push(real_value);

                    let eligible = matches!(
                        asset.tax_status,
                        TaxStatus::Taxable | TaxStatus::Roth
                    ) || asset.category == "Cash"
                        || can_access_retirement;
                    if eligible {
                        withdrawal_base += real_value;
                        base_values[slot] = real_value;
                    }
                }
                Entity::Liability(liability) => {
                    if year_index > 0 {
                        liability.pay_down_annually();
                    }
                    let real_value = liability.balance / discount;
                    net_worth -= real_value;
                    balances.push(-real_value);
                }
            }
        }

        // C. Tax the gross safe withdrawal
        let gross_income = withdrawal_base * settings.swr;
        let passive_income = if settings.use_progressive_tax {
            gross_income - progressive_tax(gross_income, settings.filing_status)
        } else {
            flat_tax_net(gross_income, settings.flat_tax_rate)
        };

        // D. Attribute the net income to each eligible asset by its share of
        // the base; a zero base attributes zero everywhere
        let incomes: Vec<f64> = if withdrawal_base > 0.0 {
            base_values
                .iter()
                .map(|value| passive_income * (value / withdrawal_base))
                .collect()
        } else {
            vec![0.0; entities.len()]
        };

        rows.push(ProjectionRow {
            year: start_year + year_index as i16,
            age: age as u8,
            balances,
            incomes,
            net_worth,
            passive_income,
            annual_spending: settings.annual_spend,
        });
    }

    Ok(Projection { columns, rows })
}
