//! Life-event funding across a tiered withdrawal order
//!
//! When a life event fires, its today's-currency cost is inflated to the
//! event year and drawn from assets in a fixed three-tier priority order,
//! draining cheap-to-touch money before tax-advantaged money. Liabilities
//! are never drawn against.

use crate::model::{Asset, Entity, TaxStatus, inflation_factor};

/// Priority buckets drained in declaration order when funding a life event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalTier {
    /// Cash-category holdings and taxable brokerage money
    CashOrTaxable,
    /// Roth money: contributions already taxed, principal accessible
    Roth,
    /// Pre-tax retirement money, the last resort
    PreTax,
}

pub const TIER_ORDER: [WithdrawalTier; 3] = [
    WithdrawalTier::CashOrTaxable,
    WithdrawalTier::Roth,
    WithdrawalTier::PreTax,
];

impl WithdrawalTier {
    /// Whether an asset belongs to this tier.
    ///
    /// The "Cash" category grants first-tier membership regardless of the
    /// asset's nominal tax status; `category` and `tax_status` are
    /// independent axes.
    pub fn covers(&self, asset: &Asset) -> bool {
        match self {
            WithdrawalTier::CashOrTaxable => {
                asset.category == "Cash" || asset.tax_status == TaxStatus::Taxable
            }
            WithdrawalTier::Roth => asset.tax_status == TaxStatus::Roth,
            WithdrawalTier::PreTax => asset.tax_status == TaxStatus::PreTax,
        }
    }
}

/// Fund a life event from the working set, returning the unmet shortfall.
///
/// The cost is inflated from today's currency by `elapsed_years` of
/// compounding, then drawn tier by tier; within a tier, assets are drained
/// in their configured order via partial `withdraw` calls. A shortfall is
/// not an error and creates no debt: the caller learns the unfunded amount
/// from the return value and the run continues. Returns 0 when fully funded.
pub fn fund_event(
    entities: &mut [Entity],
    cost_today: f64,
    inflation_rate: f64,
    elapsed_years: i32,
) -> f64 {
    let future_cost = cost_today * inflation_factor(inflation_rate, elapsed_years);
    let mut remaining = future_cost;

    for tier in TIER_ORDER {
        if remaining <= 0.0 {
            break;
        }
        for entity in entities.iter_mut() {
            if remaining <= 0.0 {
                break;
            }
            if let Some(asset) = entity.as_asset_mut()
                && tier.covers(asset)
            {
                remaining -= asset.withdraw(remaining);
            }
        }
    }

    remaining.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Asset, Liability};

    fn asset(name: &str, category: &str, balance: f64, tax_status: TaxStatus) -> Entity {
        Entity::Asset(Asset {
            name: name.to_string(),
            balance,
            annual_contribution: 0.0,
            annual_growth_rate: 0.0,
            tax_status,
            category: category.to_string(),
        })
    }

    #[test]
    fn test_drains_tiers_in_priority_order() {
        let mut entities = vec![
            asset("IRA", "Stock Market", 10_000.0, TaxStatus::PreTax),
            asset("Roth", "Stock Market", 10_000.0, TaxStatus::Roth),
            asset("Brokerage", "Stock Market", 10_000.0, TaxStatus::Taxable),
        ];

        // 15k: all of the brokerage, then 5k of Roth, pre-tax untouched
        let shortfall = fund_event(&mut entities, 15_000.0, 0.0, 0);
        assert_eq!(shortfall, 0.0);
        assert!((entities[0].balance() - 10_000.0).abs() < 1e-9);
        assert!((entities[1].balance() - 5_000.0).abs() < 1e-9);
        assert_eq!(entities[2].balance(), 0.0);
    }

    #[test]
    fn test_cash_category_joins_first_tier() {
        // Category "Cash" outranks the Roth tier even with a Roth tax status
        let mut entities = vec![
            asset("Emergency Fund", "Cash", 5_000.0, TaxStatus::Roth),
            asset("Roth IRA", "Stock Market", 5_000.0, TaxStatus::Roth),
        ];

        let shortfall = fund_event(&mut entities, 4_000.0, 0.0, 0);
        assert_eq!(shortfall, 0.0);
        assert!((entities[0].balance() - 1_000.0).abs() < 1e-9);
        assert!((entities[1].balance() - 5_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_configured_order_within_a_tier() {
        let mut entities = vec![
            asset("First", "Stock Market", 3_000.0, TaxStatus::Taxable),
            asset("Second", "Stock Market", 3_000.0, TaxStatus::Taxable),
        ];

        let shortfall = fund_event(&mut entities, 4_000.0, 0.0, 0);
        assert_eq!(shortfall, 0.0);
        assert_eq!(entities[0].balance(), 0.0);
        assert!((entities[1].balance() - 2_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_cost_is_inflated_to_the_event_year() {
        let mut entities = vec![asset("Savings", "Cash", 50_000.0, TaxStatus::NotApplicable)];

        // 10k today at 2.5% inflation over 10 years
        let shortfall = fund_event(&mut entities, 10_000.0, 0.025, 10);
        assert_eq!(shortfall, 0.0);
        let expected_draw = 10_000.0 * 1.025_f64.powi(10);
        assert!(
            (entities[0].balance() - (50_000.0 - expected_draw)).abs() < 1e-6,
            "Expected draw of {expected_draw}, left {}",
            entities[0].balance()
        );
    }

    #[test]
    fn test_shortfall_is_reported_not_borrowed() {
        let mut entities = vec![
            asset("Brokerage", "Stock Market", 1_000.0, TaxStatus::Taxable),
            asset("IRA", "Stock Market", 2_000.0, TaxStatus::PreTax),
        ];

        let shortfall = fund_event(&mut entities, 10_000.0, 0.0, 0);
        assert!(
            (shortfall - 7_000.0).abs() < 1e-9,
            "Expected 7000 unfunded, got {shortfall}"
        );
        // Everything drained, nothing negative
        assert_eq!(entities[0].balance(), 0.0);
        assert_eq!(entities[1].balance(), 0.0);
    }

    #[test]
    fn test_liabilities_are_never_drawn_against() {
        let mut entities = vec![
            Entity::Liability(Liability {
                name: "Mortgage".to_string(),
                balance: 200_000.0,
                annual_interest_rate: 0.04,
                monthly_payment: 2_000.0,
                category: "Debt".to_string(),
            }),
            asset("Brokerage", "Stock Market", 1_000.0, TaxStatus::Taxable),
        ];

        let shortfall = fund_event(&mut entities, 5_000.0, 0.0, 0);
        assert!((shortfall - 4_000.0).abs() < 1e-9);
        assert!((entities[0].balance() - 200_000.0).abs() < 1e-9);
    }
}
