//! Asset and Liability definitions
//!
//! Assets are growth holdings with an escalating annual contribution.
//! Liabilities are amortizing debts with a fixed monthly payment. Both are
//! mutated in place once per simulated year and neither balance may ever go
//! negative.

use serde::{Deserialize, Serialize};

/// Tax treatment for an asset
///
/// This is one of two independent classification axes: `tax_status` is the
/// closed set governing tax treatment, while an asset's free-form `category`
/// ("Cash", "Stock Market", ...) drives withdrawal-tier eligibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TaxStatus {
    /// Roth IRA, Roth 401k - withdrawals tax-free
    Roth,
    /// 401k, Traditional IRA - inaccessible before the retirement
    /// eligibility age
    #[serde(rename = "Pre-Tax")]
    PreTax,
    /// Regular brokerage - always accessible
    Taxable,
    /// No tax treatment (liabilities, untyped holdings)
    #[serde(rename = "N/A")]
    #[default]
    NotApplicable,
}

/// A growth-oriented holding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub name: String,
    pub balance: f64,
    /// Contribution added each year; escalates by the plan's contribution
    /// growth rate before being added
    pub annual_contribution: f64,
    /// Signed fraction; may be negative
    pub annual_growth_rate: f64,
    pub tax_status: TaxStatus,
    pub category: String,
}

impl Asset {
    /// Advance this asset by one year.
    ///
    /// Growth is computed on the balance before this year's contribution
    /// escalation, then the escalated contribution is added. The escalation
    /// therefore does not compound through the growth term in the same year.
    /// This ordering is load-bearing and must not be rearranged.
    pub fn grow_annually(&mut self, contribution_growth_rate: f64) {
        let growth = self.balance * self.annual_growth_rate;
        self.annual_contribution *= 1.0 + contribution_growth_rate;
        self.balance += growth + self.annual_contribution;
    }

    /// Remove up to `amount` from the balance, returning the amount actually
    /// removed. Partial fulfillment is the contract: an underfunded request
    /// drains the balance to exactly zero and reports what was taken.
    pub fn withdraw(&mut self, amount: f64) -> f64 {
        if amount <= 0.0 {
            return 0.0;
        }
        if self.balance >= amount {
            self.balance -= amount;
            amount
        } else {
            let actual = self.balance;
            self.balance = 0.0;
            actual
        }
    }
}

/// An amortizing debt with a fixed monthly payment
///
/// The payment is fixed for the life of the loan (like a 30-year mortgage)
/// and is not escalated by contribution growth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Liability {
    pub name: String,
    pub balance: f64,
    pub annual_interest_rate: f64,
    pub monthly_payment: f64,
    pub category: String,
}

impl Liability {
    /// Advance this liability by one year of monthly amortization.
    ///
    /// Twelve discrete steps, each accruing one month of interest before
    /// subtracting the payment. The loop stops the instant the balance
    /// reaches zero, and any residual negative from the final payment is
    /// clamped, so a snap payoff mid-year never overshoots into credit.
    pub fn pay_down_annually(&mut self) {
        for _ in 0..12 {
            if self.balance <= 0.0 {
                break;
            }
            let interest = self.balance * (self.annual_interest_rate / 12.0);
            self.balance += interest;
            self.balance -= self.monthly_payment;
        }
        if self.balance < 0.0 {
            self.balance = 0.0;
        }
    }
}

/// One entry in the simulation's working set
///
/// A closed set of two kinds; the orchestrator's per-entity loop dispatches
/// by exhaustive matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Entity {
    Asset(Asset),
    Liability(Liability),
}

impl Entity {
    pub fn name(&self) -> &str {
        match self {
            Entity::Asset(asset) => &asset.name,
            Entity::Liability(liability) => &liability.name,
        }
    }

    pub fn balance(&self) -> f64 {
        match self {
            Entity::Asset(asset) => asset.balance,
            Entity::Liability(liability) => liability.balance,
        }
    }

    pub fn as_asset_mut(&mut self) -> Option<&mut Asset> {
        match self {
            Entity::Asset(asset) => Some(asset),
            Entity::Liability(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_asset(balance: f64) -> Asset {
        Asset {
            name: "Brokerage".to_string(),
            balance,
            annual_contribution: 1_200.0,
            annual_growth_rate: 0.07,
            tax_status: TaxStatus::Taxable,
            category: "Stock Market".to_string(),
        }
    }

    #[test]
    fn test_growth_uses_balance_before_escalation() {
        // B=10000, r=0.07, C=1200, g=0.03:
        // growth = 700, new contribution = 1236, new balance = 11936
        let mut asset = test_asset(10_000.0);
        asset.grow_annually(0.03);

        assert!(
            (asset.annual_contribution - 1_236.0).abs() < 1e-9,
            "Expected contribution 1236, got {}",
            asset.annual_contribution
        );
        assert!(
            (asset.balance - 11_936.0).abs() < 1e-9,
            "Expected balance 11936, got {}",
            asset.balance
        );
    }

    #[test]
    fn test_negative_growth_rate_shrinks_balance() {
        let mut asset = test_asset(10_000.0);
        asset.annual_growth_rate = -0.10;
        asset.annual_contribution = 0.0;
        asset.grow_annually(0.0);

        assert!(
            (asset.balance - 9_000.0).abs() < 1e-9,
            "Expected 9000, got {}",
            asset.balance
        );
    }

    #[test]
    fn test_withdraw_full_and_partial() {
        let mut asset = test_asset(500.0);

        let taken = asset.withdraw(200.0);
        assert!((taken - 200.0).abs() < 1e-9);
        assert!((asset.balance - 300.0).abs() < 1e-9);

        // Underfunded request drains to exactly zero
        let taken = asset.withdraw(1_000.0);
        assert!((taken - 300.0).abs() < 1e-9);
        assert_eq!(asset.balance, 0.0);

        // Nothing left to take
        assert_eq!(asset.withdraw(50.0), 0.0);
        assert_eq!(asset.balance, 0.0);
    }

    #[test]
    fn test_withdraw_ignores_nonpositive_amounts() {
        let mut asset = test_asset(500.0);
        assert_eq!(asset.withdraw(0.0), 0.0);
        assert_eq!(asset.withdraw(-10.0), 0.0);
        assert!((asset.balance - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_amortization_accrues_interest_before_payment() {
        let mut liability = Liability {
            name: "Car Loan".to_string(),
            balance: 12_000.0,
            annual_interest_rate: 0.06,
            monthly_payment: 400.0,
            category: "Debt".to_string(),
        };
        liability.pay_down_annually();

        // Replay the same twelve steps independently
        let mut expected = 12_000.0;
        for _ in 0..12 {
            expected += expected * (0.06 / 12.0);
            expected -= 400.0;
        }
        assert!(
            (liability.balance - expected).abs() < 1e-9,
            "Expected {expected}, got {}",
            liability.balance
        );
    }

    #[test]
    fn test_amortization_snap_payoff_clamps_at_zero() {
        // Payment exceeds balance + first month's interest: paid off in the
        // first step and never goes negative
        let mut liability = Liability {
            name: "Card".to_string(),
            balance: 1_200.0,
            annual_interest_rate: 0.12,
            monthly_payment: 1_300.0,
            category: "Debt".to_string(),
        };
        liability.pay_down_annually();
        assert_eq!(liability.balance, 0.0);

        // A second year is a no-op
        liability.pay_down_annually();
        assert_eq!(liability.balance, 0.0);
    }
}
