//! Tax calculation for passive withdrawal income
//!
//! A simplified 2024 IRS bracket approximation, not a compliance engine.
//! The progressive calculator is a pure function over a fixed table of
//! (marginal rate, cumulative upper bound) pairs with a filing-status
//! standard deduction and a top-rate catch-all above the last bound.

use serde::{Deserialize, Serialize};

/// Federal filing status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FilingStatus {
    #[default]
    Single,
    #[serde(alias = "Married Filing Jointly")]
    Joint,
}

/// One progressive bracket: income up to `limit` (cumulative, not a slice
/// width) is taxed at `rate` for the portion above the previous bracket's
/// limit.
#[derive(Debug, Clone, Copy)]
struct TaxBracket {
    rate: f64,
    limit: f64,
}

const SINGLE_BRACKETS: [TaxBracket; 6] = [
    TaxBracket { rate: 0.10, limit: 11_600.0 },
    TaxBracket { rate: 0.12, limit: 47_150.0 },
    TaxBracket { rate: 0.22, limit: 100_525.0 },
    TaxBracket { rate: 0.24, limit: 191_950.0 },
    TaxBracket { rate: 0.32, limit: 243_725.0 },
    TaxBracket { rate: 0.35, limit: 609_350.0 },
];

const JOINT_BRACKETS: [TaxBracket; 6] = [
    TaxBracket { rate: 0.10, limit: 23_200.0 },
    TaxBracket { rate: 0.12, limit: 94_300.0 },
    TaxBracket { rate: 0.22, limit: 201_050.0 },
    TaxBracket { rate: 0.24, limit: 383_900.0 },
    TaxBracket { rate: 0.32, limit: 487_450.0 },
    TaxBracket { rate: 0.35, limit: 731_200.0 },
];

/// Marginal rate on taxable income above the last listed bracket
const TOP_MARGINAL_RATE: f64 = 0.37;

fn standard_deduction(filing_status: FilingStatus) -> f64 {
    match filing_status {
        FilingStatus::Single => 14_600.0,
        FilingStatus::Joint => 29_200.0,
    }
}

/// Calculate federal income tax on gross income using progressive brackets.
///
/// Returns 0 for non-positive income. The standard deduction is subtracted
/// first, floored at zero taxable income.
pub fn progressive_tax(gross_income: f64, filing_status: FilingStatus) -> f64 {
    if gross_income <= 0.0 {
        return 0.0;
    }
    let taxable_income = (gross_income - standard_deduction(filing_status)).max(0.0);

    let brackets = match filing_status {
        FilingStatus::Single => &SINGLE_BRACKETS,
        FilingStatus::Joint => &JOINT_BRACKETS,
    };

    let mut tax = 0.0;
    let mut previous_limit = 0.0;
    for bracket in brackets {
        if taxable_income > bracket.limit {
            tax += (bracket.limit - previous_limit) * bracket.rate;
            previous_limit = bracket.limit;
        } else {
            tax += (taxable_income - previous_limit) * bracket.rate;
            return tax;
        }
    }
    tax + (taxable_income - previous_limit) * TOP_MARGINAL_RATE
}

/// Net income after a flat tax rate, the alternative to the progressive path
pub fn flat_tax_net(gross_income: f64, flat_rate: f64) -> f64 {
    gross_income * (1.0 - flat_rate)
}
