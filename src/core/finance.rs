use crate::core::units::{round_by_precision, MONTHS_PER_YEAR};

/// This module derives the savings and return metrics quoted to the customer.

/// Fraction of the existing bill assumed to be offset by the array. Fixed
/// model assumption, not derived from generation.
pub const BILL_OFFSET_FRACTION: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinancialMetrics {
    pub monthly_savings: f64,
    pub annual_savings: f64,
    /// Years for cumulative savings to equal the net payable, to one decimal
    /// place. `None` when annual savings are non-positive: the cost is never
    /// recovered, which renderers show as "N/A" rather than an error.
    pub payback_years: Option<f64>,
    /// Annual savings as a percentage of net payable, to one decimal place.
    /// `None` when net payable is non-positive (a subsidy-covered system has
    /// no meaningful return on outlay).
    pub roi_percent: Option<f64>,
}

/// Derive savings, payback and return for a subsidised system.
pub fn financial_metrics(monthly_bill: f64, net_payable: f64) -> FinancialMetrics {
    let monthly_savings = monthly_bill * BILL_OFFSET_FRACTION;
    let annual_savings = monthly_savings * f64::from(MONTHS_PER_YEAR);
    let payback_years =
        (annual_savings > 0.).then(|| round_by_precision(net_payable / annual_savings, 1e1));
    let roi_percent =
        (net_payable > 0.).then(|| round_by_precision(annual_savings / net_payable * 100., 1e1));

    FinancialMetrics {
        monthly_savings,
        annual_savings,
        payback_years,
        roi_percent,
    }
}
