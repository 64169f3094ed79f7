use tracing::warn;

/// This module applies the central and state incentive tiers to the total
/// system cost.

/// Central financial assistance per kW for arrays up to 2 kW, in rupees
/// (PM Surya Ghar: Muft Bijli Yojana slabs, February 2024).
pub const CENTRAL_SUBSIDY_PER_KW_UP_TO_2_KW: f64 = 30_000.;

/// Flat central assistance for arrays of 3 kW and above, in rupees.
// The scheme caps assistance at the 3 kW slab, so a 3 kW and a 10 kW array
// attract the same central subsidy. Preserved as published; do not scale
// this with array size without confirming the intended policy.
pub const CENTRAL_SUBSIDY_3_KW_AND_ABOVE: f64 = 78_000.;

/// State top-up per kW (Uttar Pradesh), in rupees.
pub const STATE_SUBSIDY_PER_KW: f64 = 15_000.;

/// Cap on the state top-up, in rupees.
pub const STATE_SUBSIDY_CAP: f64 = 30_000.;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubsidyBreakdown {
    pub central_subsidy: f64,
    pub state_subsidy: f64,
    /// Total cost less both subsidies. Can go negative for small, cheap
    /// systems; reported as-is rather than floored at zero.
    pub net_payable: f64,
}

/// Apply both incentive schemes to a priced system.
pub fn subsidy_breakdown(system_size_kw: u32, total_cost: f64) -> SubsidyBreakdown {
    let central_subsidy = if system_size_kw <= 2 {
        f64::from(system_size_kw) * CENTRAL_SUBSIDY_PER_KW_UP_TO_2_KW
    } else {
        CENTRAL_SUBSIDY_3_KW_AND_ABOVE
    };
    let state_subsidy = (f64::from(system_size_kw) * STATE_SUBSIDY_PER_KW).min(STATE_SUBSIDY_CAP);
    let net_payable = total_cost - (central_subsidy + state_subsidy);
    if net_payable < 0. {
        warn!(
            "Subsidies (central {central_subsidy}, state {state_subsidy}) exceed the total \
            system cost {total_cost}; reporting the negative net payable as-is"
        );
    }

    SubsidyBreakdown {
        central_subsidy,
        state_subsidy,
        net_payable,
    }
}
