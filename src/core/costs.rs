use crate::catalog::ResolvedPrices;
use crate::core::units::WATTS_PER_KILOWATT;
use crate::input::SystemType;

/// This module derives the itemised system cost for a sized array.

/// Balance-of-system charge per kW of array, in rupees. Covers structure,
/// cabling, earthing, net meter and installation labour as one flat rate.
pub const BOS_COST_PER_KW: f64 = 10_000.;

/// Storage sizing assumption for off-grid and hybrid systems, in kWh of
/// battery per kW of array.
pub const BATTERY_KWH_PER_KW: f64 = 2.;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostBreakdown {
    pub panel_cost: f64,
    pub inverter_cost: f64,
    pub bos_cost: f64,
    pub battery_cost: f64,
    pub total_cost: f64,
}

/// Price up a sized array against the customer's resolved brand prices.
///
/// Arguments:
/// * `system_size_kw` - recommended array size, in whole kW
/// * `system_type` - grid connection type; only off-grid and hybrid systems
///                   are quoted with storage
/// * `prices` - brand prices resolved from the price catalog
pub fn cost_breakdown(
    system_size_kw: u32,
    system_type: SystemType,
    prices: &ResolvedPrices,
) -> CostBreakdown {
    let size_kw = f64::from(system_size_kw);
    let panel_cost = size_kw * f64::from(WATTS_PER_KILOWATT) * prices.panel_price_per_watt;
    // The inverter is a flat brand price, deliberately not scaled with the
    // array size.
    let inverter_cost = prices.inverter_fixed_price;
    let bos_cost = size_kw * BOS_COST_PER_KW;
    let battery_cost = if system_type.has_battery() {
        size_kw * BATTERY_KWH_PER_KW * prices.battery_price_per_kwh
    } else {
        0.
    };

    CostBreakdown {
        panel_cost,
        inverter_cost,
        bos_cost,
        battery_cost,
        total_cost: panel_cost + inverter_cost + bos_cost + battery_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn prices() -> ResolvedPrices {
        ResolvedPrices {
            panel_price_per_watt: 28.,
            inverter_fixed_price: 45_000.,
            battery_price_per_kwh: 20_000.,
        }
    }

    #[rstest]
    fn should_price_an_on_grid_system_without_storage(prices: ResolvedPrices) {
        let costs = cost_breakdown(2, SystemType::OnGrid, &prices);
        assert_eq!(costs.panel_cost, 56_000.);
        assert_eq!(costs.inverter_cost, 45_000.);
        assert_eq!(costs.bos_cost, 20_000.);
        assert_eq!(costs.battery_cost, 0., "on-grid systems carry no battery");
        assert_eq!(costs.total_cost, 121_000.);
    }

    #[rstest]
    #[case(SystemType::OffGrid)]
    #[case(SystemType::Hybrid)]
    fn should_price_storage_at_two_kwh_per_kw(
        prices: ResolvedPrices,
        #[case] system_type: SystemType,
    ) {
        let costs = cost_breakdown(5, system_type, &prices);
        assert_eq!(costs.battery_cost, 200_000., "5 kW * 2 kWh/kW * 20,000/kWh");
    }

    #[rstest]
    #[case(SystemType::OnGrid, 1)]
    #[case(SystemType::OffGrid, 3)]
    #[case(SystemType::Hybrid, 26)]
    fn should_total_exactly_the_sum_of_parts(
        prices: ResolvedPrices,
        #[case] system_type: SystemType,
        #[case] system_size_kw: u32,
    ) {
        let costs = cost_breakdown(system_size_kw, system_type, &prices);
        assert_eq!(
            costs.total_cost,
            costs.panel_cost + costs.inverter_cost + costs.bos_cost + costs.battery_cost
        );
    }

    #[rstest]
    fn should_keep_inverter_price_flat_across_sizes(prices: ResolvedPrices) {
        let small = cost_breakdown(1, SystemType::OnGrid, &prices);
        let large = cost_breakdown(20, SystemType::OnGrid, &prices);
        assert_eq!(small.inverter_cost, large.inverter_cost);
    }
}
