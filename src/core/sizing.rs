use crate::core::units::{ROOF_AREA_SQFT_PER_KW, UNITS_PER_KW_PER_MONTH};
use crate::errors::CalculationError;

/// This module derives the recommended array size from the customer's bill.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemSizing {
    /// Estimated monthly consumption, in units (kWh).
    pub monthly_units: f64,
    /// Recommended array size, in whole kW.
    pub system_size_kw: u32,
    /// Shadow-free roof area required for the array, in sqft.
    pub roof_area_sqft: u32,
}

/// Derive consumption, array size and roof area for one customer.
///
/// Arguments:
/// * `monthly_bill` - average monthly electricity bill, in rupees
/// * `tariff_per_unit` - DISCOM billing rate, in rupees per unit
pub fn size_from_bill(
    monthly_bill: f64,
    tariff_per_unit: f64,
) -> Result<SystemSizing, CalculationError> {
    if tariff_per_unit <= 0. {
        return Err(CalculationError::DivisionByZero(tariff_per_unit));
    }
    let monthly_units = monthly_bill / tariff_per_unit;
    // Ceiling division so the array covers the consumption rather than
    // falling just short of it.
    let system_size_kw = (monthly_units / UNITS_PER_KW_PER_MONTH).ceil() as u32;

    Ok(SystemSizing {
        monthly_units,
        system_size_kw,
        roof_area_sqft: system_size_kw * ROOF_AREA_SQFT_PER_KW,
    })
}
