pub const WATTS_PER_KILOWATT: u32 = 1_000;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Assumed monthly generation per kW of installed array, in units (kWh).
/// Standard sizing assumption for Indian rooftop installations (roughly
/// 4 units/kW/day over an average month).
pub const UNITS_PER_KW_PER_MONTH: f64 = 120.;

/// Fixed shadow-free roof area requirement per kW of array, in sqft.
pub const ROOF_AREA_SQFT_PER_KW: u32 = 100;

pub(crate) fn round_by_precision(src: f64, precision: f64) -> f64 {
    (precision * src).round() / precision
}
