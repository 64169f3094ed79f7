use serde::Serialize;

use crate::catalog::ResolvedPrices;
use crate::core::costs::{cost_breakdown, CostBreakdown};
use crate::core::finance::{financial_metrics, FinancialMetrics};
use crate::core::sizing::{size_from_bill, SystemSizing};
use crate::core::subsidy::{subsidy_breakdown, SubsidyBreakdown};
use crate::errors::CalculationError;
use crate::input::{Input, SystemType};

/// This module runs the four derivation steps for one request and flattens
/// the result into a render-ready document.

/// A quotation request with brand prices already resolved from the catalog.
#[derive(Clone, Copy, Debug)]
pub struct QuotationRequest {
    pub monthly_bill: f64,
    pub tariff_per_unit: f64,
    pub system_type: SystemType,
    pub prices: ResolvedPrices,
}

impl QuotationRequest {
    pub fn new(input: &Input, prices: ResolvedPrices) -> Self {
        Self {
            monthly_bill: input.monthly_bill,
            tariff_per_unit: input.tariff_per_unit,
            system_type: input.system_type,
            prices,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuotationResult {
    pub sizing: SystemSizing,
    pub costs: CostBreakdown,
    pub subsidy: SubsidyBreakdown,
    pub finance: FinancialMetrics,
}

/// Reduce one request to its complete quotation. Pure and deterministic:
/// all inputs travel in the request, nothing is read or written elsewhere.
pub fn calculate_quotation(request: &QuotationRequest) -> Result<QuotationResult, CalculationError> {
    let sizing = size_from_bill(request.monthly_bill, request.tariff_per_unit)?;
    let costs = cost_breakdown(sizing.system_size_kw, request.system_type, &request.prices);
    let subsidy = subsidy_breakdown(sizing.system_size_kw, costs.total_cost);
    let finance = financial_metrics(request.monthly_bill, subsidy.net_payable);

    Ok(QuotationResult {
        sizing,
        costs,
        subsidy,
        finance,
    })
}

/// The flat record handed to the presentation layers: the customer's
/// selections plus every derived figure, with no structure left to unpick.
#[derive(Clone, Debug, Serialize)]
pub struct QuotationDocument {
    pub customer_name: String,
    pub system_type: String,
    pub panel_brand: String,
    pub inverter_brand: String,
    pub battery_brand: String,
    pub monthly_bill: f64,
    pub tariff_per_unit: f64,
    pub monthly_units: f64,
    pub system_size_kw: u32,
    pub roof_area_sqft: u32,
    pub panel_cost: f64,
    pub inverter_cost: f64,
    pub bos_cost: f64,
    pub battery_cost: f64,
    pub total_cost: f64,
    pub central_subsidy: f64,
    pub state_subsidy: f64,
    pub net_payable: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub payback_years: Option<f64>,
    pub roi_percent: Option<f64>,
}

impl QuotationDocument {
    pub fn new(input: &Input, result: &QuotationResult) -> Self {
        Self {
            customer_name: input.customer_name.clone(),
            system_type: input.system_type.to_string(),
            panel_brand: input.panel_brand.clone(),
            inverter_brand: input.inverter_brand.clone(),
            battery_brand: input.battery_brand.clone(),
            monthly_bill: input.monthly_bill,
            tariff_per_unit: input.tariff_per_unit,
            monthly_units: result.sizing.monthly_units,
            system_size_kw: result.sizing.system_size_kw,
            roof_area_sqft: result.sizing.roof_area_sqft,
            panel_cost: result.costs.panel_cost,
            inverter_cost: result.costs.inverter_cost,
            bos_cost: result.costs.bos_cost,
            battery_cost: result.costs.battery_cost,
            total_cost: result.costs.total_cost,
            central_subsidy: result.subsidy.central_subsidy,
            state_subsidy: result.subsidy.state_subsidy,
            net_payable: result.subsidy.net_payable,
            monthly_savings: result.finance.monthly_savings,
            annual_savings: result.finance.annual_savings,
            payback_years: result.finance.payback_years,
            roi_percent: result.finance.roi_percent,
        }
    }
}
