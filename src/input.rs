use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::io::Read;
use strum_macros::Display;

/// This module contains the input document for a single quotation request.

pub fn ingest_input(json: impl Read) -> Result<Input, anyhow::Error> {
    let input: Input = serde_json::from_reader(json)?;
    input
        .validate()
        .map_err(|err| anyhow!("Input failed validation: {err}"))?;

    Ok(input)
}

/// One customer's quotation request. Constructed per interaction and
/// immediately reduced to a quotation; never mutated or shared.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Input {
    pub customer_name: String,
    /// Average monthly electricity bill, in rupees.
    #[validate(minimum = 500.0)]
    #[validate(maximum = 50_000.0)]
    pub monthly_bill: f64,
    /// DISCOM billing rate, in rupees per unit.
    #[validate(minimum = 1.0)]
    #[validate(maximum = 15.0)]
    pub tariff_per_unit: f64,
    pub system_type: SystemType,
    pub panel_brand: String,
    pub inverter_brand: String,
    pub battery_brand: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum SystemType {
    #[serde(rename = "On-Grid")]
    #[strum(serialize = "On-Grid")]
    OnGrid,
    #[serde(rename = "Off-Grid")]
    #[strum(serialize = "Off-Grid")]
    OffGrid,
    Hybrid,
}

impl SystemType {
    /// Off-grid and hybrid systems are quoted with storage; on-grid systems
    /// feed back to the grid instead.
    pub fn has_battery(&self) -> bool {
        matches!(self, SystemType::OffGrid | SystemType::Hybrid)
    }
}
