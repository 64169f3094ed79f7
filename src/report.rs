use csv::WriterBuilder;
use std::io::Write;

use crate::output::Output;
use crate::quotation::QuotationDocument;

/// This module contains the two presentation layers: a machine-readable CSV
/// breakdown and a fixed-layout quotation sheet. Both consume the same
/// flattened document and never recompute a figure.

pub const BREAKDOWN_LOCATION_KEY: &str = "breakdown.csv";
pub const QUOTATION_LOCATION_KEY: &str = "quotation.txt";

const COMPANY_NAME: &str = "Bharat Solar Shakti Pvt Ltd";
const COMPANY_TAGLINE: &str = "Your trusted partner for clean & affordable solar energy";
const COMPANY_CONTACT: &str = "Contact us: +91 6393982201  |  +91 9036126123";
const COMPANY_WEBSITE: &str = "www.bharatsolarshakti.com";

const SHEET_WIDTH: usize = 64;

/// Write the full breakdown as a three-column CSV (item, value, unit).
pub fn write_breakdown_file(
    output: impl Output,
    document: &QuotationDocument,
) -> anyhow::Result<()> {
    let writer = output.writer_for_location_key(BREAKDOWN_LOCATION_KEY)?;
    let mut writer = WriterBuilder::new().from_writer(writer);

    let rows: Vec<(&str, String, &str)> = vec![
        ("Item", "Value".to_owned(), "Unit"),
        ("Customer", document.customer_name.clone(), ""),
        ("System type", document.system_type.clone(), ""),
        ("Panel brand", document.panel_brand.clone(), ""),
        ("Inverter brand", document.inverter_brand.clone(), ""),
        ("Battery brand", document.battery_brand.clone(), ""),
        ("Monthly bill", document.monthly_bill.to_string(), "[INR]"),
        (
            "Tariff per unit",
            document.tariff_per_unit.to_string(),
            "[INR/unit]",
        ),
        (
            "Monthly consumption",
            format!("{:.2}", document.monthly_units),
            "[units]",
        ),
        ("System size", document.system_size_kw.to_string(), "[kW]"),
        ("Roof area", document.roof_area_sqft.to_string(), "[sqft]"),
        ("Panel cost", document.panel_cost.to_string(), "[INR]"),
        ("Inverter cost", document.inverter_cost.to_string(), "[INR]"),
        ("BOS cost", document.bos_cost.to_string(), "[INR]"),
        ("Battery cost", document.battery_cost.to_string(), "[INR]"),
        ("Total cost", document.total_cost.to_string(), "[INR]"),
        (
            "Central subsidy",
            document.central_subsidy.to_string(),
            "[INR]",
        ),
        ("State subsidy", document.state_subsidy.to_string(), "[INR]"),
        ("Net payable", document.net_payable.to_string(), "[INR]"),
        (
            "Monthly savings",
            document.monthly_savings.to_string(),
            "[INR]",
        ),
        (
            "Annual savings",
            document.annual_savings.to_string(),
            "[INR]",
        ),
        (
            "Payback period",
            optional_metric(document.payback_years),
            "[years]",
        ),
        ("ROI", optional_metric(document.roi_percent), "[%]"),
    ];
    for (item, value, unit) in rows {
        writer.write_record([item, value.as_str(), unit])?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the fixed-layout quotation sheet: header, customer block, cost
/// breakdown, subsidy block, financial block, fixed footer.
pub fn write_quotation_document(
    output: impl Output,
    document: &QuotationDocument,
) -> anyhow::Result<()> {
    let mut writer = output.writer_for_location_key(QUOTATION_LOCATION_KEY)?;
    writer.write_all(render_quotation_text(document).as_bytes())?;
    writer.flush()?;

    Ok(())
}

/// Render the quotation sheet; also used by the CLI for the on-screen
/// summary so the screen and the exported document never disagree.
pub fn render_quotation_text(document: &QuotationDocument) -> String {
    let mut sheet = String::new();

    sheet.push_str(&format!("{:^SHEET_WIDTH$}\n", COMPANY_NAME));
    sheet.push_str(&format!("{:^SHEET_WIDTH$}\n", COMPANY_TAGLINE));
    sheet.push_str(&format!("{}\n\n", "=".repeat(SHEET_WIDTH)));

    sheet.push_str(&format!("Customer: {}\n", document.customer_name));
    sheet.push_str(&format!(
        "Recommended System Size: {} kW ({})\n",
        document.system_size_kw, document.system_type
    ));
    sheet.push_str(&format!(
        "Required Roof Size: {} sqft\n\n",
        document.roof_area_sqft
    ));

    sheet.push_str("Cost Breakdown:\n");
    sheet.push_str(&format!(
        "  - Panel Brand: {}, Cost: Rs.{}\n",
        document.panel_brand,
        format_rupees(document.panel_cost)
    ));
    sheet.push_str(&format!(
        "  - Inverter Brand: {}, Cost: Rs.{}\n",
        document.inverter_brand,
        format_rupees(document.inverter_cost)
    ));
    sheet.push_str(&format!(
        "  - BOS Cost: Rs.{}\n",
        format_rupees(document.bos_cost)
    ));
    sheet.push_str(&format!(
        "  - Battery Brand: {}, Cost: Rs.{}\n",
        document.battery_brand,
        format_rupees(document.battery_cost)
    ));
    sheet.push_str(&format!(
        "  Total Cost: Rs.{}\n\n",
        format_rupees(document.total_cost)
    ));

    sheet.push_str("Subsidies:\n");
    sheet.push_str(&format!(
        "  - Central Subsidy: Rs.{}\n",
        format_rupees(document.central_subsidy)
    ));
    sheet.push_str(&format!(
        "  - State Subsidy (UP): Rs.{}\n",
        format_rupees(document.state_subsidy)
    ));
    sheet.push_str(&format!(
        "  Net Payable: Rs.{}\n\n",
        format_rupees(document.net_payable)
    ));

    sheet.push_str("Financials:\n");
    sheet.push_str(&format!(
        "  - Estimated Monthly Savings: Rs.{}\n",
        format_rupees(document.monthly_savings)
    ));
    sheet.push_str(&format!(
        "  - Annual Savings: Rs.{}\n",
        format_rupees(document.annual_savings)
    ));
    sheet.push_str(&format!(
        "  - Payback Period: {}\n",
        match document.payback_years {
            Some(years) => format!("{years:.1} years"),
            None => "N/A".to_owned(),
        }
    ));
    sheet.push_str(&format!(
        "  - ROI: {}\n\n",
        match document.roi_percent {
            Some(percent) => format!("{percent:.1}%"),
            None => "N/A".to_owned(),
        }
    ));

    sheet.push_str(&format!("{}\n", "-".repeat(SHEET_WIDTH)));
    sheet.push_str(&format!("{:^SHEET_WIDTH$}\n", COMPANY_CONTACT));
    sheet.push_str(&format!("{:^SHEET_WIDTH$}\n", COMPANY_WEBSITE));

    sheet
}

fn optional_metric(metric: Option<f64>) -> String {
    match metric {
        Some(value) => value.to_string(),
        None => "N/A".to_owned(),
    }
}

/// Format a rupee amount to whole rupees with thousands separators, e.g.
/// `415000.0` as `415,000` and `-5000.0` as `-5,000`.
fn format_rupees(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::new();
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if rounded < 0. {
        format!("-{grouped}")
    } else {
        grouped
    }
}
