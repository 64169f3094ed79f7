pub mod catalog;
pub mod core;
pub mod errors;
pub mod input;
pub mod output;
pub mod quotation;
pub mod report;

use std::io::Read;
use tracing::info;

use crate::catalog::PriceCatalog;
use crate::errors::QuoteError;
use crate::input::ingest_input;
use crate::output::Output;
use crate::quotation::{calculate_quotation, QuotationDocument, QuotationRequest};
use crate::report::{write_breakdown_file, write_quotation_document};

/// Run one quotation end to end: ingest the request JSON, resolve brand
/// prices from the catalog, derive the quotation and write both reports
/// through the output. Returns the flattened document so callers can render
/// their own on-screen summary from the same figures.
pub fn run_project(
    input: impl Read,
    catalog: &PriceCatalog,
    output: impl Output,
) -> Result<QuotationDocument, QuoteError> {
    let input = ingest_input(input)?;
    let prices = catalog.resolve(&input)?;

    let request = QuotationRequest::new(&input, prices);
    let result = calculate_quotation(&request)?;
    info!(
        "Quotation derived for {}: {} kW {} system, net payable {:.0}",
        input.customer_name, result.sizing.system_size_kw, input.system_type, result.subsidy.net_payable
    );

    let document = QuotationDocument::new(&input, &result);
    if !output.is_noop() {
        write_breakdown_file(&output, &document).map_err(QuoteError::FailureInReporting)?;
        write_quotation_document(&output, &document).map_err(QuoteError::FailureInReporting)?;
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{MemoryOutput, SinkOutput};
    use crate::report::{BREAKDOWN_LOCATION_KEY, QUOTATION_LOCATION_KEY};
    use rstest::*;

    #[fixture]
    fn request_json() -> String {
        r#"{
            "CustomerName": "Demo User",
            "MonthlyBill": 4000,
            "TariffPerUnit": 7.5,
            "SystemType": "Hybrid",
            "PanelBrand": "Tata Power Solar",
            "InverterBrand": "Luminous",
            "BatteryBrand": "Exide"
        }"#
        .to_owned()
    }

    #[rstest]
    fn should_run_a_quotation_end_to_end(request_json: String) {
        let output = MemoryOutput::default();
        let document =
            run_project(request_json.as_bytes(), &PriceCatalog::default(), &output).unwrap();

        // default catalog: panels 28/W, inverter flat 45,000, battery 18,000/kWh
        assert_eq!(document.system_size_kw, 5);
        assert_eq!(document.total_cost, 415_000.);
        assert_eq!(document.net_payable, 307_000.);
        assert_eq!(document.payback_years, Some(9.1));
        assert_eq!(document.roi_percent, Some(10.9));

        let sheet = output
            .contents_for_location_key(QUOTATION_LOCATION_KEY)
            .unwrap();
        assert!(sheet.contains("Net Payable: Rs.307,000"));
        let breakdown = output
            .contents_for_location_key(BREAKDOWN_LOCATION_KEY)
            .unwrap();
        assert!(breakdown.contains("Net payable,307000,[INR]"));
    }

    #[rstest]
    fn should_skip_report_writing_for_a_noop_output(request_json: String) {
        let document =
            run_project(request_json.as_bytes(), &PriceCatalog::default(), SinkOutput).unwrap();
        assert_eq!(document.system_size_kw, 5);
    }

    #[rstest]
    fn should_reject_an_unknown_brand_as_an_invalid_request(request_json: String) {
        let json = request_json.replace("Luminous", "SunMagic");
        let error = run_project(
            json.as_bytes(),
            &PriceCatalog::default(),
            MemoryOutput::default(),
        )
        .unwrap_err();
        assert!(matches!(error, QuoteError::InvalidRequest(_)));
    }

    #[rstest]
    fn should_reject_an_out_of_bounds_bill(request_json: String) {
        let json = request_json.replace("\"MonthlyBill\": 4000", "\"MonthlyBill\": 100");
        let error = run_project(
            json.as_bytes(),
            &PriceCatalog::default(),
            MemoryOutput::default(),
        )
        .unwrap_err();
        assert!(matches!(error, QuoteError::InvalidRequest(_)));
    }
}
