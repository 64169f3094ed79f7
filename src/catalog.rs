use anyhow::anyhow;
use indexmap::IndexMap;
use serde::Deserialize;
use std::io::Read;

use crate::input::Input;

/// This module contains the brand price tables the calculator resolves
/// against. The catalog is passed in as a read-only dependency rather than
/// loaded into ambient state, so the calculation stays pure and testable.

#[derive(Clone, Debug)]
pub struct PriceCatalog {
    panel_price_per_watt: IndexMap<String, f64>,
    inverter_price: IndexMap<String, f64>,
    battery_price_per_kwh: IndexMap<String, f64>,
}

#[derive(Clone, Debug, Deserialize)]
struct PanelPriceRow {
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(rename = "PricePerW")]
    price_per_w: f64,
}

#[derive(Clone, Debug, Deserialize)]
struct InverterPriceRow {
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(rename = "Price")]
    price: f64,
}

#[derive(Clone, Debug, Deserialize)]
struct BatteryPriceRow {
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(rename = "PricePerkWh")]
    price_per_kwh: f64,
}

/// Brand prices resolved from the catalog for one request; always strictly
/// positive for any brand the catalog offers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedPrices {
    /// Panel price, in rupees per watt.
    pub panel_price_per_watt: f64,
    /// Brand-selected flat inverter price, in rupees.
    pub inverter_fixed_price: f64,
    /// Battery price, in rupees per kWh of storage.
    pub battery_price_per_kwh: f64,
}

impl PriceCatalog {
    /// Load the three price tables from CSV. Column headers match the sheets
    /// of the original quotation workbook: `Brand,PricePerW` for panels,
    /// `Brand,Price` for inverters and `Brand,PricePerkWh` for batteries.
    pub fn from_csv(
        panel_prices: impl Read,
        inverter_prices: impl Read,
        battery_prices: impl Read,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            panel_price_per_watt: csv::Reader::from_reader(panel_prices)
                .deserialize::<PanelPriceRow>()
                .map(|row| row.map(|row| (row.brand, row.price_per_w)))
                .collect::<Result<_, _>>()?,
            inverter_price: csv::Reader::from_reader(inverter_prices)
                .deserialize::<InverterPriceRow>()
                .map(|row| row.map(|row| (row.brand, row.price)))
                .collect::<Result<_, _>>()?,
            battery_price_per_kwh: csv::Reader::from_reader(battery_prices)
                .deserialize::<BatteryPriceRow>()
                .map(|row| row.map(|row| (row.brand, row.price_per_kwh)))
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn panel_brands(&self) -> impl Iterator<Item = &str> {
        self.panel_price_per_watt.keys().map(String::as_str)
    }

    pub fn inverter_brands(&self) -> impl Iterator<Item = &str> {
        self.inverter_price.keys().map(String::as_str)
    }

    pub fn battery_brands(&self) -> impl Iterator<Item = &str> {
        self.battery_price_per_kwh.keys().map(String::as_str)
    }

    /// Look up all three brand selections of a request. A brand missing from
    /// its table is an error in whatever offered the brand to the customer,
    /// so it is reported rather than defaulted.
    pub fn resolve(&self, input: &Input) -> anyhow::Result<ResolvedPrices> {
        Ok(ResolvedPrices {
            panel_price_per_watt: price_from(
                &self.panel_price_per_watt,
                &input.panel_brand,
                "panel",
            )?,
            inverter_fixed_price: price_from(
                &self.inverter_price,
                &input.inverter_brand,
                "inverter",
            )?,
            battery_price_per_kwh: price_from(
                &self.battery_price_per_kwh,
                &input.battery_brand,
                "battery",
            )?,
        })
    }
}

fn price_from(table: &IndexMap<String, f64>, brand: &str, table_name: &str) -> anyhow::Result<f64> {
    table
        .get(brand)
        .copied()
        .ok_or_else(|| anyhow!("There was no {table_name} price for the brand '{brand}'"))
}

impl Default for PriceCatalog {
    /// Built-in price tables mirroring the brand sheets of the original
    /// quotation workbook, so the engine runs without any catalog files.
    fn default() -> Self {
        Self {
            panel_price_per_watt: IndexMap::from([
                ("Tata Power Solar".into(), 28.),
                ("Adani Solar".into(), 26.),
                ("Waaree".into(), 25.),
                ("Vikram Solar".into(), 24.),
            ]),
            inverter_price: IndexMap::from([
                ("Luminous".into(), 45_000.),
                ("Growatt".into(), 40_000.),
                ("Microtek".into(), 35_000.),
            ]),
            battery_price_per_kwh: IndexMap::from([
                ("Exide".into(), 18_000.),
                ("Amaron".into(), 20_000.),
                ("Okaya".into(), 16_000.),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SystemType;
    use rstest::*;

    #[fixture]
    fn input() -> Input {
        Input {
            customer_name: "Demo User".into(),
            monthly_bill: 4_000.,
            tariff_per_unit: 7.5,
            system_type: SystemType::Hybrid,
            panel_brand: "Tata Power Solar".into(),
            inverter_brand: "Luminous".into(),
            battery_brand: "Exide".into(),
        }
    }

    #[rstest]
    fn should_load_tables_from_csv(input: Input) {
        let catalog = PriceCatalog::from_csv(
            "Brand,PricePerW\nTata Power Solar,28\nWaaree,25\n".as_bytes(),
            "Brand,Price\nLuminous,45000\n".as_bytes(),
            "Brand,PricePerkWh\nExide,18000\n".as_bytes(),
        )
        .unwrap();
        let prices = catalog.resolve(&input).unwrap();
        assert_eq!(
            prices,
            ResolvedPrices {
                panel_price_per_watt: 28.,
                inverter_fixed_price: 45_000.,
                battery_price_per_kwh: 18_000.,
            }
        );
    }

    #[rstest]
    fn should_reject_malformed_csv() {
        let result = PriceCatalog::from_csv(
            "Brand,PricePerW\nTata Power Solar,not-a-price\n".as_bytes(),
            "Brand,Price\n".as_bytes(),
            "Brand,PricePerkWh\n".as_bytes(),
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn should_report_the_missing_brand_and_table(mut input: Input) {
        input.inverter_brand = "SunMagic".into();
        let error = PriceCatalog::default().resolve(&input).unwrap_err();
        assert_eq!(
            error.to_string(),
            "There was no inverter price for the brand 'SunMagic'"
        );
    }

    #[rstest]
    fn should_resolve_every_default_brand_combination(mut input: Input) {
        let catalog = PriceCatalog::default();
        let panels: Vec<String> = catalog.panel_brands().map(String::from).collect();
        let inverters: Vec<String> = catalog.inverter_brands().map(String::from).collect();
        let batteries: Vec<String> = catalog.battery_brands().map(String::from).collect();
        for panel in &panels {
            for inverter in &inverters {
                for battery in &batteries {
                    input.panel_brand = panel.clone();
                    input.inverter_brand = inverter.clone();
                    input.battery_brand = battery.clone();
                    assert!(catalog.resolve(&input).is_ok());
                }
            }
        }
    }

    #[rstest]
    fn should_preserve_catalog_order_for_selection_lists() {
        let catalog = PriceCatalog::from_csv(
            "Brand,PricePerW\nZodiac,30\nApex,29\nMid,28\n".as_bytes(),
            "Brand,Price\nLuminous,45000\n".as_bytes(),
            "Brand,PricePerkWh\nExide,18000\n".as_bytes(),
        )
        .unwrap();
        let brands: Vec<&str> = catalog.panel_brands().collect();
        assert_eq!(brands, ["Zodiac", "Apex", "Mid"]);
    }
}
