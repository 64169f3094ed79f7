pub mod costs;
pub mod finance;
pub mod sizing;
pub mod subsidy;
pub mod units;
