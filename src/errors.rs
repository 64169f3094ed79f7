use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Request was considered invalid due to error: {0}")]
    InvalidRequest(#[from] anyhow::Error),
    #[error("Error identified during quotation calculation: {0}")]
    FailureInCalculation(#[from] CalculationError),
    #[error("Error while writing quotation reports: {0}")]
    FailureInReporting(#[source] anyhow::Error),
}

/// Errors the calculator itself can signal. The input layer rejects
/// out-of-bounds values before they reach the calculator, but divisions are
/// still guarded here so a zero tariff surfaces as an explicit error rather
/// than a non-finite number propagating through the derivation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalculationError {
    #[error("monthly consumption cannot be derived: tariff per unit must be strictly positive, was {0}")]
    DivisionByZero(f64),
}
