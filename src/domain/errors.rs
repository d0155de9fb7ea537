use thiserror::Error;

use crate::Amount;

/// Failures raised by an external payment system while charging or refunding.
///
/// The adapters hand these back exactly as the backend produced them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    #[error("{system} declined operation of {amount}")]
    Declined { system: String, amount: Amount },
    #[error("Payment system unavailable - {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum BrewPayError {
    #[error("Invalid argument {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("Error parsing CSV file - {0}")]
    CSVError(#[from] csv::Error),
}
