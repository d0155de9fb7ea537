//! Third party payment systems. Neither of them speaks the
//! [`TransactionProcessor`](crate::TransactionProcessor) contract, each one has
//! its own names for charging and refunding.
use log::info;

use crate::{Amount, BackendError};

/// Method shape exposed by external payment system A.
#[cfg_attr(test, mockall::automock)]
pub trait PaymentSystemA {
    fn make_payment(&self, amount: Amount) -> Result<(), BackendError>;
    fn make_refund(&self, amount: Amount) -> Result<(), BackendError>;
}

/// Method shape exposed by external payment system B.
#[cfg_attr(test, mockall::automock)]
pub trait PaymentSystemB {
    fn send_payment(&self, amount: Amount) -> Result<(), BackendError>;
    fn process_refund(&self, amount: Amount) -> Result<(), BackendError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalPaymentSystemA;

impl ExternalPaymentSystemA {
    pub fn new() -> Self {
        ExternalPaymentSystemA
    }
}

impl PaymentSystemA for ExternalPaymentSystemA {
    fn make_payment(&self, amount: Amount) -> Result<(), BackendError> {
        info!("Making payment of {} via External Payment System A", amount);
        Ok(())
    }

    fn make_refund(&self, amount: Amount) -> Result<(), BackendError> {
        info!("Making refund of {} via External Payment System A", amount);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalPaymentSystemB;

impl ExternalPaymentSystemB {
    pub fn new() -> Self {
        ExternalPaymentSystemB
    }
}

impl PaymentSystemB for ExternalPaymentSystemB {
    fn send_payment(&self, amount: Amount) -> Result<(), BackendError> {
        info!("Sending payment of {} via External Payment System B", amount);
        Ok(())
    }

    fn process_refund(&self, amount: Amount) -> Result<(), BackendError> {
        info!("Processing refund of {} via External Payment System B", amount);
        Ok(())
    }
}
