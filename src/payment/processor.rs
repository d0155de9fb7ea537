use log::info;

use crate::{Amount, BackendError};

/// Unified contract for charging and refunding money, whatever system sits behind it.
///
/// Implementations route each call to exactly one backend action carrying
/// `amount` unchanged. The amount is not validated here.
#[cfg_attr(test, mockall::automock)]
pub trait TransactionProcessor {
    fn charge(&self, amount: Amount) -> Result<(), BackendError>;
    fn refund(&self, amount: Amount) -> Result<(), BackendError>;
}

impl<T: TransactionProcessor + ?Sized> TransactionProcessor for Box<T> {
    fn charge(&self, amount: Amount) -> Result<(), BackendError> {
        (**self).charge(amount)
    }

    fn refund(&self, amount: Amount) -> Result<(), BackendError> {
        (**self).refund(amount)
    }
}

/// Processor that performs the operation itself, no translation involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternalPaymentProcessor;

impl InternalPaymentProcessor {
    pub fn new() -> Self {
        InternalPaymentProcessor
    }
}

impl TransactionProcessor for InternalPaymentProcessor {
    fn charge(&self, amount: Amount) -> Result<(), BackendError> {
        info!("Processing payment of {} via internal system", amount);
        Ok(())
    }

    fn refund(&self, amount: Amount) -> Result<(), BackendError> {
        info!("Refunding payment of {} via internal system", amount);
        Ok(())
    }
}
