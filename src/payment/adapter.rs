//! Adapters exposing the external payment systems as [`TransactionProcessor`]s.
//!
//! Each adapter owns its backend and forwards every call one to one. Amounts
//! and errors go through untouched.
use std::fmt;

use super::{ExternalPaymentSystemA, ExternalPaymentSystemB, PaymentSystemA, PaymentSystemB};
use super::TransactionProcessor;
use crate::{Amount, BackendError};

pub struct PaymentAdapterA<S = ExternalPaymentSystemA> {
    system: S,
}

impl<S: PaymentSystemA> PaymentAdapterA<S> {
    pub fn new(system: S) -> Self {
        PaymentAdapterA { system }
    }
}

impl<S> fmt::Debug for PaymentAdapterA<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentAdapterA").finish()
    }
}

impl<S: PaymentSystemA> TransactionProcessor for PaymentAdapterA<S> {
    fn charge(&self, amount: Amount) -> Result<(), BackendError> {
        self.system.make_payment(amount)
    }

    fn refund(&self, amount: Amount) -> Result<(), BackendError> {
        self.system.make_refund(amount)
    }
}

pub struct PaymentAdapterB<S = ExternalPaymentSystemB> {
    system: S,
}

impl<S: PaymentSystemB> PaymentAdapterB<S> {
    pub fn new(system: S) -> Self {
        PaymentAdapterB { system }
    }
}

impl<S> fmt::Debug for PaymentAdapterB<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentAdapterB").finish()
    }
}

impl<S: PaymentSystemB> TransactionProcessor for PaymentAdapterB<S> {
    fn charge(&self, amount: Amount) -> Result<(), BackendError> {
        self.system.send_payment(amount)
    }

    fn refund(&self, amount: Amount) -> Result<(), BackendError> {
        self.system.process_refund(amount)
    }
}
