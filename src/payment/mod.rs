//! Transaction processors and the adapters that bring external payment systems under the same contract.
mod adapter;
mod external;
mod processor;

pub use adapter::PaymentAdapterA;
pub use adapter::PaymentAdapterB;
pub use external::ExternalPaymentSystemA;
pub use external::ExternalPaymentSystemB;
pub use external::PaymentSystemA;
pub use external::PaymentSystemB;
pub use processor::InternalPaymentProcessor;
pub use processor::TransactionProcessor;

#[cfg(test)]
pub use processor::MockTransactionProcessor;
