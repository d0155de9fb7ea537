use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[cfg(test)]
use fake::Dummy;

/// Monetary value used for item costs and transaction amounts.
pub type Amount = Decimal;

/// Processor an operation is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(Dummy))]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Internal,
    A,
    B,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Internal => write!(f, "internal"),
            Backend::A => write!(f, "a"),
            Backend::B => write!(f, "b"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(test, derive(Dummy))]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Charge,
    Refund,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationType::Charge => write!(f, "charge"),
            OperationType::Refund => write!(f, "refund"),
        }
    }
}

/// A single charge or refund request read by the driver.
#[derive(Deserialize, Clone, PartialEq, TypedBuilder)]
#[cfg_attr(test, derive(Dummy))]
pub struct Operation {
    backend: Backend,
    #[serde(rename = "type")]
    ty: OperationType,
    #[builder(setter(into))]
    amount: Amount,
}

impl Operation {
    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn ty(&self) -> OperationType {
        self.ty
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Operation [backend {} - type {} - amount {}]",
            self.backend, self.ty, self.amount
        )
    }
}

/// Status column of an [`OperationRecord`].
///
/// A failing operation aborts the run before anything is written, so records
/// only exist for operations the processor accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    Done,
}

/// Outcome written by the driver once an operation went through its processor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationRecord {
    backend: Backend,
    #[serde(rename = "type")]
    ty: OperationType,
    amount: Amount,
    status: OperationStatus,
}

impl From<&Operation> for OperationRecord {
    fn from(operation: &Operation) -> Self {
        OperationRecord {
            backend: operation.backend,
            ty: operation.ty,
            amount: operation.amount,
            status: OperationStatus::Done,
        }
    }
}

/// Final description and cost of a priced item.
#[derive(Debug, Clone, PartialEq, Serialize, TypedBuilder)]
pub struct Receipt {
    #[builder(setter(into))]
    description: String,
    cost: Amount,
}

impl Receipt {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> Amount {
        self.cost
    }
}
