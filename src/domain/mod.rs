//! Module that describe domain entities and errors.
mod entities;
mod errors;

pub use entities::Amount;
pub use entities::Backend;
pub use entities::Operation;
pub use entities::OperationRecord;
pub use entities::OperationStatus;
pub use entities::OperationType;
pub use entities::Receipt;
pub use errors::*;
