mod csv;

pub use self::csv::CSVOperationReader;
pub use self::csv::CSVStdoutWriter;

use crate::BrewPayError;
use crate::Operation;
use crate::OperationRecord;

pub trait Source {
    fn read(
        &mut self,
    ) -> Result<Box<dyn Iterator<Item = Result<Operation, BrewPayError>> + '_>, BrewPayError>;
}

impl Source for CSVOperationReader {
    fn read(
        &mut self,
    ) -> Result<Box<dyn Iterator<Item = Result<Operation, BrewPayError>> + '_>, BrewPayError>
    {
        Ok(Box::new(self.iter()?))
    }
}

/// Operations kept in memory, used for scripted runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    operations: Vec<Operation>,
}

impl MemorySource {
    pub fn new(operations: Vec<Operation>) -> Self {
        MemorySource { operations }
    }
}

impl Source for MemorySource {
    fn read(
        &mut self,
    ) -> Result<Box<dyn Iterator<Item = Result<Operation, BrewPayError>> + '_>, BrewPayError>
    {
        Ok(Box::new(self.operations.iter().cloned().map(Ok)))
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Sink {
    fn write(&mut self, record: OperationRecord) -> Result<(), BrewPayError>;
}

impl Sink for CSVStdoutWriter {
    fn write(&mut self, record: OperationRecord) -> Result<(), BrewPayError> {
        self.write_record(&record)
    }
}
