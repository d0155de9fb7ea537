use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Stdout};

use serde::Serialize;

use crate::{BrewPayError, Operation};

/// Reads operations from a CSV file with headers `backend,type,amount`.
#[derive(Debug)]
pub struct CSVOperationReader {
    filename: String,
}

impl CSVOperationReader {
    pub fn new(filename: &str) -> Self {
        CSVOperationReader {
            filename: filename.to_string(),
        }
    }

    pub fn iter(
        &mut self,
    ) -> Result<impl Iterator<Item = Result<Operation, BrewPayError>>, BrewPayError> {
        let file = File::open(&self.filename).map_err(csv::Error::from)?;
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));
        Ok(reader
            .into_deserialize::<Operation>()
            .map(|record| record.map_err(BrewPayError::from)))
    }
}

/// Writes serializable records as CSV to stdout, headers first.
pub struct CSVStdoutWriter {
    writer: csv::Writer<Stdout>,
}

impl fmt::Debug for CSVStdoutWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CSVStdoutWriter")
    }
}

impl CSVStdoutWriter {
    pub fn new() -> Self {
        CSVStdoutWriter {
            writer: csv::Writer::from_writer(io::stdout()),
        }
    }

    pub fn write_record<R: Serialize>(&mut self, record: &R) -> Result<(), BrewPayError> {
        self.writer.serialize(record)?;
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

impl Default for CSVStdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}
