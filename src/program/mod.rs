//! This module wires priced items and transaction processors into a runnable program.
//!
//! A [`Pipeline`] reads [`Operation`]s from some [`Source`], routes each one
//! through the [`TransactionProcessor`] registered for its [`Backend`] in a
//! [`ProcessorSet`], and writes one [`OperationRecord`] per operation to some
//! [`Sink`]. The first failure aborts the run.
use log::{debug, warn};
use rust_decimal_macros::dec;

use crate::{
    Backend, BackendError, BrewPayError, CSVOperationReader, CSVStdoutWriter, Coffee,
    ExternalPaymentSystemA, ExternalPaymentSystemB, InternalPaymentProcessor, MemorySource,
    Modifier, Operation, OperationRecord, OperationType, PaymentAdapterA, PaymentAdapterB,
    PricedItemExt, Sink, Source, Topping, TransactionProcessor,
};

/// One processor per [`Backend`], all behind the same contract.
pub struct ProcessorSet {
    internal: Box<dyn TransactionProcessor>,
    a: Box<dyn TransactionProcessor>,
    b: Box<dyn TransactionProcessor>,
}

impl std::fmt::Debug for ProcessorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorSet").finish()
    }
}

impl ProcessorSet {
    pub fn new(
        internal: Box<dyn TransactionProcessor>,
        a: Box<dyn TransactionProcessor>,
        b: Box<dyn TransactionProcessor>,
    ) -> Self {
        ProcessorSet { internal, a, b }
    }

    pub fn processor(&self, backend: Backend) -> &dyn TransactionProcessor {
        match backend {
            Backend::Internal => self.internal.as_ref(),
            Backend::A => self.a.as_ref(),
            Backend::B => self.b.as_ref(),
        }
    }

    /// Sends the operation to the processor of its backend.
    pub fn dispatch(&self, operation: &Operation) -> Result<(), BackendError> {
        debug!("Dispatching {:?}", operation);
        let processor = self.processor(operation.backend());
        match operation.ty() {
            OperationType::Charge => processor.charge(operation.amount()),
            OperationType::Refund => processor.refund(operation.amount()),
        }
    }
}

impl Default for ProcessorSet {
    fn default() -> Self {
        ProcessorSet::new(
            Box::new(InternalPaymentProcessor::new()),
            Box::new(PaymentAdapterA::new(ExternalPaymentSystemA::new())),
            Box::new(PaymentAdapterB::new(ExternalPaymentSystemB::new())),
        )
    }
}

/// Represents an operation pipeline, consisting of a source, the processors and a sink.
#[derive(Debug)]
pub struct OperationPipeline<S, K> {
    source: S,
    processors: ProcessorSet,
    sink: K,
}

impl<S, K> OperationPipeline<S, K> {
    pub fn new(source: S, processors: ProcessorSet, sink: K) -> Self {
        OperationPipeline {
            source,
            processors,
            sink,
        }
    }
}

/// Builder for constructing operation pipelines.
#[derive(Debug)]
pub struct OperationPipelineBuilder {}

impl OperationPipelineBuilder {
    /// Constructs a pipeline reading operations from the CSV file `filename`
    /// and writing results to stdout.
    pub fn csv_pipeline(filename: &str) -> Box<dyn Pipeline> {
        Box::new(OperationPipeline::new(
            CSVOperationReader::new(filename),
            ProcessorSet::default(),
            CSVStdoutWriter::new(),
        ))
    }

    /// Constructs a pipeline over [`scripted_operations`] writing results to stdout.
    pub fn scripted_pipeline() -> Box<dyn Pipeline> {
        Box::new(OperationPipeline::new(
            MemorySource::new(scripted_operations()),
            ProcessorSet::default(),
            CSVStdoutWriter::new(),
        ))
    }
}

/// A runnable batch of operations.
pub trait Pipeline {
    /// Dispatches every operation in order and writes its record.
    ///
    /// Stops at the first read, backend or sink error and returns it; records
    /// already written stay written.
    fn run(&mut self) -> Result<(), BrewPayError>;
}

impl<S, K> Pipeline for OperationPipeline<S, K>
where
    S: Source,
    K: Sink,
{
    fn run(&mut self) -> Result<(), BrewPayError> {
        let reader = self.source.read()?;
        for record in reader {
            let operation = record?;
            if let Err(e) = self.processors.dispatch(&operation) {
                warn!("{:?} failed: {}", operation, e);
                return Err(e.into());
            }
            self.sink.write(OperationRecord::from(&operation))?;
        }
        Ok(())
    }
}

/// Coffee with milk, sugar, chocolate and vanilla.
pub fn scripted_beverage() -> Modifier {
    Coffee
        .with(Topping::milk())
        .with(Topping::sugar())
        .with(Topping::chocolate())
        .with(Topping::vanilla())
}

/// A charge and a refund against every backend.
pub fn scripted_operations() -> Vec<Operation> {
    [
        (Backend::Internal, dec!(100), dec!(50)),
        (Backend::A, dec!(200), dec!(100)),
        (Backend::B, dec!(300), dec!(150)),
    ]
    .into_iter()
    .flat_map(|(backend, charge, refund)| {
        [
            Operation::builder()
                .backend(backend)
                .ty(OperationType::Charge)
                .amount(charge)
                .build(),
            Operation::builder()
                .backend(backend)
                .ty(OperationType::Refund)
                .amount(refund)
                .build(),
        ]
    })
    .collect()
}
