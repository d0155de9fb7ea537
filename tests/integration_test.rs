use std::cell::RefCell;
use std::rc::Rc;

use brew_pay::*;
use rust_decimal_macros::dec;

type Calls = Rc<RefCell<Vec<(&'static str, Amount)>>>;

#[derive(Default)]
struct RecordingSystemA {
    calls: Calls,
}

impl PaymentSystemA for RecordingSystemA {
    fn make_payment(&self, amount: Amount) -> Result<(), BackendError> {
        self.calls.borrow_mut().push(("make_payment", amount));
        Ok(())
    }

    fn make_refund(&self, amount: Amount) -> Result<(), BackendError> {
        self.calls.borrow_mut().push(("make_refund", amount));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingSystemB {
    calls: Calls,
}

impl PaymentSystemB for RecordingSystemB {
    fn send_payment(&self, amount: Amount) -> Result<(), BackendError> {
        self.calls.borrow_mut().push(("send_payment", amount));
        Ok(())
    }

    fn process_refund(&self, amount: Amount) -> Result<(), BackendError> {
        self.calls.borrow_mut().push(("process_refund", amount));
        Ok(())
    }
}

struct DecliningSystemB;

impl PaymentSystemB for DecliningSystemB {
    fn send_payment(&self, amount: Amount) -> Result<(), BackendError> {
        Err(BackendError::Declined {
            system: "B".to_string(),
            amount,
        })
    }

    fn process_refund(&self, _amount: Amount) -> Result<(), BackendError> {
        Err(BackendError::Unavailable("refunds disabled".to_string()))
    }
}

#[test]
fn test_coffee_with_every_topping() {
    let drink = Coffee
        .with(Topping::milk())
        .with(Topping::sugar())
        .with(Topping::chocolate())
        .with(Topping::vanilla());

    assert_eq!(drink.cost(), dec!(88));
    assert_eq!(drink.description(), "Coffee, Milk, Sugar, Chocolate, Vanilla");
}

#[test]
fn test_missing_inner_item() {
    let result = Modifier::try_new(None, Topping::vanilla());

    assert!(matches!(result, Err(BrewPayError::InvalidArgument(_))));
}

#[test]
fn test_adapter_a_single_call_per_operation() {
    let system = RecordingSystemA::default();
    let calls = system.calls.clone();
    let processor: Box<dyn TransactionProcessor> = Box::new(PaymentAdapterA::new(system));

    processor.charge(dec!(200)).unwrap();
    assert_eq!(*calls.borrow(), vec![("make_payment", dec!(200))]);

    processor.refund(dec!(100)).unwrap();
    assert_eq!(
        *calls.borrow(),
        vec![("make_payment", dec!(200)), ("make_refund", dec!(100))]
    );
}

#[test]
fn test_adapter_b_single_call_per_operation() {
    let system = RecordingSystemB::default();
    let calls = system.calls.clone();
    let processor: Box<dyn TransactionProcessor> = Box::new(PaymentAdapterB::new(system));

    processor.charge(dec!(300.0050)).unwrap();
    processor.refund(dec!(150)).unwrap();

    assert_eq!(
        *calls.borrow(),
        vec![("send_payment", dec!(300.0050)), ("process_refund", dec!(150))]
    );
}

#[test]
fn test_adapter_b_propagates_backend_errors() {
    let processor = PaymentAdapterB::new(DecliningSystemB);

    assert_eq!(
        processor.charge(dec!(75)),
        Err(BackendError::Declined {
            system: "B".to_string(),
            amount: dec!(75),
        })
    );
    assert_eq!(
        processor.refund(dec!(75)),
        Err(BackendError::Unavailable("refunds disabled".to_string()))
    );
}

#[test]
fn test_default_processors_accept_every_backend() {
    let processors = ProcessorSet::default();

    for operation in scripted_operations() {
        assert!(processors.dispatch(&operation).is_ok());
    }
}

#[test]
fn test_csv_pipeline() {
    let mut pipeline = OperationPipelineBuilder::csv_pipeline("tests/data/operations_ok.csv");

    assert!(pipeline.run().is_ok());
}

#[test]
fn test_csv_pipeline_with_invalid_backend() {
    let mut pipeline =
        OperationPipelineBuilder::csv_pipeline("tests/data/operations_bad_backend.csv");

    assert!(matches!(pipeline.run(), Err(BrewPayError::CSVError(_))));
}

#[test]
fn test_pipeline_aborts_on_declined_operation() {
    let processors = ProcessorSet::new(
        Box::new(InternalPaymentProcessor::new()),
        Box::new(PaymentAdapterA::new(RecordingSystemA::default())),
        Box::new(PaymentAdapterB::new(DecliningSystemB)),
    );
    let mut pipeline = OperationPipeline::new(
        MemorySource::new(scripted_operations()),
        processors,
        CSVStdoutWriter::new(),
    );

    assert!(matches!(
        pipeline.run(),
        Err(BrewPayError::Backend(BackendError::Declined { .. }))
    ));
}
