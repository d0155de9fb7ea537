use anyhow::Context;
use brew_pay::{CSVStdoutWriter, OperationPipelineBuilder, PricedItem};
use log::info;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        println!("Usage: {} [operations-csv-filename]", args[0]);
        return Ok(());
    }

    let mut pipeline = match args.get(1) {
        Some(filename) => {
            info!("Processing operations from {}", filename);
            OperationPipelineBuilder::csv_pipeline(filename)
        }
        None => {
            let receipt = brew_pay::scripted_beverage().receipt();
            CSVStdoutWriter::new()
                .write_record(&receipt)
                .context("writing receipt")?;
            println!();
            OperationPipelineBuilder::scripted_pipeline()
        }
    };

    pipeline.run().context("running operation pipeline")?;
    Ok(())
}
