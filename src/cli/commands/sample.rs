use anyhow::Result;
use compute::generator::SampleDataGenerator;
use std::io::Write;
use tracing::{debug, trace};

pub fn sample(seed: Option<u64>) -> Result<()> {
    trace!("Entering sample function");
    let table = SampleDataGenerator::new(seed).table()?;
    debug!("Generated sample table with {} rows", table.height());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    table.write_csv(&mut out)?;
    out.flush()?;
    Ok(())
}
