use std::fs;
use std::path::Path;

use digquest_sync::media::{optimize_image, OptimizeOptions};

use crate::error::CliError;

pub fn run_optimize(
    input: &Path,
    output: &Path,
    options: &OptimizeOptions,
) -> Result<(), CliError> {
    let source = fs::read(input)?;
    let optimized = optimize_image(&source, options)?;
    fs::write(output, &optimized.bytes)?;

    if optimized.unchanged {
        println!(
            "Already within constraints; wrote original ({} bytes)",
            optimized.bytes.len()
        );
    } else {
        println!(
            "Optimized {} -> {} bytes ({}x{})",
            source.len(),
            optimized.bytes.len(),
            optimized.width,
            optimized.height
        );
    }
    Ok(())
}
