//! Media utilities for upload flows

mod optimize;

pub use optimize::{optimize_image, OptimizeOptions, OptimizedImage};
