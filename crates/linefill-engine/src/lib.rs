//! linefill engine crate.
//!
//! Owns the file and process-level pieces around `linefill-core`: raster
//! I/O, logger setup and the end-to-end pipeline.

pub mod io;
pub mod logging;
pub mod pipeline;

pub use pipeline::{run, RunConfig, DEFAULT_OUTPUT_PATH};
