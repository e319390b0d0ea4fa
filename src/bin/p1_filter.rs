//! Run with: cargo run --bin p1_filter

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("filter")
}
