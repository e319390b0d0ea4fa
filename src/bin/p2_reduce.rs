//! Run with: cargo run --bin p2_reduce

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("reduce")
}
