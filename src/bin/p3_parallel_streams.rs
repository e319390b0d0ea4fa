//! Run with: cargo run --release --bin p3_parallel_streams

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("parallel")
}
