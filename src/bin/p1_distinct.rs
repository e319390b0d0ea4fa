//! Run with: cargo run --bin p1_distinct

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("distinct")
}
