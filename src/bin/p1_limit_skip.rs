//! Run with: cargo run --bin p1_limit_skip

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("limit_skip")
}
