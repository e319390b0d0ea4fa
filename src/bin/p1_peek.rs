//! Run with: cargo run --bin p1_peek

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("peek")
}
