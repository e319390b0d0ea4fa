//! Run with: cargo run --bin p2_count

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("count")
}
