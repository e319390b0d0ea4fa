//! Run with: cargo run --bin p2_min_max

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("min_max")
}
