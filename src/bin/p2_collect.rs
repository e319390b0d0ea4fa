//! Run with: cargo run --bin p2_collect

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("collect")
}
