//! Run with: cargo run --bin p2_to_array

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("to_array")
}
