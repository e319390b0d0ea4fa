//! Run with: cargo run --bin p1_flat_map

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("flat_map")
}
