//! Run with: cargo run --bin p1_sorted

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("sorted")
}
