//! Run with: cargo run --bin p2_match_find

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("match_find")
}
