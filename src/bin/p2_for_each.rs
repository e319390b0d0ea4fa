//! Run with: cargo run --bin p2_for_each

use stream_pipelines::{catalogue, PipelineError};

fn main() -> Result<(), PipelineError> {
    catalogue::standalone("for_each")
}
