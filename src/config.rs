//! Runtime settings for the catalogue.
//!
//! Settings come from a TOML file when one is found and fall back to the
//! defaults below. `STREAMS_THREADS` overrides the parallel thread count.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{PipelineError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "streams.toml";
pub const THREADS_ENV: &str = "STREAMS_THREADS";

/// Datasets are `i32` ranges starting at zero.
const MAX_ELEMENTS: usize = i32::MAX as usize;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub parallel: ParallelConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallelConfig {
    /// Worker count for the custom pool demonstration.
    pub threads: usize,
    /// Size of the generated dataset for the comprehensive demonstration.
    pub dataset_size: usize,
    /// Inner loop length of the CPU-heavy map.
    pub cpu_iterations: usize,
    /// Simulated per-element work for the comparison runs.
    pub work_delay_ms: u64,
    /// Simulated per-element latency for the I/O-bound map.
    pub io_delay_ms: u64,
    pub size_sweep: Vec<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            threads: 4,
            dataset_size: 100_000,
            cpu_iterations: 100_000,
            work_delay_ms: 1,
            io_delay_ms: 10,
            size_sweep: vec![100, 1_000, 10_000, 100_000, 1_000_000],
        }
    }
}

impl ParallelConfig {
    pub fn work_delay(&self) -> Duration {
        Duration::from_millis(self.work_delay_ms)
    }

    pub fn io_delay(&self) -> Duration {
        Duration::from_millis(self.io_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PipelineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Explicit path first, then `streams.toml` in the working directory,
    /// then defaults. Environment overrides apply last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let threads = env::var(THREADS_ENV).ok();
        Self::resolve(explicit, Path::new("."), threads.as_deref())
    }

    /// Lookup with the working directory and the thread override passed in.
    fn resolve(explicit: Option<&Path>, dir: &Path, threads: Option<&str>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::from_file(path)?
            }
            None => {
                let fallback = dir.join(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    debug!(path = %fallback.display(), "loading config");
                    Self::from_file(&fallback)?
                } else {
                    debug!("no config file found, using defaults");
                    Self::default()
                }
            }
        };

        if let Some(raw) = threads {
            config.apply_threads_override(raw)?;
        }
        Ok(config)
    }

    fn apply_threads_override(&mut self, raw: &str) -> Result<()> {
        let threads = raw.trim().parse::<usize>().map_err(|err| {
            PipelineError::invalid_config("parallel.threads", format!("{THREADS_ENV}={raw}: {err}"))
        })?;
        self.parallel.threads = threads;
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.parallel.threads == 0 {
            return Err(PipelineError::invalid_config(
                "parallel.threads",
                "must be at least 1",
            ));
        }
        if self.parallel.size_sweep.is_empty() {
            return Err(PipelineError::invalid_config(
                "parallel.size_sweep",
                "must list at least one size",
            ));
        }
        if self.parallel.dataset_size > MAX_ELEMENTS {
            return Err(PipelineError::invalid_config(
                "parallel.dataset_size",
                format!("must not exceed {MAX_ELEMENTS}"),
            ));
        }
        if let Some(size) = self.parallel.size_sweep.iter().find(|&&s| s > MAX_ELEMENTS) {
            return Err(PipelineError::invalid_config(
                "parallel.size_sweep",
                format!("{size} exceeds {MAX_ELEMENTS}"),
            ));
        }
        Ok(())
    }
}
