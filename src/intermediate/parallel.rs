//! Parallel iteration with Rayon.
//!
//! Run with: cargo run --bin p3_parallel_streams
//!
//! ## When to reach for `par_iter`
//!
//! Worth it:
//! - large inputs (roughly 10,000 elements and up)
//! - CPU-heavy work per element
//! - independent elements with no shared mutable state
//!
//! Not worth it:
//! - small inputs, where splitting costs more than the work
//! - pipelines with ordering dependencies between elements
//!
//! Rayon splits the input recursively and schedules the halves on a
//! work-stealing pool; `collect` on an indexed iterator reassembles results
//! in input order. Every timing here is wall-clock and varies run to run.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{Config, ParallelConfig};
use crate::employee::{fixtures, Employee};
use crate::error::Result;
use crate::report::{bracketed, Report};

/// A result plus the time it took to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

pub fn timed<T>(work: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = work();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

fn simulate_work(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

fn millis(d: Duration) -> u128 {
    d.as_millis()
}

// =============================================================================
// Basic parallel operations
// =============================================================================

pub fn parallel_evens(numbers: &[i32]) -> Timed<Vec<i32>> {
    timed(|| numbers.par_iter().copied().filter(|n| n % 2 == 0).collect())
}

/// Sum of `sqrt(n + i)` for `i` in `0..iterations`.
pub fn sqrt_series(n: i32, iterations: usize) -> f64 {
    (0..iterations).map(|i| (n as f64 + i as f64).sqrt()).sum()
}

pub fn parallel_cpu_map(numbers: &[i32], iterations: usize) -> Timed<Vec<f64>> {
    timed(|| {
        numbers
            .par_iter()
            .map(|&n| sqrt_series(n, iterations))
            .collect()
    })
}

/// Addition is associative, so the split points do not affect the result.
pub fn parallel_sum(numbers: &[i32]) -> Timed<i64> {
    timed(|| {
        numbers
            .par_iter()
            .map(|&n| n as i64)
            .reduce(|| 0, |a, b| a + b)
    })
}

pub fn parallel_sort_distinct(numbers: &[i32]) -> Timed<Vec<i32>> {
    timed(|| {
        let mut sorted = numbers.to_vec();
        sorted.par_sort();
        sorted.dedup();
        sorted
    })
}

// =============================================================================
// Performance comparisons
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub sequential: Duration,
    pub parallel: Duration,
    pub processors: usize,
}

impl Comparison {
    /// `None` when the parallel run was too fast to measure.
    pub fn speedup(&self) -> Option<f64> {
        let parallel = self.parallel.as_secs_f64();
        (parallel > 0.0).then(|| self.sequential.as_secs_f64() / parallel)
    }

    pub fn speedup_label(&self) -> String {
        self.speedup()
            .map_or_else(|| "n/a".to_string(), |s| format!("{s:.2}x"))
    }
}

/// Double every number twice, once sequentially and once in parallel, with
/// `work` of simulated latency per element.
pub fn compare_doubling(numbers: &[i32], work: Duration) -> Comparison {
    let double = |&n: &i32| {
        simulate_work(work);
        n * 2
    };

    let sequential = timed(|| numbers.iter().map(double).collect::<Vec<_>>());
    let parallel = timed(|| numbers.par_iter().map(double).collect::<Vec<_>>());
    debug_assert_eq!(sequential.value, parallel.value);

    Comparison {
        sequential: sequential.elapsed,
        parallel: parallel.elapsed,
        processors: num_cpus::get(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSample {
    pub size: usize,
    pub comparison: Comparison,
}

pub fn size_sweep(sizes: &[usize]) -> Vec<SizeSample> {
    sizes
        .iter()
        .map(|&size| {
            let numbers: Vec<i32> = (0..i32::MAX).take(size).collect();
            let comparison = compare_doubling(&numbers, Duration::ZERO);
            debug!(size, ?comparison, "size sweep sample");
            SizeSample { size, comparison }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuVsIo {
    pub cpu: Duration,
    pub io: Duration,
}

pub fn cpu_vs_io(numbers: &[i32], cpu_iterations: usize, io_delay: Duration) -> CpuVsIo {
    let cpu = timed(|| {
        numbers
            .par_iter()
            .map(|&n| {
                (0..cpu_iterations)
                    .map(|i| (n as f64 + i as f64).sqrt() * (i as f64).sin())
                    .sum::<f64>()
            })
            .collect::<Vec<_>>()
    });
    let io = timed(|| {
        numbers
            .par_iter()
            .map(|n| {
                simulate_work(io_delay);
                format!("Processed: {n}")
            })
            .collect::<Vec<_>>()
    });
    CpuVsIo {
        cpu: cpu.elapsed,
        io: io.elapsed,
    }
}

// =============================================================================
// Pools and shared state
// =============================================================================

/// Runs the doubling map inside a dedicated pool of `threads` workers
/// instead of the global one.
pub fn custom_pool_doubling(
    numbers: &[i32],
    threads: usize,
    work: Duration,
) -> Result<Timed<Vec<i32>>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("streams-worker-{index}"))
        .build()?;

    Ok(pool.install(|| {
        timed(|| {
            numbers
                .par_iter()
                .map(|&n| {
                    simulate_work(work);
                    n * 2
                })
                .collect()
        })
    }))
}

/// Adds a shared, atomically incremented ticket to every element. Which
/// element gets which ticket depends on scheduling; the final count does not.
pub fn atomic_tickets(numbers: &[i32]) -> (Vec<i64>, usize) {
    let counter = AtomicUsize::new(0);
    let result = numbers
        .par_iter()
        .map(|&n| {
            let ticket = counter.fetch_add(1, Ordering::Relaxed) + 1;
            n as i64 + ticket as i64
        })
        .collect();
    (result, counter.into_inner())
}

/// A worker that panicked mid-push poisons the lock but leaves the list
/// intact, so later pushes keep going.
fn push_shared<T>(shared: &Mutex<Vec<T>>, value: T) {
    shared
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(value);
}

/// Every worker pushes into one list behind a `Mutex`. Returns how many
/// elements landed.
pub fn mutex_shared_list(numbers: &[i32]) -> usize {
    let shared = Mutex::new(Vec::with_capacity(numbers.len()));
    numbers.par_iter().for_each(|&n| {
        push_shared(&shared, n.wrapping_mul(2));
    });
    shared
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}

// =============================================================================
// Real-world scenarios
// =============================================================================

/// `NAME - Department` for everyone earning above `threshold`, sorted.
pub fn high_earner_labels(
    employees: &[Employee],
    threshold: f64,
    work: Duration,
) -> Vec<String> {
    let mut labels: Vec<String> = employees
        .par_iter()
        .filter(|e| e.salary > threshold)
        .map(|e| {
            simulate_work(work);
            format!("{} - {}", e.name.to_uppercase(), e.department)
        })
        .collect();
    labels.par_sort();
    labels
}

/// Which worker handled each of the first `limit` elements, in the order
/// the workers got to them.
pub fn worker_trace(numbers: &[i32], limit: usize) -> Vec<(Option<usize>, i32)> {
    let seen = Mutex::new(Vec::with_capacity(limit));
    numbers.par_iter().take(limit).for_each(|&n| {
        let worker = rayon::current_thread_index();
        push_shared(&seen, (worker, n));
    });
    seen.into_inner().unwrap_or_else(PoisonError::into_inner)
}

pub const DO: &[&str] = &[
    "Use for large datasets (> 10,000 elements)",
    "Use for CPU-intensive operations",
    "Keep closures free of shared mutable state",
    "Use associative operations for reduction",
    "Measure with your own data",
];

pub const DONT: &[&str] = &[
    "Use for small datasets",
    "Share unsynchronized mutable state (Rust rejects it at compile time)",
    "Rely on side-effect order",
    "Assume parallel is always faster",
    "Use for pipelines with cross-element dependencies",
];

pub const TIPS: &[&str] = &[
    "Profile the specific workload",
    "Give blocking I/O its own ThreadPool",
    "Prefer indexed sources (Vec, slices, ranges) so splitting is cheap",
    "Watch allocation in map closures",
    "Test with realistic data sizes",
];

// =============================================================================
// Demonstration driver
// =============================================================================

fn head(numbers: &[i32], n: usize) -> &[i32] {
    &numbers[..n.min(numbers.len())]
}

pub fn run(report: &mut Report<'_>, config: &Config) -> Result<()> {
    let settings: &ParallelConfig = &config.parallel;
    let dataset_size = i32::try_from(settings.dataset_size).unwrap_or(i32::MAX);
    let numbers: Vec<i32> = (0..dataset_size).collect();
    let employees = fixtures::parallel_staff();
    info!(size = numbers.len(), threads = settings.threads, "parallel demonstration");

    report.banner("COMPREHENSIVE PARALLEL ITERATION DEMONSTRATION")?;

    report.line("\n1. BASIC PARALLEL OPERATIONS:")?;
    basic_operations(report, &numbers, settings)?;

    report.line("\n2. PERFORMANCE COMPARISONS:")?;
    performance(report, &numbers, settings)?;

    report.line("\n3. ADVANCED SCENARIOS:")?;
    advanced(report, &numbers, settings)?;

    report.line("\n4. REAL-WORLD EXAMPLES:")?;
    real_world(report, &numbers, &employees, settings)?;

    report.line("\n5. BEST PRACTICES:")?;
    best_practices(report)
}

fn basic_operations(
    report: &mut Report<'_>,
    numbers: &[i32],
    settings: &ParallelConfig,
) -> Result<()> {
    let sample = head(numbers, 10_000);
    report.section("PARALLEL FILTERING")?;
    report.line(format_args!("Input size: {}", sample.len()))?;
    let evens = parallel_evens(sample);
    debug!(elapsed = ?evens.elapsed, "parallel filter");
    report.line(format_args!("Parallel filtering time: {}ms", millis(evens.elapsed)))?;
    report.line(format_args!("Result size: {}", evens.value.len()))?;
    report.line("Why parallel: Independent filtering operations on large dataset")?;

    let sample = head(numbers, 1_000);
    report.section("PARALLEL MAPPING (CPU-INTENSIVE)")?;
    report.line(format_args!("Input size: {}", sample.len()))?;
    let mapped = parallel_cpu_map(sample, settings.cpu_iterations);
    debug!(elapsed = ?mapped.elapsed, "parallel map");
    report.line(format_args!("Parallel mapping time: {}ms", millis(mapped.elapsed)))?;
    report.line(format_args!("Result size: {}", mapped.value.len()))?;
    report.line("Why parallel: CPU-intensive operations benefit from multiple cores")?;

    let sample = head(numbers, 10_000);
    report.section("PARALLEL REDUCTION")?;
    report.line(format_args!("Input size: {}", sample.len()))?;
    let sum = parallel_sum(sample);
    debug!(elapsed = ?sum.elapsed, "parallel reduce");
    report.line(format_args!("Parallel reduction time: {}ms", millis(sum.elapsed)))?;
    report.line(format_args!("Sum: {}", sum.value))?;
    report.line("Why parallel: Associative reduction operation on large dataset")?;

    let sample = head(numbers, 10_000);
    report.section("PARALLEL SORTING")?;
    report.line(format_args!("Input size: {}", sample.len()))?;
    let sorted = parallel_sort_distinct(sample);
    debug!(elapsed = ?sorted.elapsed, "parallel sort");
    report.line(format_args!("Parallel sorting time: {}ms", millis(sorted.elapsed)))?;
    report.line(format_args!("Result size: {}", sorted.value.len()))?;
    report.line("Why parallel: Sorting and distinct operations on large dataset")
}

fn performance(
    report: &mut Report<'_>,
    numbers: &[i32],
    settings: &ParallelConfig,
) -> Result<()> {
    let sample = head(numbers, 1_000);
    report.section("SEQUENTIAL vs PARALLEL COMPARISON")?;
    report.line(format_args!("Input size: {}", sample.len()))?;
    let comparison = compare_doubling(sample, settings.work_delay());
    report.line(format_args!("Sequential time: {}ms", millis(comparison.sequential)))?;
    report.line(format_args!("Parallel time: {}ms", millis(comparison.parallel)))?;
    report.line(format_args!("Speedup: {}", comparison.speedup_label()))?;
    report.line(format_args!("Available processors: {}", comparison.processors))?;

    report.section("DATA SIZE IMPACT ON PARALLEL PERFORMANCE")?;
    for sample in size_sweep(&settings.size_sweep) {
        report.line(format_args!(
            "Size: {:>7} | Sequential: {:>3}ms | Parallel: {:>3}ms | Speedup: {}",
            sample.size,
            millis(sample.comparison.sequential),
            millis(sample.comparison.parallel),
            sample.comparison.speedup_label()
        ))?;
    }

    let sample = head(numbers, 100);
    report.section("CPU-INTENSIVE vs I/O-INTENSIVE PARALLEL OPERATIONS")?;
    report.line(format_args!("Input size: {}", sample.len()))?;
    let timings = cpu_vs_io(sample, settings.cpu_iterations / 10, settings.io_delay());
    report.line(format_args!("CPU-intensive time: {}ms", millis(timings.cpu)))?;
    report.line(format_args!("I/O-intensive time: {}ms", millis(timings.io)))
}

fn advanced(
    report: &mut Report<'_>,
    numbers: &[i32],
    settings: &ParallelConfig,
) -> Result<()> {
    let sample = head(numbers, 1_000);
    report.section("CUSTOM THREAD POOL CONFIGURATION")?;
    report.line(format_args!("Input size: {}", sample.len()))?;
    let pooled = custom_pool_doubling(sample, settings.threads, settings.io_delay())?;
    report.line(format_args!("Custom thread pool time: {}ms", millis(pooled.elapsed)))?;
    report.line(format_args!("Thread pool size: {}", settings.threads))?;
    report.line("Why custom pool: Control resource usage and thread count")?;

    report.section("THREAD-SAFE PARALLEL OPERATIONS")?;
    report.line(format_args!("Input size: {}", sample.len()))?;
    let counted = timed(|| atomic_tickets(sample));
    report.line(format_args!("Thread-safe parallel time: {}ms", millis(counted.elapsed)))?;
    report.line(format_args!("Final counter value: {}", counted.value.1))?;
    report.line("Why thread-safe: Shared state accessed by multiple threads")?;

    report.section("SHARED STATE BEHIND A MUTEX")?;
    report.line(format_args!("Input size: {}", sample.len()))?;
    let landed = mutex_shared_list(sample);
    report.line(format_args!("Expected size: {}", sample.len()))?;
    report.line(format_args!("Actual size: {landed}"))?;
    report.line("Why a mutex: Every worker appends to the same list")
}

fn real_world(
    report: &mut Report<'_>,
    numbers: &[i32],
    employees: &[Employee],
    settings: &ParallelConfig,
) -> Result<()> {
    report.section("REAL-WORLD PARALLEL PROCESSING")?;
    report.line(format_args!("Input size: {}", employees.len()))?;
    let labels = timed(|| high_earner_labels(employees, 70_000.0, settings.work_delay() * 5));
    report.line(format_args!(
        "Real-world parallel processing time: {}ms",
        millis(labels.elapsed)
    ))?;
    report.line(format_args!("Result size: {}", labels.value.len()))?;
    report.line(format_args!(
        "Sample results: {}",
        bracketed(labels.value.iter().take(3))
    ))?;

    let sample = head(numbers, 20);
    report.section("DEBUGGING PARALLEL ITERATORS")?;
    report.line(format_args!("Input size: {}", sample.len()))?;
    report.line("Parallel processing order (may vary):")?;
    for (worker, n) in worker_trace(sample, 10) {
        let worker = worker.map_or_else(|| "caller".to_string(), |i| format!("worker-{i}"));
        report.line(format_args!("Thread: {worker} | Processing: {n}"))?;
    }
    report.line("\nThread pool information:")?;
    report.line(format_args!("Available processors: {}", num_cpus::get()))?;
    report.line(format_args!(
        "Default parallelism: {}",
        rayon::current_num_threads()
    ))
}

fn best_practices(report: &mut Report<'_>) -> Result<()> {
    report.section("PARALLEL ITERATOR BEST PRACTICES")?;
    for (heading, items) in [("DO:", DO), ("\nDON'T:", DONT), ("\nOPTIMIZATION TIPS:", TIPS)] {
        report.line(heading)?;
        for item in items {
            report.line(format_args!("  - {item}"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render;

    fn quick_config() -> Config {
        let mut config = Config::default();
        config.parallel = ParallelConfig {
            threads: 2,
            dataset_size: 2_000,
            cpu_iterations: 20,
            work_delay_ms: 0,
            io_delay_ms: 0,
            size_sweep: vec![10, 100],
        };
        config
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let numbers: Vec<i32> = (0..10_000).collect();
        let expected: Vec<i32> = numbers.iter().copied().filter(|n| n % 2 == 0).collect();
        assert_eq!(parallel_evens(&numbers).value, expected);
        assert_eq!(parallel_sum(&numbers).value, 49_995_000);
    }

    #[test]
    fn test_cpu_map_preserves_order() {
        let numbers = [0, 3, 8];
        let mapped = parallel_cpu_map(&numbers, 1).value;
        assert_eq!(mapped, vec![0.0, 3f64.sqrt(), 8f64.sqrt()]);
        assert_eq!(sqrt_series(0, 3), 0.0 + 1.0 + 2f64.sqrt());
    }

    #[test]
    fn test_sort_distinct() {
        let numbers = [5, 3, 5, 1, 3, 9];
        assert_eq!(parallel_sort_distinct(&numbers).value, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_speedup() {
        let comparison = Comparison {
            sequential: Duration::from_millis(100),
            parallel: Duration::from_millis(25),
            processors: 4,
        };
        assert_eq!(comparison.speedup(), Some(4.0));
        assert_eq!(comparison.speedup_label(), "4.00x");

        let instant = Comparison {
            parallel: Duration::ZERO,
            ..comparison
        };
        assert_eq!(instant.speedup(), None);
        assert_eq!(instant.speedup_label(), "n/a");
    }

    #[test]
    fn test_size_sweep_covers_every_size() {
        let sizes: Vec<usize> = size_sweep(&[0, 1, 10, 100]).iter().map(|s| s.size).collect();
        assert_eq!(sizes, vec![0, 1, 10, 100]);
    }

    #[test]
    fn test_custom_pool() {
        let numbers: Vec<i32> = (0..100).collect();
        let doubled = custom_pool_doubling(&numbers, 3, Duration::ZERO).unwrap();
        assert_eq!(doubled.value, numbers.iter().map(|n| n * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_atomic_tickets_counts_every_element() {
        let numbers: Vec<i32> = (0..1_000).collect();
        let (result, count) = atomic_tickets(&numbers);
        assert_eq!(count, 1_000);
        assert_eq!(result.len(), 1_000);

        // Tickets are a permutation of 1..=1000.
        let mut tickets: Vec<i64> = result
            .iter()
            .zip(&numbers)
            .map(|(r, &n)| r - n as i64)
            .collect();
        tickets.sort();
        assert_eq!(tickets, (1..=1_000).collect::<Vec<i64>>());
    }

    #[test]
    fn test_mutex_shared_list_keeps_everything() {
        let numbers: Vec<i32> = (0..1_000).collect();
        assert_eq!(mutex_shared_list(&numbers), 1_000);
        assert_eq!(mutex_shared_list(&[i32::MAX]), 1);
    }

    #[test]
    fn test_push_shared_survives_poisoned_lock() {
        let shared = Mutex::new(vec![1, 2]);
        let _ = std::panic::catch_unwind(|| {
            let _guard = shared.lock().unwrap();
            panic!("worker failed");
        });
        assert!(shared.is_poisoned());

        push_shared(&shared, 3);
        let list = shared.into_inner().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn test_high_earner_labels() {
        let labels = high_earner_labels(&fixtures::parallel_staff(), 70_000.0, Duration::ZERO);
        assert_eq!(
            labels,
            vec![
                "BOB - Engineering",
                "CHARLIE - Engineering",
                "DIANA - Finance",
                "FRANK - Engineering",
                "HENRY - Finance",
            ]
        );
    }

    #[test]
    fn test_worker_trace_takes_a_prefix() {
        let numbers: Vec<i32> = (0..20).collect();
        let mut seen: Vec<i32> = worker_trace(&numbers, 10).into_iter().map(|(_, n)| n).collect();
        seen.sort();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_run_with_small_config() {
        let text = render(|report| run(report, &quick_config()));
        assert!(text.contains("COMPREHENSIVE PARALLEL ITERATION DEMONSTRATION"));
        assert!(text.contains("Sum: 1999000"));
        assert!(text.contains("Final counter value: 1000"));
        assert!(text.contains("Expected size: 1000\nActual size: 1000"));
        assert_eq!(text.matches("Why parallel:").count(), 4);
        assert!(text.contains("Thread pool size: 2"));
        assert!(text.contains("Size:      10 |"));
        assert!(text.contains(
            "Sample results: [BOB - Engineering, CHARLIE - Engineering, DIANA - Finance]"
        ));
        assert_eq!(text.matches("| Processing:").count(), 10);
    }
}
