//! `inspect`: observe elements as they flow through a pipeline without
//! changing them.
//!
//! Run with: cargo run --bin p1_peek
//!
//! Iterators are lazy, so observers fire one element at a time as `collect`
//! pulls values through: every stage sees element 1 before any stage sees
//! element 2.

use std::cell::RefCell;

use tracing::trace;

use crate::config::Config;
use crate::error::Result;
use crate::report::{bracketed, Report};

/// A value observed at a named point of the upper-casing pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Original(String),
    Uppercased(String),
}

/// Doubles every number, handing each input to `observer` first.
pub fn double_logged<F>(numbers: &[i32], mut observer: F) -> Vec<i32>
where
    F: FnMut(i32),
{
    numbers
        .iter()
        .copied()
        .inspect(|&n| observer(n))
        .map(|n| n * 2)
        .collect()
}

/// Uppercases every word, reporting the value before and after the map.
pub fn uppercase_traced<F>(words: &[&str], observer: F) -> Vec<String>
where
    F: FnMut(Stage),
{
    // Two inspect stages share one observer.
    let observer = RefCell::new(observer);
    let emit = |stage: Stage| {
        trace!(?stage, "peek");
        (*observer.borrow_mut())(stage)
    };
    words
        .iter()
        .map(|w| w.to_string())
        .inspect(|w| emit(Stage::Original(w.clone())))
        .map(|w| w.to_uppercase())
        .inspect(|w| emit(Stage::Uppercased(w.clone())))
        .collect()
}

/// Increments every number and returns the audit trail of raw inputs.
pub fn increment_audited(numbers: &[i32]) -> (Vec<i32>, Vec<i32>) {
    let mut audit = Vec::with_capacity(numbers.len());
    let result = numbers
        .iter()
        .copied()
        .inspect(|&n| audit.push(n))
        .map(|n| n + 1)
        .collect();
    (result, audit)
}

/// Evens plus a count taken by an observer placed after the filter.
pub fn evens_counted(numbers: &[i32]) -> (Vec<i32>, usize) {
    let mut passed = 0;
    let evens = numbers
        .iter()
        .copied()
        .filter(|n| n % 2 == 0)
        .inspect(|_| passed += 1)
        .collect();
    (evens, passed)
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [1, 2, 3, 4, 5];
    let words = ["apple", "banana", "cherry"];

    report.section("Log Elements")?;
    report.input(bracketed(numbers))?;
    let mut peeked = Vec::new();
    let doubled = double_logged(&numbers, |n| peeked.push(format!("Peek: {n}")));
    for line in &peeked {
        report.line(line)?;
    }
    report.output("doubled", bracketed(doubled))?;

    report.section("Debug Pipeline")?;
    report.input(bracketed(words))?;
    let mut stages = Vec::new();
    let upper = uppercase_traced(&words, |stage| stages.push(stage));
    for stage in &stages {
        match stage {
            Stage::Original(w) => report.line(format_args!("Original: {w}"))?,
            Stage::Uppercased(w) => report.line(format_args!("Uppercased: {w}"))?,
        }
    }
    report.line(format_args!("Output: {}", bracketed(upper)))?;

    report.section("Audit Trail")?;
    report.input(bracketed(numbers))?;
    let (incremented, audit) = increment_audited(&numbers);
    report.output("incremented", bracketed(incremented))?;
    report.line(format_args!("Audit trail: {}", bracketed(audit)))?;

    report.section("Count Passing Elements")?;
    report.input(bracketed(numbers))?;
    let (evens, passed) = evens_counted(&numbers);
    report.output("evens", bracketed(evens))?;
    report.line(format_args!("Count of evens: {passed}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render;

    #[test]
    fn test_double_logged_sees_every_input_in_order() {
        let mut seen = Vec::new();
        let doubled = double_logged(&[1, 2, 3], |n| seen.push(n));
        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_uppercase_traced_interleaves_per_element() {
        let mut stages = Vec::new();
        let upper = uppercase_traced(&["ab", "cd"], |s| stages.push(s));
        assert_eq!(upper, vec!["AB", "CD"]);
        assert_eq!(
            stages,
            vec![
                Stage::Original("ab".into()),
                Stage::Uppercased("AB".into()),
                Stage::Original("cd".into()),
                Stage::Uppercased("CD".into()),
            ]
        );
    }

    #[test]
    fn test_increment_audited() {
        let (result, audit) = increment_audited(&[1, 2, 3, 4, 5]);
        assert_eq!(result, vec![2, 3, 4, 5, 6]);
        assert_eq!(audit, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_evens_counted_only_counts_survivors() {
        assert_eq!(evens_counted(&[1, 2, 3, 4, 5]), (vec![2, 4], 2));
        assert_eq!(evens_counted(&[1, 3]), (vec![], 0));
    }

    #[test]
    fn test_run_output() {
        let text = render(|report| run(report, &Config::default()));
        assert!(text.contains(
            "Peek: 1\nPeek: 2\nPeek: 3\nPeek: 4\nPeek: 5\nOutput (doubled): [2, 4, 6, 8, 10]"
        ));
        assert!(text.contains("Original: apple\nUppercased: APPLE\nOriginal: banana"));
        assert!(text.contains("Audit trail: [1, 2, 3, 4, 5]"));
        assert!(text.contains("Count of evens: 2"));
    }
}
