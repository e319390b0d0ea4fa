//! `distinct`: drop repeated elements, keeping the first occurrence.
//!
//! Run with: cargo run --bin p1_distinct

use std::collections::HashSet;
use std::hash::Hash;

use itertools::Itertools;

use crate::config::Config;
use crate::employee::{fixtures, Badge};
use crate::error::Result;
use crate::report::{bracketed, Report};

/// Keep the first element for each key, preserving input order.
///
/// `HashSet::insert` returns `false` for keys already seen, which makes the
/// set double as the filter predicate.
pub fn distinct_by<'a, T, K, F>(items: &'a [T], mut key_fn: F) -> Vec<&'a T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items.iter().filter(|item| seen.insert(key_fn(item))).collect()
}

pub fn distinct_numbers(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().copied().unique().collect()
}

/// The first spelling of each word wins.
pub fn distinct_ignore_case<'a>(words: &[&'a str]) -> Vec<&'a str> {
    distinct_by(words, |w| w.to_lowercase())
        .into_iter()
        .copied()
        .collect()
}

pub fn by_id(badges: &[Badge]) -> Vec<&Badge> {
    distinct_by(badges, |b| b.id)
}

pub fn by_name(badges: &[Badge]) -> Vec<&Badge> {
    distinct_by(badges, |b| b.name.clone())
}

pub fn by_name_and_id(badges: &[Badge]) -> Vec<&Badge> {
    distinct_by(badges, |b| (b.name.clone(), b.id))
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [1, 2, 2, 3, 4, 4, 5];
    let words = ["Apple", "Banana", "apple", "banana", "Cherry"];
    let badges = fixtures::badges();
    let roster = bracketed(&badges);

    report.section("Distinct Numbers")?;
    report.input(bracketed(numbers))?;
    report.output("distinct", bracketed(distinct_numbers(&numbers)))?;

    report.section("Ignore Case")?;
    report.input(bracketed(words))?;
    report.output(
        "distinct, ignore case",
        bracketed(distinct_ignore_case(&words)),
    )?;

    report.section("By ID")?;
    report.input(&roster)?;
    report.output("distinct by ID", bracketed(by_id(&badges)))?;

    report.section("By Name")?;
    report.input(&roster)?;
    report.output("distinct by name", bracketed(by_name(&badges)))?;

    report.section("By Name and ID")?;
    report.input(&roster)?;
    report.output(
        "distinct by name and id",
        bracketed(by_name_and_id(&badges)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render;

    fn labels(badges: &[&Badge]) -> Vec<String> {
        badges.iter().map(|b| b.to_string()).collect()
    }

    #[test]
    fn test_distinct_numbers_keeps_first_occurrence_order() {
        assert_eq!(distinct_numbers(&[1, 2, 2, 3, 4, 4, 5]), vec![1, 2, 3, 4, 5]);
        assert_eq!(distinct_numbers(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_ignore_case_keeps_first_spelling() {
        let words = ["Apple", "Banana", "apple", "banana", "Cherry"];
        assert_eq!(distinct_ignore_case(&words), vec!["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_badges_by_id() {
        let badges = fixtures::badges();
        assert_eq!(
            labels(&by_id(&badges)),
            vec!["Alice (ID: 1)", "Bob (ID: 2)", "Diana (ID: 3)", "Alice (ID: 4)"]
        );
    }

    #[test]
    fn test_badges_by_name() {
        let badges = fixtures::badges();
        assert_eq!(
            labels(&by_name(&badges)),
            vec!["Alice (ID: 1)", "Bob (ID: 2)", "Charlie (ID: 1)", "Diana (ID: 3)"]
        );
    }

    #[test]
    fn test_badges_by_name_and_id() {
        let badges = fixtures::badges();
        let unique = by_name_and_id(&badges);
        assert_eq!(unique.len(), 5);
        assert_eq!(unique[4].to_string(), "Alice (ID: 4)");
    }

    #[test]
    fn test_distinct_by_empty() {
        let empty: [Badge; 0] = [];
        assert!(by_id(&empty).is_empty());
    }

    #[test]
    fn test_run_output() {
        let text = render(|report| run(report, &Config::default()));
        assert!(text.contains("Output (distinct): [1, 2, 3, 4, 5]"));
        assert!(text.contains("Output (distinct, ignore case): [Apple, Banana, Cherry]"));
    }
}
