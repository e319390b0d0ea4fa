//! `collect`: gather a pipeline into a container.
//!
//! Run with: cargo run --bin p2_collect
//!
//! `FromIterator` decides the container: the same pipeline can land in a
//! `Vec`, a `BTreeSet`, a `String` or a map. Ordered containers are used
//! throughout so the printed output is stable from run to run.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use itertools::Itertools;

use crate::config::Config;
use crate::employee::{fixtures, Employee};
use crate::error::Result;
use crate::report::{bracketed, Report};

/// Both sides of a predicate split.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitioned<T> {
    pub matching: Vec<T>,
    pub rest: Vec<T>,
}

impl<T> Partitioned<T> {
    pub fn split<I, P>(items: I, predicate: P) -> Self
    where
        I: IntoIterator<Item = T>,
        P: FnMut(&T) -> bool,
    {
        let (matching, rest) = items.into_iter().partition(predicate);
        Self { matching, rest }
    }
}

/// `{false=[..], true=[..]}`
impl<T: fmt::Display> fmt::Display for Partitioned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{false={}, true={}}}",
            bracketed(&self.rest),
            bracketed(&self.matching)
        )
    }
}

/// `{k1=v1, k2=v2}`
pub fn braced<K, V>(map: &BTreeMap<K, V>) -> String
where
    K: fmt::Display,
    V: fmt::Display,
{
    format!(
        "{{{}}}",
        map.iter().map(|(k, v)| format!("{k}={v}")).join(", ")
    )
}

pub fn to_set(numbers: &[i32]) -> BTreeSet<i32> {
    numbers.iter().copied().collect()
}

pub fn joined(words: &[&str], separator: &str) -> String {
    words.iter().join(separator)
}

pub fn even_odd(numbers: &[i32]) -> Partitioned<i32> {
    Partitioned::split(numbers.iter().copied(), |n| n % 2 == 0)
}

pub fn by_length<'a>(words: &[&'a str]) -> BTreeMap<usize, Vec<&'a str>> {
    words.iter().fold(BTreeMap::new(), |mut groups, &w| {
        groups.entry(w.chars().count()).or_insert_with(Vec::new).push(w);
        groups
    })
}

pub fn by_department(employees: &[Employee]) -> BTreeMap<&str, Vec<&Employee>> {
    employees.iter().fold(BTreeMap::new(), |mut groups, e| {
        groups
            .entry(e.department.as_str())
            .or_insert_with(Vec::new)
            .push(e);
        groups
    })
}

pub fn by_salary_above(employees: &[Employee], threshold: f64) -> Partitioned<&Employee> {
    Partitioned::split(employees, |e| e.salary > threshold)
}

fn render_groups<K: Ord + fmt::Display, T: fmt::Display>(groups: &BTreeMap<K, Vec<T>>) -> String {
    let rendered: BTreeMap<&K, String> = groups.iter().map(|(k, v)| (k, bracketed(v))).collect();
    braced(&rendered)
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [1, 2, 3, 4, 5, 6, 7, 8];
    let words = ["apple", "banana", "cherry", "date"];
    let employees = fixtures::core_staff();
    let staff = bracketed(&employees);

    report.section("To Set")?;
    report.input(bracketed(numbers))?;
    report.output("Set", bracketed(to_set(&numbers)))?;

    report.section("Joining")?;
    report.input(bracketed(words))?;
    report.output("concatenated", joined(&words, ", "))?;

    report.section("Partition Even/Odd")?;
    report.input(bracketed(numbers))?;
    report.output("partitioned even/odd", even_odd(&numbers))?;

    report.section("Group by Length")?;
    report.input(bracketed(words))?;
    report.output("grouped by length", render_groups(&by_length(&words)))?;

    report.section("Group by Department")?;
    report.input(&staff)?;
    report.output(
        "grouped by department",
        render_groups(&by_department(&employees)),
    )?;

    report.section("Partition by Salary")?;
    report.input(&staff)?;
    report.output(
        "partitioned by salary > 75000",
        by_salary_above(&employees, 75_000.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render;

    #[test]
    fn test_to_set_deduplicates_and_orders() {
        let set = to_set(&[3, 1, 3, 2]);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_joined() {
        assert_eq!(joined(&["apple", "banana"], ", "), "apple, banana");
        assert_eq!(joined(&[], ", "), "");
    }

    #[test]
    fn test_even_odd() {
        let split = even_odd(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(split.matching, vec![2, 4, 6, 8]);
        assert_eq!(split.rest, vec![1, 3, 5, 7]);
        assert_eq!(split.to_string(), "{false=[1, 3, 5, 7], true=[2, 4, 6, 8]}");
    }

    #[test]
    fn test_by_length() {
        let groups = by_length(&["apple", "banana", "cherry", "date"]);
        assert_eq!(groups[&4], vec!["date"]);
        assert_eq!(groups[&5], vec!["apple"]);
        assert_eq!(groups[&6], vec!["banana", "cherry"]);
        assert_eq!(
            render_groups(&groups),
            "{4=[date], 5=[apple], 6=[banana, cherry]}"
        );
    }

    #[test]
    fn test_by_department() {
        let staff = fixtures::core_staff();
        let groups = by_department(&staff);
        let keys: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["Engineering", "Finance", "HR"]);
        assert_eq!(groups["Engineering"].len(), 2);
    }

    #[test]
    fn test_by_salary_above() {
        let staff = fixtures::core_staff();
        let split = by_salary_above(&staff, 75_000.0);
        let high: Vec<&str> = split.matching.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(high, vec!["Bob", "Diana"]);
        assert_eq!(split.rest.len(), 2);
    }

    #[test]
    fn test_run_output() {
        let text = render(|report| run(report, &Config::default()));
        assert!(text.contains("Output (Set): [1, 2, 3, 4, 5, 6, 7, 8]"));
        assert!(text.contains("Output (concatenated): apple, banana, cherry, date"));
        assert!(text.contains("Output (grouped by department): {Engineering=[Bob"));
    }
}
