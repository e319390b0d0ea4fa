//! `count`: how many elements reach the end of a pipeline.
//!
//! Run with: cargo run --bin p2_count

use itertools::Itertools;

use crate::config::Config;
use crate::employee::{fixtures, Employee};
use crate::error::Result;
use crate::report::{bracketed, Report};

pub fn count_all<T>(items: &[T]) -> usize {
    items.iter().count()
}

pub fn longer_than(words: &[&str], min_len: usize) -> usize {
    words.iter().filter(|w| w.chars().count() > min_len).count()
}

pub fn in_department(employees: &[Employee], department: &str) -> usize {
    employees
        .iter()
        .filter(|e| e.department == department)
        .count()
}

pub fn salary_above(employees: &[Employee], threshold: f64) -> usize {
    employees.iter().filter(|e| e.salary > threshold).count()
}

pub fn unique_departments(employees: &[Employee]) -> usize {
    employees.iter().map(|e| &e.department).unique().count()
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [1, 2, 3, 4, 5, 6, 7];
    let words = ["apple", "banana", "cherry", "date", "elderberry"];
    let employees = fixtures::extended_staff();
    let staff = bracketed(&employees);

    report.section("Count Elements")?;
    report.input(bracketed(numbers))?;
    report.output("count", count_all(&numbers))?;

    report.section("Long Strings")?;
    report.input(bracketed(words))?;
    report.output("strings > 5 chars", longer_than(&words, 5))?;

    report.section("Engineering Headcount")?;
    report.input(&staff)?;
    report.output(
        "Engineering employees",
        in_department(&employees, "Engineering"),
    )?;

    report.section("High Salary Headcount")?;
    report.input(&staff)?;
    report.output("salary > 75000", salary_above(&employees, 75_000.0))?;

    report.section("Unique Departments")?;
    report.input(&staff)?;
    report.output("unique departments", unique_departments(&employees))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render;

    #[test]
    fn test_counts() {
        assert_eq!(count_all(&[1, 2, 3, 4, 5, 6, 7]), 7);
        assert_eq!(count_all::<i32>(&[]), 0);
        assert_eq!(
            longer_than(&["apple", "banana", "cherry", "date", "elderberry"], 5),
            3
        );
    }

    #[test]
    fn test_employee_counts() {
        let staff = fixtures::extended_staff();
        assert_eq!(in_department(&staff, "Engineering"), 2);
        assert_eq!(in_department(&staff, "Legal"), 0);
        assert_eq!(salary_above(&staff, 75_000.0), 3);
        assert_eq!(unique_departments(&staff), 3);
    }

    #[test]
    fn test_run_output() {
        let text = render(|report| run(report, &Config::default()));
        assert!(text.contains("Output (count): 7"));
        assert!(text.contains("Output (strings > 5 chars): 3"));
        assert!(text.contains("Output (salary > 75000): 3"));
    }
}
