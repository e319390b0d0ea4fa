//! `min` / `max` with natural order and with key functions.
//!
//! Run with: cargo run --bin p2_min_max
//!
//! `Iterator::max_by*` keeps the last of several equal maxima. The helpers
//! here walk the input in reverse for the max case so that ties always go to
//! the earliest element.

use crate::config::Config;
use crate::employee::{fixtures, Employee};
use crate::error::Result;
use crate::report::{bracketed, or_else, Report};

pub fn smallest(numbers: &[i32]) -> Option<i32> {
    numbers.iter().copied().min()
}

pub fn largest(numbers: &[i32]) -> Option<i32> {
    numbers.iter().copied().max()
}

pub fn highest_salary(employees: &[Employee]) -> Option<&Employee> {
    employees
        .iter()
        .rev()
        .max_by(|a, b| a.salary.total_cmp(&b.salary))
}

pub fn lowest_age(employees: &[Employee]) -> Option<&Employee> {
    employees.iter().min_by_key(|e| e.age)
}

pub fn longest<'a>(words: &[&'a str]) -> Option<&'a str> {
    words
        .iter()
        .rev()
        .copied()
        .max_by_key(|w| w.chars().count())
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [5, 2, 8, 1, 3];
    let words = ["banana", "apple", "cherry", "date"];
    let employees = fixtures::core_staff();
    let staff = bracketed(&employees);

    report.section("Minimum")?;
    report.input(bracketed(numbers))?;
    report.output("min", or_else(smallest(&numbers), "N/A"))?;

    report.section("Maximum")?;
    report.input(bracketed(numbers))?;
    report.output("max", or_else(largest(&numbers), "N/A"))?;

    report.section("Highest Salary")?;
    report.input(&staff)?;
    report.output("highest salary", or_else(highest_salary(&employees), "N/A"))?;

    report.section("Lowest Age")?;
    report.input(&staff)?;
    report.output("lowest age", or_else(lowest_age(&employees), "N/A"))?;

    report.section("Longest String")?;
    report.input(bracketed(words))?;
    report.output("max length", or_else(longest(&words), "N/A"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render;

    #[test]
    fn test_numbers() {
        assert_eq!(smallest(&[5, 2, 8, 1, 3]), Some(1));
        assert_eq!(largest(&[5, 2, 8, 1, 3]), Some(8));
        assert_eq!(smallest(&[]), None);
        assert_eq!(largest(&[]), None);
    }

    #[test]
    fn test_employee_extremes() {
        let staff = fixtures::core_staff();
        assert_eq!(highest_salary(&staff).map(|e| e.name.as_str()), Some("Diana"));
        assert_eq!(lowest_age(&staff).map(|e| e.name.as_str()), Some("Bob"));
        assert!(highest_salary(&[]).is_none());
    }

    #[test]
    fn test_ties_go_to_earliest() {
        assert_eq!(longest(&["banana", "apple", "cherry", "date"]), Some("banana"));

        let tied = vec![
            Employee::new("First", 40, "HR", 50_000.0),
            Employee::new("Second", 40, "HR", 50_000.0),
        ];
        assert_eq!(highest_salary(&tied).map(|e| e.name.as_str()), Some("First"));
        assert_eq!(lowest_age(&tied).map(|e| e.name.as_str()), Some("First"));
    }

    #[test]
    fn test_run_output() {
        let text = render(|report| run(report, &Config::default()));
        assert!(text.contains("Output (min): 1"));
        assert!(text.contains("Output (max): 8"));
        assert!(text.contains("Output (lowest age): Bob (25, Engineering, $80000.0)"));
        assert!(text.contains("Output (max length): banana"));
    }
}
