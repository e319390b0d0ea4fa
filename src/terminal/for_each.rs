//! `for_each`: run a side effect for every element.
//!
//! Run with: cargo run --bin p2_for_each
//!
//! Writing can fail, so the printing helpers use `try_for_each`, which stops
//! at the first error and hands it back to the caller.

use std::fmt::Display;

use crate::config::Config;
use crate::employee::{fixtures, Employee};
use crate::error::Result;
use crate::report::{bracketed, Report};

pub fn print_elements<T: Display>(report: &mut Report<'_>, items: &[T]) -> Result<()> {
    items
        .iter()
        .try_for_each(|item| report.line(format_args!("Element: {item}")))
}

pub fn print_name_salary(report: &mut Report<'_>, employees: &[Employee]) -> Result<()> {
    employees
        .iter()
        .try_for_each(|e| report.line(format_args!("{}: ${:.1}", e.name, e.salary)))
}

pub fn print_reversed(report: &mut Report<'_>, words: &[&str]) -> Result<()> {
    words
        .iter()
        .rev()
        .try_for_each(|w| report.line(format_args!("Reverse: {w}")))
}

pub fn print_department(
    report: &mut Report<'_>,
    employees: &[Employee],
    department: &str,
) -> Result<()> {
    employees
        .iter()
        .filter(|e| e.department == department)
        .try_for_each(|e| report.line(e))
}

pub fn print_salary_above(
    report: &mut Report<'_>,
    employees: &[Employee],
    threshold: f64,
) -> Result<()> {
    employees
        .iter()
        .filter(|e| e.salary > threshold)
        .try_for_each(|e| report.line(e))
}

/// Updates every employee in place: salary grows by `percent`.
pub fn give_raise(employees: &mut [Employee], percent: f64) {
    employees
        .iter_mut()
        .for_each(|e| e.salary *= 1.0 + percent / 100.0);
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [1, 2, 3, 4, 5];
    let words = ["apple", "banana", "cherry", "date"];
    let mut employees = fixtures::core_staff();

    report.section("Print Elements")?;
    report.input(bracketed(numbers))?;
    print_elements(report, &numbers)?;

    report.section("Name and Salary")?;
    report.input(bracketed(&employees))?;
    print_name_salary(report, &employees)?;

    report.section("Reverse Order")?;
    report.input(bracketed(words))?;
    print_reversed(report, &words)?;

    report.section("Department Members")?;
    report.input(bracketed(&employees))?;
    print_department(report, &employees, "Engineering")?;

    report.section("Salary Above Threshold")?;
    report.input(bracketed(&employees))?;
    print_salary_above(report, &employees, 75_000.0)?;

    report.section("Update in Place")?;
    report.input(bracketed(&employees))?;
    give_raise(&mut employees, 10.0);
    report.output("10% raise", bracketed(&employees))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render;

    #[test]
    fn test_print_elements() {
        let text = render(|report| print_elements(report, &[1, 2]));
        assert_eq!(text, "Element: 1\nElement: 2\n");
    }

    #[test]
    fn test_print_reversed() {
        let text = render(|report| print_reversed(report, &["a", "b", "c"]));
        assert_eq!(text, "Reverse: c\nReverse: b\nReverse: a\n");
    }

    #[test]
    fn test_print_filters() {
        let staff = fixtures::core_staff();
        let text = render(|report| print_department(report, &staff, "Engineering"));
        assert_eq!(
            text,
            "Bob (25, Engineering, $80000.0)\nCharlie (28, Engineering, $75000.0)\n"
        );

        let text = render(|report| print_salary_above(report, &staff, 75_000.0));
        assert_eq!(text.lines().count(), 2);
        assert!(!text.contains("Charlie"));
    }

    #[test]
    fn test_print_name_salary() {
        let staff = fixtures::core_staff();
        let text = render(|report| print_name_salary(report, &staff));
        assert!(text.starts_with("Alice: $60000.0\nBob: $80000.0\n"));
    }

    #[test]
    fn test_give_raise() {
        let mut staff = fixtures::core_staff();
        give_raise(&mut staff, 10.0);
        assert!((staff[0].salary - 66_000.0).abs() < 1e-6);
        assert!((staff[3].salary - 99_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_write_failure_stops_iteration() {
        struct Broken;
        impl std::io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = Broken;
        let mut report = Report::new(&mut sink, false);
        let err = print_elements(&mut report, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, crate::error::PipelineError::Output(_)));
    }
}
