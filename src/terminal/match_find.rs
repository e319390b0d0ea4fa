//! Short-circuiting terminals: `any`, `all`, `find` and rayon's `find_any`.
//!
//! Run with: cargo run --bin p2_match_find
//!
//! Each of these stops pulling elements as soon as the answer is known.

use rayon::prelude::*;

use crate::config::Config;
use crate::employee::{fixtures, Employee};
use crate::error::Result;
use crate::report::{bracketed, or_else, Report};

pub fn any_even(numbers: &[i32]) -> bool {
    numbers.iter().any(|n| n % 2 == 0)
}

pub fn all_non_empty(words: &[&str]) -> bool {
    words.iter().all(|w| !w.is_empty())
}

pub fn none_under(employees: &[Employee], age: u32) -> bool {
    !employees.iter().any(|e| e.age < age)
}

pub fn first_starting_with<'a>(words: &[&'a str], prefix: &str) -> Option<&'a str> {
    words.iter().copied().find(|w| w.starts_with(prefix))
}

/// Any match, searched in parallel. Which element comes back is not fixed
/// when several qualify.
pub fn any_in_department<'a>(employees: &'a [Employee], department: &str) -> Option<&'a Employee> {
    employees
        .par_iter()
        .find_any(|e| e.department == department)
}

/// True when every member of `department` earns more than `threshold`,
/// including when the department has no members.
pub fn all_in_department_above(employees: &[Employee], department: &str, threshold: f64) -> bool {
    employees
        .iter()
        .filter(|e| e.department == department)
        .all(|e| e.salary > threshold)
}

pub fn first_salary_above(employees: &[Employee], threshold: f64) -> Option<&Employee> {
    employees.iter().find(|e| e.salary > threshold)
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [1, 3, 5, 7, 8];
    let words = ["Apple", "Banana", "", "Avocado"];
    let employees = fixtures::core_staff();
    let staff = bracketed(&employees);

    report.section("Any Match")?;
    report.input(bracketed(numbers))?;
    report.line(format_args!("Any even? {}", any_even(&numbers)))?;

    report.section("All Match")?;
    report.input(bracketed(words))?;
    report.line(format_args!("All non-empty? {}", all_non_empty(&words)))?;

    report.section("None Match")?;
    report.input(&staff)?;
    report.line(format_args!(
        "No employee under 18? {}",
        none_under(&employees, 18)
    ))?;

    report.section("Find First")?;
    report.input(bracketed(words))?;
    report.line(format_args!(
        "First starting with 'A': {}",
        or_else(first_starting_with(&words, "A"), "None")
    ))?;

    report.section("Find Any")?;
    report.input(&staff)?;
    report.line(format_args!(
        "Any in Engineering: {}",
        or_else(any_in_department(&employees, "Engineering"), "None")
    ))?;

    report.section("All in Department Above Salary")?;
    report.input(&staff)?;
    report.line(format_args!(
        "All in Engineering have salary > 70000? {}",
        all_in_department_above(&employees, "Engineering", 70_000.0)
    ))?;

    report.section("First Above Salary")?;
    report.input(&staff)?;
    report.line(format_args!(
        "First with salary > 80000: {}",
        or_else(first_salary_above(&employees, 80_000.0), "None")
    ))
}
