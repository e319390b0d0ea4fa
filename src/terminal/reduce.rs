//! `reduce` and `fold`: combine a whole pipeline into one value.
//!
//! Run with: cargo run --bin p2_reduce

use crate::config::Config;
use crate::employee::{fixtures, Employee};
use crate::error::{PipelineError, Result};
use crate::report::{bracketed, or_else, Report};

/// Sum in 32-bit arithmetic, wrapping on overflow.
pub fn sum(numbers: &[i32]) -> i32 {
    numbers.iter().fold(0, |acc: i32, &n| acc.wrapping_add(n))
}

pub fn max(numbers: &[i32]) -> Option<i32> {
    numbers.iter().copied().reduce(i32::max)
}

pub fn concatenated(words: &[&str]) -> String {
    words.iter().fold(String::new(), |mut acc, w| {
        acc.push_str(w);
        acc
    })
}

/// Product in 32-bit arithmetic, wrapping on overflow.
pub fn product(numbers: &[i32]) -> i32 {
    numbers.iter().fold(1, |acc: i32, &n| acc.wrapping_mul(n))
}

/// Product that refuses to wrap.
pub fn checked_product(numbers: &[i32]) -> Result<i64> {
    numbers.iter().try_fold(1i64, |acc, &n| {
        acc.checked_mul(i64::from(n))
            .ok_or(PipelineError::Overflow { operation: "product" })
    })
}

/// Pairwise "keep the bigger one". Equal salaries keep the later employee.
pub fn highest_salary(employees: &[Employee]) -> Option<&Employee> {
    employees
        .iter()
        .reduce(|a, b| if a.salary > b.salary { a } else { b })
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [1, 2, 3, 4, 5];
    let words = ["apple", "banana", "cherry"];
    let employees = fixtures::core_staff();

    report.section("Sum")?;
    report.input(bracketed(numbers))?;
    report.output("sum", sum(&numbers))?;

    report.section("Maximum")?;
    report.input(bracketed(numbers))?;
    report.output("max", or_else(max(&numbers), "N/A"))?;

    report.section("Concatenate")?;
    report.input(bracketed(words))?;
    report.output("concatenated", concatenated(&words))?;

    report.section("Product")?;
    report.input(bracketed(numbers))?;
    report.output("product", product(&numbers))?;

    report.section("Checked Product")?;
    let large = [100_000, 100_000, 100_000, 100_000];
    report.input(bracketed(large))?;
    match checked_product(&large) {
        Ok(value) => report.output("checked product", value)?,
        Err(err) => report.output("checked product", format_args!("error: {err}"))?,
    }

    report.section("Highest Salary")?;
    report.input(bracketed(&employees))?;
    report.output(
        "highest salary",
        or_else(highest_salary(&employees), "N/A"),
    )
}
