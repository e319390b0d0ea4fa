//! Collecting into owned slices and fixed-size arrays.
//!
//! Run with: cargo run --bin p2_to_array

use crate::config::Config;
use crate::employee::{fixtures, Employee};
use crate::error::{PipelineError, Result};
use crate::report::{bracketed, Report};

pub fn to_boxed<T: Clone>(items: &[T]) -> Box<[T]> {
    items.iter().cloned().collect()
}

pub fn names_boxed(employees: &[Employee]) -> Box<[String]> {
    employees.iter().map(|e| e.name.clone()).collect()
}

pub fn uppercase_boxed(words: &[&str]) -> Box<[String]> {
    words.iter().map(|w| w.to_uppercase()).collect()
}

/// Collects into `[T; N]`, failing when the input does not hold exactly `N`
/// elements.
pub fn to_fixed<T: Clone, const N: usize>(items: &[T]) -> Result<[T; N]> {
    items
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|rest: Vec<T>| PipelineError::LengthMismatch {
            expected: N,
            actual: rest.len(),
        })
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [1, 2, 3, 4, 5];
    let words = ["apple", "banana", "cherry"];
    let mut employees = fixtures::core_staff();
    employees.truncate(3);

    report.section("Integers")?;
    report.input(bracketed(numbers))?;
    report.output("Box<[i32]>", bracketed(to_boxed(&numbers).iter()))?;

    report.section("Strings")?;
    report.input(bracketed(words))?;
    report.output("Box<[&str]>", bracketed(to_boxed(&words).iter()))?;

    report.section("Employees")?;
    report.input(bracketed(&employees))?;
    report.output("Box<[Employee]>", bracketed(to_boxed(&employees).iter()))?;
    report.output("Box<[String]> of names", bracketed(names_boxed(&employees).iter()))?;

    report.section("Uppercase")?;
    report.input(bracketed(words))?;
    report.output("uppercase Box<[String]>", bracketed(uppercase_boxed(&words).iter()))?;

    report.section("Fixed Size")?;
    report.input(bracketed(words))?;
    let triple: [&str; 3] = to_fixed(&words)?;
    report.output("[&str; 3]", bracketed(triple))?;
    match to_fixed::<_, 4>(&words) {
        Ok(quad) => report.output("[&str; 4]", bracketed(quad)),
        Err(err) => report.output("[&str; 4]", format_args!("error: {err}")),
    }
}
