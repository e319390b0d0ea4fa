//! `take` and `skip`: slice a sequence by position.
//!
//! Run with: cargo run --bin p1_limit_skip

use std::collections::BTreeMap;

use crate::config::Config;
use crate::employee::{fixtures, Employee};
use crate::error::{PipelineError, Result};
use crate::report::{bracketed, Report};

pub fn first_n<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().take(n).cloned().collect()
}

pub fn skip_n<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().skip(n).cloned().collect()
}

/// One page of `items`. Pages are numbered from 1; a page past the end is
/// empty rather than an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Vec<T>> {
    if page == 0 || page_size == 0 {
        return Err(PipelineError::InvalidPage { page, page_size });
    }
    let offset = (page - 1).saturating_mul(page_size);
    Ok(items.iter().skip(offset).take(page_size).cloned().collect())
}

pub fn top_paid(employees: &[Employee], n: usize) -> Vec<&Employee> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    ranked.sort_by(|a, b| b.salary.total_cmp(&a.salary));
    ranked.into_iter().take(n).collect()
}

/// Drops the first employee of every department. Departments are visited in
/// name order; roster order is kept within each department.
pub fn skip_first_per_department(employees: &[Employee]) -> Vec<&Employee> {
    employees
        .iter()
        .fold(BTreeMap::<&str, Vec<&Employee>>::new(), |mut groups, e| {
            groups.entry(e.department.as_str()).or_default().push(e);
            groups
        })
        .into_values()
        .flat_map(|members| members.into_iter().skip(1))
        .collect()
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [1, 2, 3, 4, 5, 6, 7];
    let words = ["apple", "banana", "cherry", "date", "elderberry"];
    let employees = fixtures::extended_staff();
    let staff = bracketed(&employees);

    report.section("First Three")?;
    report.input(bracketed(numbers))?;
    report.output("first 3", bracketed(first_n(&numbers, 3)))?;

    report.section("Skip Two")?;
    report.input(bracketed(words))?;
    report.output("skipped 2", bracketed(skip_n(&words, 2)))?;

    let (page, page_size) = (2, 3);
    report.section("Pagination")?;
    report.input(bracketed(numbers))?;
    report.output(
        &format!("page {page}, size {page_size}"),
        bracketed(paginate(&numbers, page, page_size)?),
    )?;

    report.section("Top Two Highest Paid")?;
    report.input(&staff)?;
    report.output("top 2 highest paid", bracketed(top_paid(&employees, 2)))?;

    report.section("Skip First per Department")?;
    report.input(&staff)?;
    report.output(
        "skipped first in each dept",
        bracketed(skip_first_per_department(&employees)),
    )
}
