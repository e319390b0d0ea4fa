//! `sorted`: order elements naturally or with a comparator.
//!
//! Run with: cargo run --bin p1_sorted
//!
//! All orderings here are stable: `sort_by` and `sort_by_key` never reorder
//! elements that compare equal. Salaries are `f64`, so they are compared with
//! `total_cmp`.

use std::cmp::Reverse;

use crate::config::Config;
use crate::employee::{fixtures, Employee};
use crate::error::Result;
use crate::report::{bracketed, Report};

pub fn ascending(numbers: &[i32]) -> Vec<i32> {
    let mut sorted = numbers.to_vec();
    sorted.sort();
    sorted
}

pub fn descending(numbers: &[i32]) -> Vec<i32> {
    let mut sorted = numbers.to_vec();
    sorted.sort_by_key(|&n| Reverse(n));
    sorted
}

pub fn alphabetical<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut sorted = words.to_vec();
    sorted.sort();
    sorted
}

pub fn by_age(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by_key(|e| e.age);
    sorted
}

/// Department ascending, then salary descending within a department.
pub fn by_department_then_salary_desc(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| {
        a.department
            .cmp(&b.department)
            .then_with(|| b.salary.total_cmp(&a.salary))
    });
    sorted
}

pub fn by_name(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}

pub fn by_salary(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| a.salary.total_cmp(&b.salary));
    sorted
}

pub fn by_age_then_name(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| a.age.cmp(&b.age).then_with(|| a.name.cmp(&b.name)));
    sorted
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [5, 2, 8, 1, 3];
    let words = ["banana", "apple", "cherry", "date"];
    let employees = fixtures::core_staff();
    let staff = bracketed(&employees);

    report.section("Ascending")?;
    report.input(bracketed(numbers))?;
    report.output("sorted ascending", bracketed(ascending(&numbers)))?;

    report.section("Alphabetical")?;
    report.input(bracketed(words))?;
    report.output("sorted alphabetically", bracketed(alphabetical(&words)))?;

    report.section("By Age")?;
    report.input(&staff)?;
    report.output("sorted by age", bracketed(by_age(&employees)))?;

    report.section("Descending")?;
    report.input(bracketed(numbers))?;
    report.output("sorted descending", bracketed(descending(&numbers)))?;

    report.section("Department, Salary Descending")?;
    report.input(&staff)?;
    report.output(
        "sorted by dept, salary desc",
        bracketed(by_department_then_salary_desc(&employees)),
    )?;

    report.section("By Name")?;
    report.input(&staff)?;
    report.output("sorted by name", bracketed(by_name(&employees)))?;

    report.section("By Salary")?;
    report.input(&staff)?;
    report.output("sorted by salary", bracketed(by_salary(&employees)))?;

    report.section("Age, then Name")?;
    report.input(&staff)?;
    report.output(
        "sorted by age, then name",
        bracketed(by_age_then_name(&employees)),
    )
}
