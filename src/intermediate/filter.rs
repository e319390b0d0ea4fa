//! `filter`: keep the elements that satisfy a predicate.
//!
//! Run with: cargo run --bin p1_filter

use crate::config::Config;
use crate::employee::{fixtures, Employee, SalaryBand};
use crate::error::Result;
use crate::report::{bracketed, nullable, Report};

pub fn even_numbers(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

/// Missing and empty strings never match.
pub fn starting_with<'a>(words: &[Option<&'a str>], letter: char) -> Vec<&'a str> {
    words
        .iter()
        .flatten()
        .copied()
        .filter(|w| w.starts_with(letter))
        .collect()
}

pub fn high_earners(employees: &[Employee], threshold: f64) -> Vec<&Employee> {
    employees.iter().filter(|e| e.salary > threshold).collect()
}

pub fn non_empty<'a>(words: &[Option<&'a str>]) -> Vec<&'a str> {
    words
        .iter()
        .filter_map(|w| w.filter(|s| !s.is_empty()))
        .collect()
}

pub fn is_prime(n: i32) -> bool {
    if n <= 1 {
        return false;
    }
    (2..).take_while(|&i| i <= n / i).all(|i| n % i != 0)
}

pub fn primes(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().copied().filter(|&n| is_prime(n)).collect()
}

pub fn in_department_older_than<'a>(
    employees: &'a [Employee],
    department: &str,
    min_age: u32,
) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|e| e.department == department && e.age > min_age)
        .collect()
}

pub fn name_starts_with(employees: &[Employee], letter: char) -> Vec<&Employee> {
    employees
        .iter()
        .filter(|e| e.name.starts_with(letter))
        .collect()
}

pub fn in_salary_band(employees: &[Employee], band: SalaryBand) -> Vec<&Employee> {
    employees.iter().filter(|e| band.contains(e.salary)).collect()
}

pub fn young_engineers(employees: &[Employee]) -> Vec<&Employee> {
    employees
        .iter()
        .filter(|e| (25..=35).contains(&e.age) && e.department == "Engineering")
        .collect()
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [1, 2, 3, 4, 5, 11, 13, 17, 20];
    let words = [
        Some("apple"),
        Some(""),
        None,
        Some("banana"),
        Some("cherry"),
        Some("avocado"),
    ];
    let employees = fixtures::core_staff();
    let staff = bracketed(&employees);

    report.section("Even Numbers")?;
    report.input(bracketed(numbers))?;
    report.output("even numbers", bracketed(even_numbers(&numbers)))?;

    report.section("Starting Letter")?;
    report.input(nullable(&words))?;
    report.output("start with 'a'", bracketed(starting_with(&words, 'a')))?;

    report.section("High Salary")?;
    report.input(&staff)?;
    report.output("salary > 50000", bracketed(high_earners(&employees, 50_000.0)))?;

    report.section("Drop Missing or Empty")?;
    report.input(nullable(&words))?;
    report.output("non-empty", bracketed(non_empty(&words)))?;

    report.section("Primes")?;
    report.input(bracketed(numbers))?;
    report.output("primes", bracketed(primes(&numbers)))?;

    report.section("Department and Age")?;
    report.input(&staff)?;
    report.output(
        "Engineering & age > 26",
        bracketed(in_department_older_than(&employees, "Engineering", 26)),
    )?;

    report.section("Name Initial")?;
    report.input(&staff)?;
    report.output(
        "name starts with 'A'",
        bracketed(name_starts_with(&employees, 'A')),
    )?;

    let band: SalaryBand = "Medium".parse()?;
    report.section("Salary Band")?;
    report.input(&staff)?;
    report.output(
        &format!("salary band '{band}'"),
        bracketed(in_salary_band(&employees, band)),
    )?;

    report.section("Age Range and Department")?;
    report.input(&staff)?;
    report.output(
        "age 25-35, Engineering",
        bracketed(young_engineers(&employees)),
    )
}
