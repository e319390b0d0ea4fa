//! `map`: transform every element one-to-one.
//!
//! Run with: cargo run --bin p1_map

use itertools::Itertools;

use crate::config::Config;
use crate::employee::{fixtures, Employee, SalaryBand};
use crate::error::Result;
use crate::report::{bracketed, Report};

pub fn squares(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().map(|n| n.wrapping_mul(*n)).collect()
}

pub fn uppercase(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_uppercase()).collect()
}

pub fn names(employees: &[Employee]) -> Vec<&str> {
    employees.iter().map(|e| e.name.as_str()).collect()
}

pub fn add_ten(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().map(|n| n.wrapping_add(10)).collect()
}

/// Length in characters, not bytes.
pub fn lengths(words: &[&str]) -> Vec<usize> {
    words.iter().map(|w| w.chars().count()).collect()
}

/// Words are separated by single spaces. Trailing separators add no words.
pub fn word_counts(sentences: &[&str]) -> Vec<usize> {
    sentences
        .iter()
        .map(|s| s.trim_end_matches(' ').split(' ').count())
        .collect()
}

/// Uppercased department names, first occurrence order.
pub fn departments_upper(employees: &[Employee]) -> Vec<String> {
    employees
        .iter()
        .map(|e| e.department.to_uppercase())
        .unique()
        .collect()
}

pub fn name_lengths(employees: &[Employee]) -> Vec<usize> {
    employees.iter().map(|e| e.name.chars().count()).collect()
}

pub fn initials(employees: &[Employee]) -> Vec<char> {
    employees
        .iter()
        .filter_map(|e| e.name.chars().next())
        .collect()
}

pub fn salary_bands(employees: &[Employee]) -> Vec<SalaryBand> {
    employees.iter().map(Employee::band).collect()
}

pub fn name_department_pairs(employees: &[Employee]) -> Vec<String> {
    employees
        .iter()
        .map(|e| format!("{}-{}", e.name, e.department))
        .collect()
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let numbers = [1, 2, 3, 4, 5];
    let words = ["apple", "banana", "cherry"];
    let sentences = [
        "Hello world",
        "Rust iterators are powerful",
        "Practice makes perfect",
    ];
    let employees = fixtures::core_staff();
    let staff = bracketed(&employees);

    report.section("Squares")?;
    report.input(bracketed(numbers))?;
    report.output("squared", bracketed(squares(&numbers)))?;

    report.section("Uppercase")?;
    report.input(bracketed(words))?;
    report.output("uppercase", bracketed(uppercase(&words)))?;

    report.section("Employee Names")?;
    report.input(&staff)?;
    report.output("names", bracketed(names(&employees)))?;

    report.section("Add Ten")?;
    report.input(bracketed(numbers))?;
    report.output("+10", bracketed(add_ten(&numbers)))?;

    report.section("String Lengths")?;
    report.input(bracketed(words))?;
    report.output("lengths", bracketed(lengths(&words)))?;

    report.section("Word Counts")?;
    report.input(bracketed(sentences))?;
    report.output("word counts", bracketed(word_counts(&sentences)))?;

    report.section("Departments")?;
    report.input(&staff)?;
    report.output(
        "departments uppercase",
        bracketed(departments_upper(&employees)),
    )?;

    report.section("Name Lengths")?;
    report.input(&staff)?;
    report.output("name lengths", bracketed(name_lengths(&employees)))?;

    report.section("Initials")?;
    report.input(&staff)?;
    report.output("initials", bracketed(initials(&employees)))?;

    report.section("Salary Bands")?;
    report.input(&staff)?;
    report.output("salary bands", bracketed(salary_bands(&employees)))?;

    report.section("Name-Department Pairs")?;
    report.input(&staff)?;
    report.output(
        "name-department pairs",
        bracketed(name_department_pairs(&employees)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render;

    #[test]
    fn test_numeric_maps() {
        assert_eq!(squares(&[1, 2, 3, 4, 5]), vec![1, 4, 9, 16, 25]);
        assert_eq!(add_ten(&[1, 2, 3]), vec![11, 12, 13]);
    }

    #[test]
    fn test_numeric_maps_wrap_like_i32() {
        assert_eq!(squares(&[50_000]), vec![-1_794_967_296]);
        assert_eq!(add_ten(&[i32::MAX]), vec![i32::MIN + 9]);
    }

    #[test]
    fn test_string_maps() {
        assert_eq!(uppercase(&["apple", "banana"]), vec!["APPLE", "BANANA"]);
        assert_eq!(lengths(&["apple", "banana", "cherry"]), vec![5, 6, 6]);
        assert_eq!(lengths(&["naïve"]), vec![5]);
    }

    #[test]
    fn test_word_counts() {
        let sentences = ["Hello world", "Rust iterators are powerful", "Practice makes perfect"];
        assert_eq!(word_counts(&sentences), vec![2, 4, 3]);
    }

    #[test]
    fn test_word_counts_ignore_trailing_spaces() {
        assert_eq!(word_counts(&["Hello world ", "Hello world   "]), vec![2, 2]);
        assert_eq!(word_counts(&[" lead", ""]), vec![2, 1]);
    }

    #[test]
    fn test_departments_upper_is_distinct_in_order() {
        let staff = fixtures::core_staff();
        assert_eq!(departments_upper(&staff), vec!["HR", "ENGINEERING", "FINANCE"]);
    }

    #[test]
    fn test_employee_projections() {
        let staff = fixtures::core_staff();
        assert_eq!(names(&staff), vec!["Alice", "Bob", "Charlie", "Diana"]);
        assert_eq!(name_lengths(&staff), vec![5, 3, 7, 5]);
        assert_eq!(initials(&staff), vec!['A', 'B', 'C', 'D']);
        assert_eq!(
            salary_bands(&staff),
            vec![
                SalaryBand::Low,
                SalaryBand::Medium,
                SalaryBand::Medium,
                SalaryBand::High
            ]
        );
        assert_eq!(name_department_pairs(&staff)[0], "Alice-HR");
    }

    #[test]
    fn test_run_output() {
        let text = render(|report| run(report, &Config::default()));
        assert!(text.contains("Output (squared): [1, 4, 9, 16, 25]"));
        assert!(text.contains("Output (salary bands): [Low, Medium, Medium, High]"));
        assert!(text.contains("Output (initials): [A, B, C, D]"));
        assert!(text.contains(concat!(
            "Output (name-department pairs): ",
            "[Alice-HR, Bob-Engineering, Charlie-Engineering, Diana-Finance]"
        )));
    }
}
