//! `flat_map`: expand each element into zero or more elements and splice
//! the results into one sequence.
//!
//! Run with: cargo run --bin p1_flat_map

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::config::Config;
use crate::employee::{fixtures, Employee};
use crate::error::Result;
use crate::report::{bracketed, Report};

pub fn flatten(lists: &[Vec<i32>]) -> Vec<i32> {
    lists.iter().flatten().copied().collect()
}

/// Single-space separated words. Trailing separators produce no empty words.
pub fn words<'a>(sentences: &[&'a str]) -> Vec<&'a str> {
    sentences.iter().flat_map(|&s| split_words(s)).collect()
}

fn split_words(sentence: &str) -> std::str::Split<'_, char> {
    sentence.trim_end_matches(' ').split(' ')
}

/// Every skill once, in the order it first appears.
pub fn distinct_skills(employees: &[Employee]) -> Vec<&str> {
    employees
        .iter()
        .flat_map(|e| e.skills.iter().map(String::as_str))
        .unique()
        .collect()
}

/// Paragraphs are lists of sentences; the result is lowercased and distinct.
pub fn distinct_words(paragraphs: &[Vec<&str>]) -> Vec<String> {
    paragraphs
        .iter()
        .flatten()
        .flat_map(|&sentence| split_words(sentence))
        .map(str::to_lowercase)
        .unique()
        .collect()
}

pub fn distinct_projects(employees: &[Employee]) -> Vec<&str> {
    employees
        .iter()
        .flat_map(|e| e.projects.iter().map(String::as_str))
        .unique()
        .collect()
}

pub fn name_characters(employees: &[Employee]) -> BTreeSet<char> {
    employees.iter().flat_map(|e| e.name.chars()).collect()
}

pub fn run(report: &mut Report<'_>, _config: &Config) -> Result<()> {
    let lists = vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]];
    let sentences = ["Rust iterators are powerful", "Practice makes perfect"];
    let employees = fixtures::skilled_staff();
    let staff = bracketed(employees.iter().map(Employee::portfolio));
    let paragraphs = vec![
        vec!["Rust is great", "Streams are cool"],
        vec!["Practice Rust streams", "Streams are powerful"],
    ];

    report.section("Flatten Lists")?;
    report.input(bracketed(lists.iter().map(bracketed)))?;
    report.output("flattened", bracketed(flatten(&lists)))?;

    report.section("Sentences to Words")?;
    report.input(bracketed(sentences))?;
    report.output("words", bracketed(words(&sentences)))?;

    report.section("Skills")?;
    report.input(&staff)?;
    report.output("all unique skills", bracketed(distinct_skills(&employees)))?;

    report.section("Paragraph Words")?;
    report.input(bracketed(paragraphs.iter().map(bracketed)))?;
    report.output("unique words", bracketed(distinct_words(&paragraphs)))?;

    report.section("Projects")?;
    report.input(&staff)?;
    report.output(
        "all unique projects",
        bracketed(distinct_projects(&employees)),
    )?;

    report.section("Name Characters")?;
    report.input(&staff)?;
    report.output(
        "unique name characters",
        bracketed(name_characters(&employees)),
    )
}
