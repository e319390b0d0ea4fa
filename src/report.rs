//! Console rendering shared by every topic.
//!
//! Topics never call `println!` directly; they write through a [`Report`] so
//! the same code drives stdout in the binaries and an in-memory buffer in
//! tests.

use std::fmt::Display;
use std::io::Write;

use colored::Colorize;
use itertools::Itertools;

use crate::error::Result;

pub struct Report<'a> {
    out: &'a mut dyn Write,
    color: bool,
}

impl<'a> Report<'a> {
    pub fn new(out: &'a mut dyn Write, color: bool) -> Self {
        Self { out, color }
    }

    /// `=== TITLE ===` preceded by a blank line.
    pub fn section(&mut self, title: &str) -> Result<()> {
        let banner = format!("=== {title} ===");
        if self.color {
            writeln!(self.out, "\n{}", banner.bold().cyan())?;
        } else {
            writeln!(self.out, "\n{banner}")?;
        }
        Ok(())
    }

    /// Full-width rule with a centred title, used by the long-form demos.
    pub fn banner(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(80);
        writeln!(self.out, "\n{rule}")?;
        if self.color {
            writeln!(self.out, "{}", title.bold())?;
        } else {
            writeln!(self.out, "{title}")?;
        }
        writeln!(self.out, "{rule}")?;
        Ok(())
    }

    pub fn input(&mut self, value: impl Display) -> Result<()> {
        writeln!(self.out, "Input: {value}")?;
        Ok(())
    }

    pub fn output(&mut self, label: &str, value: impl Display) -> Result<()> {
        if self.color {
            writeln!(self.out, "{} ({label}): {value}", "Output".green())?;
        } else {
            writeln!(self.out, "Output ({label}): {value}")?;
        }
        Ok(())
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Render any sequence as `[a, b, c]`.
pub fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!("[{}]", items.into_iter().join(", "))
}

/// Render optional text, writing `null` for missing entries.
pub fn nullable<'s, I, S>(items: I) -> String
where
    I: IntoIterator<Item = &'s Option<S>>,
    S: AsRef<str> + 's,
{
    bracketed(
        items
            .into_iter()
            .map(|item| item.as_ref().map_or("null", |s| s.as_ref())),
    )
}

/// Render an optional result with a fallback such as `None` or `N/A`.
pub fn or_else<T: Display>(value: Option<T>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), |v| v.to_string())
}

#[cfg(test)]
pub(crate) fn render<F>(body: F) -> String
where
    F: FnOnce(&mut Report<'_>) -> Result<()>,
{
    let mut buffer = Vec::new();
    {
        let mut report = Report::new(&mut buffer, false);
        body(&mut report).expect("rendering into a Vec cannot fail");
    }
    String::from_utf8(buffer).expect("report output is UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed() {
        assert_eq!(bracketed([1, 2, 3]), "[1, 2, 3]");
        assert_eq!(bracketed(Vec::<i32>::new()), "[]");
        assert_eq!(bracketed(["a"]), "[a]");
    }

    #[test]
    fn test_nullable() {
        let words = [Some("apple"), Some(""), None];
        assert_eq!(nullable(&words), "[apple, , null]");
    }

    #[test]
    fn test_or_else() {
        assert_eq!(or_else(Some(5), "N/A"), "5");
        assert_eq!(or_else(None::<i32>, "N/A"), "N/A");
    }

    #[test]
    fn test_plain_report_lines() {
        let text = render(|report| {
            report.section("FILTER")?;
            report.input(bracketed([1, 2]))?;
            report.output("even numbers", bracketed([2]))
        });
        assert_eq!(
            text,
            "\n=== FILTER ===\nInput: [1, 2]\nOutput (even numbers): [2]\n"
        );
    }

    #[test]
    fn test_banner() {
        let text = render(|report| report.banner("DEMO"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1].len(), 80);
        assert_eq!(lines[2], "DEMO");
    }
}
