//! Sample records shared by the topics.

use std::fmt;
use std::str::FromStr;

use crate::error::PipelineError;
use crate::report::bracketed;

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub age: u32,
    pub department: String,
    pub salary: f64,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
}

impl Employee {
    pub fn new(name: &str, age: u32, department: &str, salary: f64) -> Self {
        Self {
            name: name.to_string(),
            age,
            department: department.to_string(),
            salary,
            skills: Vec::new(),
            projects: Vec::new(),
        }
    }

    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_projects(mut self, projects: &[&str]) -> Self {
        self.projects = projects.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn band(&self) -> SalaryBand {
        SalaryBand::of(self.salary)
    }

    /// `name (skills: [..], projects: [..])`
    pub fn portfolio(&self) -> Portfolio<'_> {
        Portfolio(self)
    }
}

/// `Alice (30, HR, $60000.0)`
impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, ${:.1})",
            self.name, self.age, self.department, self.salary
        )
    }
}

pub struct Portfolio<'a>(&'a Employee);

impl fmt::Display for Portfolio<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (skills: {}, projects: {})",
            self.0.name,
            bracketed(&self.0.skills),
            bracketed(&self.0.projects)
        )
    }
}

/// Name plus badge number, used for identity-based deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Badge {
    pub name: String,
    pub id: u32,
}

impl Badge {
    pub fn new(name: &str, id: u32) -> Self {
        Self {
            name: name.to_string(),
            id,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalaryBand {
    Low,
    Medium,
    High,
}

impl SalaryBand {
    pub const MEDIUM_FLOOR: f64 = 70_000.0;
    pub const HIGH_FLOOR: f64 = 85_000.0;

    pub fn of(salary: f64) -> Self {
        if salary < Self::MEDIUM_FLOOR {
            SalaryBand::Low
        } else if salary < Self::HIGH_FLOOR {
            SalaryBand::Medium
        } else {
            SalaryBand::High
        }
    }

    pub fn contains(self, salary: f64) -> bool {
        Self::of(salary) == self
    }
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SalaryBand::Low => "Low",
            SalaryBand::Medium => "Medium",
            SalaryBand::High => "High",
        };
        f.write_str(label)
    }
}

impl FromStr for SalaryBand {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(SalaryBand::Low),
            "medium" => Ok(SalaryBand::Medium),
            "high" => Ok(SalaryBand::High),
            _ => Err(PipelineError::UnknownSalaryBand(s.to_string())),
        }
    }
}

/// Hardcoded datasets used by the demonstration drivers.
pub mod fixtures {
    use super::{Badge, Employee};

    /// Alice, Bob, Charlie and Diana: the roster most topics use.
    pub fn core_staff() -> Vec<Employee> {
        vec![
            Employee::new("Alice", 30, "HR", 60_000.0),
            Employee::new("Bob", 25, "Engineering", 80_000.0),
            Employee::new("Charlie", 28, "Engineering", 75_000.0),
            Employee::new("Diana", 35, "Finance", 90_000.0),
        ]
    }

    /// Core staff plus Eve (HR) and Frank (Finance).
    pub fn extended_staff() -> Vec<Employee> {
        let mut staff = core_staff();
        staff.push(Employee::new("Eve", 32, "HR", 65_000.0));
        staff.push(Employee::new("Frank", 29, "Finance", 85_000.0));
        staff
    }

    pub fn skilled_staff() -> Vec<Employee> {
        vec![
            Employee::new("Alice", 30, "HR", 60_000.0)
                .with_skills(&["Java", "Spring", "SQL"])
                .with_projects(&["Payroll", "Recruitment"]),
            Employee::new("Bob", 25, "Engineering", 80_000.0)
                .with_skills(&["Java", "React", "AWS"])
                .with_projects(&["Inventory", "Payroll"]),
            Employee::new("Charlie", 28, "Engineering", 75_000.0)
                .with_skills(&["Python", "SQL", "AWS"])
                .with_projects(&["Analytics", "Inventory"]),
        ]
    }

    pub fn parallel_staff() -> Vec<Employee> {
        vec![
            Employee::new("Alice", 30, "HR", 60_000.0).with_skills(&["Java", "Spring"]),
            Employee::new("Bob", 25, "Engineering", 80_000.0).with_skills(&["Java", "React"]),
            Employee::new("Charlie", 28, "Engineering", 75_000.0)
                .with_skills(&["Python", "Java"]),
            Employee::new("Diana", 35, "Finance", 90_000.0).with_skills(&["Excel", "SQL"]),
            Employee::new("Eve", 27, "Marketing", 65_000.0)
                .with_skills(&["Photoshop", "Analytics"]),
            Employee::new("Frank", 32, "Engineering", 85_000.0)
                .with_skills(&["Java", "Docker"]),
            Employee::new("Grace", 29, "HR", 62_000.0)
                .with_skills(&["Communication", "Leadership"]),
            Employee::new("Henry", 31, "Finance", 88_000.0).with_skills(&["Excel", "PowerBI"]),
        ]
    }

    /// Contains repeated ids and repeated names on purpose.
    pub fn badges() -> Vec<Badge> {
        vec![
            Badge::new("Alice", 1),
            Badge::new("Bob", 2),
            Badge::new("Charlie", 1),
            Badge::new("Diana", 3),
            Badge::new("Alice", 4),
            Badge::new("Bob", 2),
        ]
    }
}
