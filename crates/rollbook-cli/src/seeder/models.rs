//! Seeding configuration.

/// Plaintext password given to every seeded account.
pub const DEFAULT_SEED_PASSWORD: &str = "password123";

pub const DEPARTMENTS: &[&str] = &[
    "Computer Science",
    "Electronics",
    "Mechanical",
    "Civil",
    "Information Technology",
];

pub const DIVISIONS: &[&str] = &["A", "B", "C", "D"];

pub const DESIGNATIONS: &[&str] = &[
    "Professor",
    "Associate Professor",
    "Assistant Professor",
    "Lecturer",
];

/// How many accounts of each kind to create.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub students: usize,
    pub teachers: usize,
    pub password: String,
}

impl SeedConfig {
    pub fn new(students: usize, teachers: usize) -> Self {
        Self {
            students,
            teachers,
            password: DEFAULT_SEED_PASSWORD.to_string(),
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }
}

/// Outcome of inserting one batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    /// Records rejected because their email or PRN was already taken.
    pub skipped: usize,
}
