//! Task type labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a requested unit of work (Value Object).
///
/// Work arrives pre-classified; the core never infers a task type from
/// natural language. The routing table orders candidate agents per task
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Feature,
    Bugfix,
    Refactor,
    Review,
    Test,
    Docs,
    Performance,
    Release,
}

impl TaskType {
    /// Get the string identifier for this task type
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Feature => "feature",
            TaskType::Bugfix => "bugfix",
            TaskType::Refactor => "refactor",
            TaskType::Review => "review",
            TaskType::Test => "test",
            TaskType::Docs => "docs",
            TaskType::Performance => "performance",
            TaskType::Release => "release",
        }
    }

    /// All known task types, in display order.
    pub fn all() -> &'static [TaskType] {
        &[
            TaskType::Feature,
            TaskType::Bugfix,
            TaskType::Refactor,
            TaskType::Review,
            TaskType::Test,
            TaskType::Docs,
            TaskType::Performance,
            TaskType::Release,
        ]
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feature" => Ok(TaskType::Feature),
            "bugfix" | "fix" => Ok(TaskType::Bugfix),
            "refactor" => Ok(TaskType::Refactor),
            "review" => Ok(TaskType::Review),
            "test" => Ok(TaskType::Test),
            "docs" | "documentation" => Ok(TaskType::Docs),
            "performance" | "perf" => Ok(TaskType::Performance),
            "release" => Ok(TaskType::Release),
            _ => Err(format!("Invalid task type: {}", s)),
        }
    }
}
