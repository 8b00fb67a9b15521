//! Technology stack labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A technology stack an agent can be scoped to (Value Object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    Rust,
    Typescript,
    Python,
    Go,
}

impl Stack {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stack::Rust => "rust",
            Stack::Typescript => "typescript",
            Stack::Python => "python",
            Stack::Go => "go",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Stack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rust" => Ok(Stack::Rust),
            "typescript" | "ts" => Ok(Stack::Typescript),
            "python" | "py" => Ok(Stack::Python),
            "go" | "golang" => Ok(Stack::Go),
            _ => Err(format!("Invalid stack: {}", s)),
        }
    }
}
