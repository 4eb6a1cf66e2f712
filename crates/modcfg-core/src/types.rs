use crate::error::StepError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A literal before/after substitution applied to one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditSpec {
    pub label: String,
    pub path: PathBuf,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteSpec {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub required_dirs: Vec<PathBuf>,
    #[serde(default)]
    pub delete: Vec<DeleteSpec>,
    #[serde(default, rename = "edit")]
    pub edits: Vec<EditSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyApplied,
    NotPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Applied { replacements: usize },
    Deleted,
    Skipped(SkipReason),
    WouldApply { replacements: usize },
    WouldDelete,
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Applied { replacements: 1 } => write!(f, "File updated."),
            StepOutcome::Applied { replacements } => {
                write!(f, "File updated ({} occurrences replaced).", replacements)
            }
            StepOutcome::Deleted => write!(f, "File deleted."),
            StepOutcome::Skipped(SkipReason::AlreadyApplied) => {
                write!(f, "Already configured, nothing to change.")
            }
            StepOutcome::Skipped(SkipReason::NotPresent) => {
                write!(f, "File does not exist, nothing to delete.")
            }
            StepOutcome::WouldApply { replacements } => {
                write!(f, "File would be updated ({} occurrence(s)).", replacements)
            }
            StepOutcome::WouldDelete => write!(f, "File would be deleted."),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    Delete,
    Edit,
}

/// What happened to one deletion or substitution.
#[derive(Debug)]
pub struct StepReport {
    pub kind: StepKind,
    pub label: String,
    pub path: PathBuf,
    pub result: Result<StepOutcome, StepError>,
}

impl StepReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.steps.iter().all(StepReport::is_success)
    }

    pub fn failed_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.is_success()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.result, Ok(StepOutcome::Skipped(_))))
            .count()
    }
}
