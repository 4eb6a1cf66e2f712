use crate::error::StepError;
use crate::matcher::{classify, replace_all, MatchState};
use crate::operations::file_operations::{
    file_exists, read_file_content, remove_file, write_file_content,
};
use crate::types::{DeleteSpec, EditSpec, SkipReason, StepOutcome};
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File contents as a dry run has left them. `None` marks a deleted file;
/// paths never touched are read from disk.
#[derive(Debug, Default)]
pub struct SimulatedTree {
    files: HashMap<PathBuf, Option<String>>,
}

impl SimulatedTree {
    fn exists(&self, path: &Path) -> bool {
        match self.files.get(path) {
            Some(entry) => entry.is_some(),
            None => file_exists(path),
        }
    }

    fn read(&self, path: &Path) -> Result<String, StepError> {
        match self.files.get(path) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(StepError::MissingTarget {
                path: path.to_path_buf(),
            }),
            None => read_file_content(path),
        }
    }
}

enum Change {
    Rewrite { updated: String, replacements: usize },
    Unchanged,
}

fn plan_change(path: PathBuf, content: &str, spec: &EditSpec) -> Result<Change, StepError> {
    match classify(content, &spec.before, &spec.after) {
        MatchState::Pristine(replacements) => {
            debug!("Found {} occurrence(s) of the original block", replacements);
            Ok(Change::Rewrite {
                updated: replace_all(content, &spec.before, &spec.after),
                replacements,
            })
        }
        MatchState::AlreadyApplied => Ok(Change::Unchanged),
        MatchState::Unknown => Err(StepError::ContentMismatch { path }),
    }
}

/// Removes the file if it is there. A missing file counts as done.
pub fn delete_file(root: &Path, spec: &DeleteSpec, dry_run: bool) -> Result<StepOutcome, StepError> {
    if dry_run {
        return preview_delete(root, spec, &mut SimulatedTree::default());
    }

    let path = root.join(&spec.path);
    debug!("Delete target resolved to {:?}", path);

    if !file_exists(&path) {
        return Ok(StepOutcome::Skipped(SkipReason::NotPresent));
    }

    remove_file(&path)?;
    Ok(StepOutcome::Deleted)
}

/// Rewrites every occurrence of the original block, or skips when the
/// replacement is already there. Anything else leaves the file untouched.
pub fn apply_edit(root: &Path, spec: &EditSpec, dry_run: bool) -> Result<StepOutcome, StepError> {
    if dry_run {
        return preview_edit(root, spec, &mut SimulatedTree::default());
    }

    let path = root.join(&spec.path);
    debug!("Edit '{}' target resolved to {:?}", spec.label, path);

    if spec.before.trim().is_empty() {
        return Err(StepError::EmptyPattern { path });
    }
    if !file_exists(&path) {
        return Err(StepError::MissingTarget { path });
    }

    let content = read_file_content(&path)?;

    match plan_change(path.clone(), &content, spec)? {
        Change::Rewrite {
            updated,
            replacements,
        } => {
            write_file_content(&path, &updated)?;
            Ok(StepOutcome::Applied { replacements })
        }
        Change::Unchanged => Ok(StepOutcome::Skipped(SkipReason::AlreadyApplied)),
    }
}

/// Dry-run counterpart of [`delete_file`]; records the deletion in `tree`.
pub fn preview_delete(
    root: &Path,
    spec: &DeleteSpec,
    tree: &mut SimulatedTree,
) -> Result<StepOutcome, StepError> {
    let path = root.join(&spec.path);

    if !tree.exists(&path) {
        return Ok(StepOutcome::Skipped(SkipReason::NotPresent));
    }

    tree.files.insert(path, None);
    Ok(StepOutcome::WouldDelete)
}

/// Dry-run counterpart of [`apply_edit`]. Later edits to the same file see
/// the content this one would have written.
pub fn preview_edit(
    root: &Path,
    spec: &EditSpec,
    tree: &mut SimulatedTree,
) -> Result<StepOutcome, StepError> {
    let path = root.join(&spec.path);

    if spec.before.trim().is_empty() {
        return Err(StepError::EmptyPattern { path });
    }
    if !tree.exists(&path) {
        return Err(StepError::MissingTarget { path });
    }

    let content = tree.read(&path)?;

    match plan_change(path.clone(), &content, spec)? {
        Change::Rewrite {
            updated,
            replacements,
        } => {
            tree.files.insert(path, Some(updated));
            Ok(StepOutcome::WouldApply { replacements })
        }
        Change::Unchanged => Ok(StepOutcome::Skipped(SkipReason::AlreadyApplied)),
    }
}
