pub mod builtin;

use crate::types::{DeleteSpec, EditSpec, Plan};
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

impl Plan {
    /// Deletes the template's `main.cpp` and rewrites the developer info,
    /// UART device and console logging blocks.
    pub fn builtin() -> Self {
        use self::builtin::*;

        Plan {
            required_dirs: REQUIRED_DIRS.into_iter().map(PathBuf::from).collect(),
            delete: vec![DeleteSpec {
                path: PathBuf::from(OBSOLETE_MAIN),
            }],
            edits: vec![
                edit("Developer info", APP_INFO_PATH, APP_INFO_BEFORE, APP_INFO_AFTER),
                edit("UART interface", UART_PATH, UART_BEFORE, UART_AFTER),
                edit(
                    "Console logging (print console)",
                    APPLICATION_PATH,
                    PRINT_CONSOLE_BEFORE,
                    PRINT_CONSOLE_AFTER,
                ),
                edit(
                    "Console logging (local record console)",
                    APPLICATION_PATH,
                    RECORD_CONSOLE_BEFORE,
                    RECORD_CONSOLE_AFTER,
                ),
            ],
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize plan")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse plan")
    }
}

fn edit(label: &str, path: &str, before: &str, after: &str) -> EditSpec {
    EditSpec {
        label: label.to_string(),
        path: PathBuf::from(path),
        before: before.to_string(),
        after: after.to_string(),
    }
}

/// Loads the plan at `path`, or the built-in one when no path is given.
pub fn load_plan(path: Option<&Path>) -> Result<Plan> {
    let Some(path) = path else {
        info!("Using built-in plan");
        return Ok(Plan::builtin());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file at {:?}", path))?;
    let plan = Plan::from_toml(&content).with_context(|| format!("Invalid plan file {:?}", path))?;
    info!(
        "Loaded plan from {:?}: {} deletion(s), {} edit(s)",
        path,
        plan.delete.len(),
        plan.edits.len()
    );
    Ok(plan)
}
