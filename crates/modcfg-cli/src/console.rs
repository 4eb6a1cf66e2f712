use crossterm::style::{force_color_output, Color, Stylize};
use modcfg_core::{Reporter, StepKind, StepOutcome, StepReport};
use std::io::{self, Write};
use std::path::Path;

/// Writes status lines to stdout, styled only when `color` is set.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    color: bool,
}

impl Console {
    pub fn new(color: bool) -> Self {
        if color {
            force_color_output(true);
        }
        Self { color }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn line(&self, text: &str) {
        write_ignoring_errors(&mut io::stdout().lock(), &format!("{}\n", text));
    }

    pub fn raw(&self, text: &str) {
        write_ignoring_errors(&mut io::stdout().lock(), text);
    }

    pub fn error_line(&self, msg: &str) -> String {
        format!("{} {}", self.paint("[ERROR]", Color::Red), msg)
    }

    pub fn error(&self, msg: &str) {
        self.line(&self.error_line(msg));
    }

    pub fn done(&self, msg: &str) {
        self.line(&self.paint(&format!("[DONE] {}", msg), Color::Green));
    }

    pub fn failed(&self, msg: &str) {
        self.line(&self.paint(&format!("[FAILED] {}", msg), Color::Red));
    }

    pub fn step_line(&self, step: &StepReport) -> String {
        match &step.result {
            Ok(outcome @ (StepOutcome::Applied { .. } | StepOutcome::Deleted)) => {
                format!("{} {}", self.paint("[SUCCESS]", Color::Green), outcome)
            }
            Ok(outcome @ StepOutcome::Skipped(_)) => {
                format!("{} {}", self.paint("[SKIP]", Color::Yellow), outcome)
            }
            Ok(outcome @ (StepOutcome::WouldApply { .. } | StepOutcome::WouldDelete)) => {
                format!("{} {}", self.paint("[DRY RUN]", Color::Cyan), outcome)
            }
            Err(e) => self.error_line(&e.to_string()),
        }
    }
}

/// Closed pipes (`modcfg | head`) are not worth a panic.
fn write_ignoring_errors(out: &mut impl Write, text: &str) {
    let _ = out.write_all(text.as_bytes());
    let _ = out.flush();
}

/// Prints one status line per step as the plan runs.
pub struct ConsoleReporter {
    console: Console,
    dry_run: bool,
    edits_started: bool,
}

impl ConsoleReporter {
    pub fn new(console: Console, dry_run: bool) -> Self {
        Self {
            console,
            dry_run,
            edits_started: false,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn environment_checked(&mut self) {
        self.console.line(&format!(
            "{} Environment check passed.\n",
            self.console.paint("[SUCCESS]", Color::Green)
        ));
    }

    fn step_started(&mut self, kind: &StepKind, label: &str, path: &Path) {
        match kind {
            StepKind::Delete => {
                self.console
                    .line(&format!("2. Deleting file: {}...", path.display()));
            }
            StepKind::Edit => {
                if !self.edits_started {
                    self.edits_started = true;
                    let note = if self.dry_run { " (dry run)" } else { "" };
                    self.console
                        .line(&format!("\n3. Updating configuration files{}...", note));
                }
                self.console
                    .line(&format!("\n   -> {} ({})...", label, path.display()));
            }
        }
    }

    fn step_finished(&mut self, step: &StepReport) {
        self.console.line(&self.console.step_line(step));
    }
}
