use crate::operations::{
    apply_edit, check_environment, delete_file, preview_delete, preview_edit, SimulatedTree,
};
use crate::types::{Plan, RunReport, StepKind, StepReport};
use log::info;
use std::path::Path;

/// Receives progress while a plan runs.
pub trait Reporter {
    fn environment_checked(&mut self) {}

    fn step_started(&mut self, _kind: &StepKind, _label: &str, _path: &Path) {}

    fn step_finished(&mut self, step: &StepReport);
}

pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn step_finished(&mut self, _step: &StepReport) {}
}

/// Checks the environment, then runs every deletion and edit in order.
///
/// A failed environment check returns before anything is touched. After that
/// each step runs regardless of how earlier ones went; the outcome of all of
/// them is collected in the returned report.
pub fn run_plan(
    root: &Path,
    plan: &Plan,
    dry_run: bool,
    reporter: &mut dyn Reporter,
) -> Result<RunReport, Vec<String>> {
    check_environment(root, &plan.required_dirs)?;
    reporter.environment_checked();
    info!(
        "Environment OK at {:?}, running {} step(s){}",
        root,
        plan.delete.len() + plan.edits.len(),
        if dry_run { " (dry run)" } else { "" }
    );

    let mut report = RunReport::default();
    let mut simulated = SimulatedTree::default();

    for target in &plan.delete {
        let label = format!("Delete {}", target.path.display());
        reporter.step_started(&StepKind::Delete, &label, &target.path);
        let step = StepReport {
            kind: StepKind::Delete,
            label,
            path: target.path.clone(),
            result: if dry_run {
                preview_delete(root, target, &mut simulated)
            } else {
                delete_file(root, target, false)
            },
        };
        reporter.step_finished(&step);
        report.steps.push(step);
    }

    for edit in &plan.edits {
        reporter.step_started(&StepKind::Edit, &edit.label, &edit.path);
        let step = StepReport {
            kind: StepKind::Edit,
            label: edit.label.clone(),
            path: edit.path.clone(),
            result: if dry_run {
                preview_edit(root, edit, &mut simulated)
            } else {
                apply_edit(root, edit, false)
            },
        };
        reporter.step_finished(&step);
        report.steps.push(step);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeleteSpec, EditSpec, StepOutcome};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[derive(Default)]
    struct Recorder {
        started: Vec<String>,
        finished: Vec<bool>,
    }

    impl Reporter for Recorder {
        fn step_started(&mut self, _kind: &StepKind, label: &str, _path: &Path) {
            self.started.push(label.to_string());
        }

        fn step_finished(&mut self, step: &StepReport) {
            self.finished.push(step.is_success());
        }
    }

    fn plan() -> Plan {
        Plan {
            required_dirs: vec![PathBuf::from("src")],
            delete: vec![DeleteSpec {
                path: PathBuf::from("src/old.c"),
            }],
            edits: vec![
                EditSpec {
                    label: "first".to_string(),
                    path: PathBuf::from("src/missing.c"),
                    before: "a".to_string(),
                    after: "b".to_string(),
                },
                EditSpec {
                    label: "second".to_string(),
                    path: PathBuf::from("src/main.c"),
                    before: "hello".to_string(),
                    after: "goodbye".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_run_plan_continues_after_failure() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.c"), "hello").unwrap();

        let mut recorder = Recorder::default();
        let report = run_plan(dir.path(), &plan(), false, &mut recorder).unwrap();

        assert_eq!(recorder.started, vec!["Delete src/old.c", "first", "second"]);
        assert_eq!(recorder.finished, vec![true, false, true]);
        assert!(!report.succeeded());
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("src/main.c")).unwrap(),
            "goodbye"
        );
    }

    #[test]
    fn test_run_plan_environment_failure_touches_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("old.c"), "x").unwrap();

        let mut recorder = Recorder::default();
        let errors = run_plan(dir.path(), &plan(), false, &mut recorder).unwrap_err();

        assert!(errors[0].contains("'src' not found"));
        assert!(recorder.started.is_empty());
    }

    #[test]
    fn test_run_plan_dry_run() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/old.c"), "x").unwrap();
        fs::write(dir.path().join("src/main.c"), "hello").unwrap();

        let report = run_plan(dir.path(), &plan(), true, &mut SilentReporter).unwrap();

        assert!(matches!(report.steps[0].result, Ok(StepOutcome::WouldDelete)));
        assert!(matches!(
            report.steps[2].result,
            Ok(StepOutcome::WouldApply { replacements: 1 })
        ));
        assert!(dir.path().join("src/old.c").exists());
        assert_eq!(fs::read_to_string(dir.path().join("src/main.c")).unwrap(), "hello");
    }

    #[test]
    fn test_dry_run_matches_real_run_for_chained_edits() {
        let chained = Plan {
            required_dirs: vec![PathBuf::from("src")],
            delete: vec![],
            edits: vec![
                EditSpec {
                    label: "A to B".to_string(),
                    path: PathBuf::from("src/a.h"),
                    before: "A".to_string(),
                    after: "B".to_string(),
                },
                EditSpec {
                    label: "B to C".to_string(),
                    path: PathBuf::from("src/a.h"),
                    before: "B".to_string(),
                    after: "C".to_string(),
                },
            ],
        };
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/a.h"), "A\n").unwrap();

        let dry = run_plan(dir.path(), &chained, true, &mut SilentReporter).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("src/a.h")).unwrap(), "A\n");

        let real = run_plan(dir.path(), &chained, false, &mut SilentReporter).unwrap();

        assert!(dry.succeeded());
        assert_eq!(dry.succeeded(), real.succeeded());
        for step in &dry.steps {
            assert!(matches!(step.result, Ok(StepOutcome::WouldApply { replacements: 1 })));
        }
        assert_eq!(fs::read_to_string(dir.path().join("src/a.h")).unwrap(), "C\n");
    }
}
