use log::debug;
use std::path::{Path, PathBuf};

/// Confirms `root` looks like a module checkout: every required directory
/// has to exist below it.
pub fn check_environment(root: &Path, required_dirs: &[PathBuf]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for dir in required_dirs {
        let full = root.join(dir);
        if full.is_dir() {
            debug!("Found required directory {:?}", full);
        } else if full.exists() {
            errors.push(format!("  - '{}' exists but is not a directory", dir.display()));
        } else {
            errors.push(format!("  - '{}' not found", dir.display()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn dirs() -> Vec<PathBuf> {
        vec![PathBuf::from("application"), PathBuf::from("hal")]
    }

    #[test]
    fn test_check_environment_ok() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("application")).unwrap();
        fs::create_dir(dir.path().join("hal")).unwrap();

        assert!(check_environment(dir.path(), &dirs()).is_ok());
    }

    #[test]
    fn test_check_environment_missing_hal() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("application")).unwrap();

        let errors = check_environment(dir.path(), &dirs()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'hal' not found"));
    }

    #[test]
    fn test_check_environment_file_instead_of_dir() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("application")).unwrap();
        fs::write(dir.path().join("hal"), "").unwrap();

        let errors = check_environment(dir.path(), &dirs()).unwrap_err();
        assert!(errors[0].contains("not a directory"));
    }

    #[test]
    fn test_check_environment_reports_every_missing_dir() {
        let dir = tempdir().unwrap();
        let errors = check_environment(dir.path(), &dirs()).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
