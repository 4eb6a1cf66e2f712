use crate::error::StepError;
use log::debug;
use std::fs;
use std::path::Path;

pub fn read_file_content(path: &Path) -> Result<String, StepError> {
    fs::read_to_string(path).map_err(|source| StepError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_file_content(path: &Path, content: &str) -> Result<(), StepError> {
    fs::write(path, content).map_err(|source| StepError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

pub fn remove_file(path: &Path) -> Result<(), StepError> {
    fs::remove_file(path).map_err(|source| StepError::Delete {
        path: path.to_path_buf(),
        source,
    })
}
