pub mod edit_applicator;
pub mod file_operations;
pub mod preflight_checks;
pub mod runner;

pub use edit_applicator::{apply_edit, delete_file, preview_delete, preview_edit, SimulatedTree};
pub use preflight_checks::check_environment;
pub use runner::{run_plan, Reporter};
