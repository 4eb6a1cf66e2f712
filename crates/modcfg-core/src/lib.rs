pub mod error;
pub mod matcher;
pub mod operations;
pub mod plan;
pub mod types;

pub use error::StepError;
pub use operations::runner::SilentReporter;
pub use operations::{
    apply_edit, check_environment, delete_file, preview_delete, preview_edit, run_plan, Reporter,
    SimulatedTree,
};
pub use plan::load_plan;
pub use types::{DeleteSpec, EditSpec, Plan, RunReport, SkipReason, StepKind, StepOutcome, StepReport};
