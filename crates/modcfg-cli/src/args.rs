use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Configure a module freshly copied from the template", long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Configure the module in the current directory
    modcfg

    # Preview the changes without touching any file
    modcfg --dry-run

    # Configure another checkout with a custom plan
    modcfg --root ../my_module --plan plan.toml

    # Dump the built-in plan as a starting point for a custom one
    modcfg --print-plan > plan.toml

STEPS:
    1. Check that 'application' and 'hal' exist below the root
    2. Delete application/main.cpp
    3. Update application/dji_sdk_app_info.h, hal/hal_uart.h and
       the two console logging blocks in application/application.cpp

Steps that were already done are skipped, so the tool is safe to re-run."#)]
pub struct Args {
    #[arg(long, default_value = ".", help = "Module root containing 'application' and 'hal'")]
    pub root: PathBuf,

    #[arg(long, value_name = "FILE", help = "TOML plan to use instead of the built-in one")]
    pub plan: Option<PathBuf>,

    #[arg(long, help = "Print the built-in plan as TOML and exit")]
    pub print_plan: bool,

    #[arg(long, help = "Report what would change without modifying files")]
    pub dry_run: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,
}
