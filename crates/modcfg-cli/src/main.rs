mod args;
mod console;

use anyhow::Result;
use args::Args;
use clap::Parser;
use console::{Console, ConsoleReporter};
use log::{debug, info};
use modcfg_core::{load_plan, run_plan, Plan};
use std::process;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let console = Console::new(!args.no_color && atty::is(atty::Stream::Stdout));

    if args.print_plan {
        console.raw(&Plan::builtin().to_toml()?);
        return Ok(());
    }

    match &args.plan {
        Some(path) => info!("Plan file requested: {:?}", path),
        None => info!("No plan file given, using the built-in plan"),
    }
    let plan = match load_plan(args.plan.as_deref()) {
        Ok(p) => p,
        Err(e) => {
            console.error(&format!("{:#}", e));
            exit_failure("plan could not be loaded");
        }
    };

    console.line("--- Module configuration ---");
    console.line("1. Checking environment...");

    let mut reporter = ConsoleReporter::new(console, args.dry_run);
    let report = match run_plan(&args.root, &plan, args.dry_run, &mut reporter) {
        Ok(report) => report,
        Err(errors) => {
            console.error("Required directories are missing:");
            for err in errors {
                console.line(&err);
            }
            console.line("      Run this tool from the root of the module created from the template.");
            exit_failure("environment check failed");
        }
    };

    console.line("\n-----------------------------------------");
    console.line(&format!("Total steps: {}", report.steps.len()));
    console.line(&format!("Skipped:     {}", report.skipped_count()));
    console.line(&format!("Failed:      {}", report.failed_count()));

    if !report.succeeded() {
        console.failed("Some configuration steps failed. See the errors above.");
        exit_failure("one or more steps failed");
    }

    console.done(completion_message(args.dry_run));
    if !args.dry_run {
        console.line("Clean the build cache and rebuild the project.");
    }
    debug!("Exiting with status 0");
    Ok(())
}

fn completion_message(dry_run: bool) -> &'static str {
    if dry_run {
        "Dry run finished, no files modified."
    } else {
        "All configuration steps completed."
    }
}

fn exit_failure(reason: &str) -> ! {
    debug!("Exiting with status 1: {}", reason);
    process::exit(1);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
