//! # Panel Counter CLI
//!
//! Terminal front end for panel_core.
//!
//! ```text
//! panel_cli run fixtures/test_cases.json
//! panel_cli count 1 2 3 5
//! ```
//!
//! Exit status is 0 when everything passed, 1 when any test case failed and
//! 2 when the test case file could not be loaded.

mod cli;
mod logging;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use panel_core::calculations::panels::{calculate, PanelInput};
use panel_core::geometry::{PanelSpec, RoofSpec};
use panel_core::harness::{run_suite, SuiteReport};
use panel_core::test_cases::load_test_cases;
use panel_core::CalcError;

use cli::{Cli, Command};

const EXIT_SUCCESS: u8 = 0;
const EXIT_CASES_FAILED: u8 = 1;
const EXIT_LOAD_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let status = match cli.command {
        Command::Run { path, json } => run_file(&path, json),
        Command::Count {
            panel_w,
            panel_h,
            roof_w,
            roof_h,
            json,
        } => {
            let panel = PanelSpec::new(panel_w, panel_h);
            let roof = RoofSpec::new(roof_w, roof_h);
            count(&PanelInput::new("cli", panel, roof), json)
        }
    };
    ExitCode::from(status)
}

/// Exit status for a finished suite.
fn exit_status(report: &SuiteReport) -> u8 {
    if report.all_passed() {
        EXIT_SUCCESS
    } else {
        EXIT_CASES_FAILED
    }
}

fn run_file(path: &Path, json: bool) -> u8 {
    debug!(path = %path.display(), json, "running test case file");

    let cases = match load_test_cases(path) {
        Ok(cases) => cases,
        Err(e) => {
            report_error(&e);
            return EXIT_LOAD_ERROR;
        }
    };

    let report = run_suite(&cases);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                report_error(&CalcError::serialization(e.to_string()));
                return EXIT_LOAD_ERROR;
            }
        }
    } else {
        println!("Running tests: {}", path.display());
        println!("-------------------");
        println!();
        println!("{}", report);
    }

    exit_status(&report)
}

fn count(input: &PanelInput, json: bool) -> u8 {
    let result = calculate(input);

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                report_error(&CalcError::serialization(e.to_string()));
                return EXIT_CASES_FAILED;
            }
        }
        return EXIT_SUCCESS;
    }

    println!("Panels: {}, Roof: {}", input.panel, input.roof);
    match result.layout {
        Some(layout) => println!("Fits: {} ({})", result.panel_count, layout.description()),
        None => println!("Fits: 0"),
    }
    EXIT_SUCCESS
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
