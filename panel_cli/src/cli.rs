//! Command-line argument parsing
//!
//! Supports:
//! - Running a JSON test case file through the calculation
//! - Counting panels for a single panel/roof pair

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Count whole solar panels that fit on a rectangular roof
#[derive(Parser, Debug)]
#[command(
    name = "panel_cli",
    version,
    about = "Count whole solar panels that fit on a rectangular roof"
)]
pub struct Cli {
    /// Log calculation details to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run every case in a JSON test case file and report pass/fail
    Run {
        /// Path to the test case file
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Count panels for one panel size and one roof size
    Count {
        #[arg(value_name = "PANEL_W", allow_negative_numbers = true)]
        panel_w: i32,

        #[arg(value_name = "PANEL_H", allow_negative_numbers = true)]
        panel_h: i32,

        #[arg(value_name = "ROOF_W", allow_negative_numbers = true)]
        roof_w: i32,

        #[arg(value_name = "ROOF_H", allow_negative_numbers = true)]
        roof_h: i32,

        /// Print the full result, including both layouts, as JSON
        #[arg(long)]
        json: bool,
    },
}
