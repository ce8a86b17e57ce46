use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// sfscope - validate SF section containers and list their sections
#[derive(Debug, Parser)]
#[command(name = "sfscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of the line report.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate an SF file and print its version and section table.
    Parse {
        /// Path to the SF file. The form `path=<FILE>` is accepted as well.
        #[arg(value_name = "FILE", value_parser = parse_path_arg)]
        path: PathBuf,
    },
}

/// Accept both `<FILE>` and the `path=<FILE>` spelling.
fn parse_path_arg(arg: &str) -> Result<PathBuf, String> {
    let path = arg.strip_prefix("path=").unwrap_or(arg);
    if path.is_empty() {
        return Err("file path not specified".to_string());
    }
    Ok(PathBuf::from(path))
}
