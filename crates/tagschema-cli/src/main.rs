//! tagschema CLI - JSON Schema generator for tagged Go structs
//!
//! Usually run from a `//go:generate tagschema --type=User $GOFILE` directive.
//! Writes `<type>.schema.json` and prints the file name on success.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

mod generate;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "tagschema")]
#[command(
    author,
    version,
    about = "Generate a JSON Schema from a tagged Go struct",
    long_about = None
)]
struct Cli {
    /// Struct type to generate a schema for
    #[arg(short = 't', long = "type", value_name = "NAME")]
    type_name: String,

    /// Go source file containing the type
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Directory for the generated file (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Path to a TOML generator config
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Rewrite the single-dash `-type`/`-type=NAME` spelling of Go-style
/// generate directives to `--type`; clap would read it as `-t ype=NAME`.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-type") => OsString::from("--type"),
            Some(s) if s.starts_with("-type=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) => {
            // Nothing more to report if stdout/stderr is gone
            let _ = err.print();
            // --help and --version are reported through the error path too
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init_logging(cli.verbose);
    tracing::debug!(?cli, "starting");

    let options = generate::GenerateOptions {
        type_name: cli.type_name,
        file: cli.file,
        output_dir: cli.output_dir,
        config: cli.config,
    };

    match generate::run(&options) {
        Ok(file_name) => {
            println!("Schema file generated successfully\n FileName: {file_name}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
