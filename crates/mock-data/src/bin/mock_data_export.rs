//! Dataset export CLI for local development and page builds.
//!
//! This binary delegates to `mock_data::export_cli` for parsing and export
//! logic, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use mock_data::export_cli::{CliError, ParseOutcome, apply_export, parse_args, success_message};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let export = apply_export(&options)?;
            let message = success_message(&export, options.out_path());
            write_success(&message);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: mock-data-export --out <path> [options]\n",
        "\n",
        "Options:\n",
        "  --out <path>     Path for the dataset JSON file\n",
        "  --seed <seed>    RNG seed value (defaults to random)\n",
        "  --authors <n>    Author count (defaults to 20)\n",
        "  --medias <n>     Media count (defaults to 100)\n",
        "  --modules <n>    Module count (defaults to 10)\n",
        "  --pages <n>      Page count (defaults to 5)\n",
        "  --tags <n>       Tag count (defaults to 20)\n",
        "  -h, --help       Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_success(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
