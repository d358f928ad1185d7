// This is the entry point for the CLI application.
// It parses command-line arguments and delegates to the library.

use std::process;

use clap::Parser;
use swagger_contract_converter::cli::{Args, Command};
use swagger_contract_converter::{compare_json_files, convert_swagger_file, ContractConverter, SwaggerContractConverter};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// `compare --strict` found different structures. Kept apart from clap's usage error status 2.
const EXIT_MISMATCH: i32 = 3;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let exit_code = match run(args.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            1
        }
    };

    process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> swagger_contract_converter::Result<i32> {
    match command {
        Command::Convert { input, output_dir, format } => {
            let written = convert_swagger_file(&input, &output_dir, format)?;
            println!("{} contracts generated in {}", written.len(), output_dir.display());
            Ok(0)
        }
        Command::Compare { expected, actual, strict } => {
            let equal = compare_json_files(&expected, &actual)?;
            println!("{}", equal);
            if !equal {
                warn!(expected = %expected.display(), actual = %actual.display(), "JSON structures differ");
                if strict {
                    return Ok(EXIT_MISMATCH);
                }
            }
            Ok(0)
        }
        Command::Accepts { input } => {
            let accepted = SwaggerContractConverter::new().is_accepted(&input);
            println!("{}", accepted);
            Ok(if accepted { 0 } else { 1 })
        }
    }
}
