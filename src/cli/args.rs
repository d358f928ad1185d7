use clap::{ArgEnum, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "swagger-contract-converter",
    about = "Convert Swagger v2 specifications into contracts and compare JSON structures",
    version
)]
pub struct Args {
    /// Enable debug logging
    #[clap(long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a Swagger file into one contract file per operation
    Convert {
        /// Path to the Swagger specification file
        #[clap(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output directory for generated contracts
        #[clap(short, long, value_name = "DIRECTORY")]
        output_dir: PathBuf,

        /// Contract file format
        #[clap(short, long, arg_enum, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Compare the key structure of two JSON files
    Compare {
        /// JSON file with the expected structure
        #[clap(long, value_name = "FILE")]
        expected: PathBuf,

        /// JSON file with the actual structure
        #[clap(long, value_name = "FILE")]
        actual: PathBuf,

        /// Exit with status 3 when the structures differ
        #[clap(long)]
        strict: bool,
    },

    /// Check whether a file is a Swagger v2 specification
    Accepts {
        #[clap(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ArgEnum)]
pub enum OutputFormat {
    /// One YAML document per contract
    #[clap(alias = "yml")]
    Yaml,
    /// One pretty printed JSON document per contract
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_convert_command() {
        let args = Args::try_parse_from(["swagger-contract-converter", "convert", "-i", "api.yaml", "-o", "out", "--format", "json"]).unwrap();
        match args.command {
            Command::Convert { input, output_dir, format } => {
                assert_eq!(input, PathBuf::from("api.yaml"));
                assert_eq!(output_dir, PathBuf::from("out"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(!args.verbose);
    }

    #[test]
    fn verbose_is_global() {
        let args = Args::try_parse_from(["swagger-contract-converter", "compare", "--expected", "a.json", "--actual", "b.json", "--verbose"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(args.command, Command::Compare { strict: false, .. }));
    }

    #[test]
    fn format_defaults_to_yaml() {
        let args = Args::try_parse_from(["swagger-contract-converter", "convert", "-i", "api.yaml", "-o", "out"]).unwrap();
        assert!(matches!(args.command, Command::Convert { format: OutputFormat::Yaml, .. }));
    }

    #[test]
    fn format_accepts_yml_alias() {
        let args = Args::try_parse_from(["swagger-contract-converter", "convert", "-i", "api.yaml", "-o", "out", "-f", "yml"]).unwrap();
        assert!(matches!(args.command, Command::Convert { format: OutputFormat::Yaml, .. }));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = Args::try_parse_from(["swagger-contract-converter", "convert", "-i", "api.yaml", "-o", "out", "-f", "xml"]).unwrap_err();
        assert_eq!(err.kind(), clap::ErrorKind::InvalidValue);
    }
}
