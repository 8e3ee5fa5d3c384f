// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(name = "passgen", author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Command to execute (defaults to the interactive form)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let args = Args::try_parse_from(["passgen"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn parses_generate_flags() {
        let args = Args::try_parse_from([
            "passgen", "generate", "--length", "12", "--lower", "--digits", "--json",
        ])
        .unwrap();
        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate {
                length,
                lower,
                upper,
                digits,
                symbols,
                seed,
                request,
            }) => {
                assert_eq!(length.as_deref(), Some("12"));
                assert!(lower && digits);
                assert!(!upper && !symbols);
                assert_eq!(seed, None);
                assert_eq!(request, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn request_conflicts_with_flags() {
        let args = Args::try_parse_from([
            "passgen",
            "generate",
            "--request",
            r#"{"length": 8, "useLower": true}"#,
        ])
        .unwrap();
        match args.command {
            Some(CliCommand::Generate { request, .. }) => {
                assert_eq!(request.as_deref(), Some(r#"{"length": 8, "useLower": true}"#));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let err = Args::try_parse_from([
            "passgen", "generate", "--request", "{}", "--length", "8",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn length_is_kept_raw_for_validation() {
        let args = Args::try_parse_from(["passgen", "validate", "8.5"]).unwrap();
        match args.command {
            Some(CliCommand::Validate { length }) => assert_eq!(length, "8.5"),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
