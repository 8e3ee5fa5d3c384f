// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length (validated against the configured bounds)
        #[arg(long, short, allow_hyphen_values = true)]
        length: Option<String>,

        /// Include lowercase letters
        #[arg(long)]
        lower: bool,

        /// Include uppercase letters
        #[arg(long)]
        upper: bool,

        /// Include numbers
        #[arg(long)]
        digits: bool,

        /// Include symbols
        #[arg(long)]
        symbols: bool,

        /// Seed for a reproducible password
        #[arg(long)]
        seed: Option<u64>,

        /// Read the request as JSON, e.g. '{"length": 8, "useLower": true}'
        #[arg(
            long,
            conflicts_with_all = ["length", "lower", "upper", "digits", "symbols"]
        )]
        request: Option<String>,
    },

    /// Check a password length without generating
    Validate {
        /// Raw length value
        #[arg(required = true, allow_hyphen_values = true)]
        length: String,
    },

    /// Fill in the password form interactively
    Interactive,
}
