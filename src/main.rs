use std::path::Path;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use console::style;
use log::LevelFilter;

use rust_passgen::cli::{handlers, menu, Args, CliCommand};
use rust_passgen::core::config::Config;
use rust_passgen::{CharacterClasses, GenerationResponse};

fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        config.log_level
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true);

    // RUST_LOG wins over LOG_LEVEL and --verbose
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();
}

fn main() -> anyhow::Result<()> {
    if Path::new(".env").exists() {
        dotenvy::dotenv().context("Failed to load .env file")?;
    }

    let args = Args::parse();
    let config = Config::load();
    init_logging(&config, args.verbose);

    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

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
            let result = match request {
                Some(json) => handlers::handle_request(&config, &json, seed),
                None => {
                    let classes = CharacterClasses {
                        lower,
                        upper,
                        digits,
                        symbols,
                    };
                    handlers::handle_generate(&config, length.as_deref(), classes, seed)
                }
            };

            if args.json {
                let failed = result.is_err();
                let response = GenerationResponse::from(result);
                println!("{}", serde_json::to_string_pretty(&response)?);
                if failed {
                    std::process::exit(1);
                }
            } else {
                match result {
                    Ok(password) => println!("{}", password),
                    Err(e) => {
                        log::debug!("Password generation failed: {:?}", e);
                        eprintln!("❌ {}", style(&e).red());
                        std::process::exit(1);
                    }
                }
            }
        }
        Some(CliCommand::Validate { length }) => match handlers::handle_validate(&config, &length) {
            Ok(length) => {
                if args.json {
                    println!("{}", serde_json::json!({ "valid": true, "length": length }));
                } else {
                    println!("✅ {} is a valid length", length);
                }
            }
            Err(e) => {
                if args.json {
                    println!("{}", serde_json::json!({ "valid": false, "error": e.to_string() }));
                } else {
                    eprintln!("❌ {}", style(&e).red());
                }
                std::process::exit(1);
            }
        },
        Some(CliCommand::Interactive) | None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received, closing the form");
                    should_exit.store(true, Ordering::SeqCst);
                    println!("\n👋 Goodbye!");
                    std::process::exit(0);
                })
                .context("Failed to set Ctrl+C handler")?;
            }

            menu::run_form(&config, should_exit)?;
        }
    }

    Ok(())
}
