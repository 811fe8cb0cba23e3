//! gwcosmology-names - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gwcosmology_names::{
    cli::{Args, Command},
    config::{validate_config, Config},
    error::{exit_codes, Result},
    fs::{distance_name, galaxy_name, h0_files_dict_name, h0_name, h0_plot_name, ArtifactNames},
    output::{name_json, print_artifact_names, print_error, print_info, print_name, print_warning},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging on stderr; stdout carries only names
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = match Config::load_if_exists(&args.config)? {
        Some(config) => config,
        None => {
            print_warning(&format!(
                "Configuration file not found: {}",
                args.config.display()
            ));
            print_info("Using default configuration with CLI arguments");
            Config::default()
        }
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;
    tracing::debug!("Web root: {}", config.public_html_dir().display());

    match &args.command {
        Command::Distance => emit(&args, distance_name()),
        Command::Galaxy { graceid, galaxy } => {
            emit(&args, &galaxy_name(graceid, galaxy))
        }
        Command::H0 {
            graceid,
            skymap,
            galaxy,
            pe_samples,
        } => {
            let path = h0_name(&config, graceid, skymap, galaxy, *pe_samples);
            emit(&args, &path.display().to_string())
        }
        Command::Plot {
            graceid,
            skymap,
            galaxy,
        } => emit(&args, &h0_plot_name(graceid, skymap, galaxy)),
        Command::Manifest { private } => {
            let path = h0_files_dict_name(&config, *private);
            emit(&args, &path.display().to_string())
        }
        Command::All {
            graceid,
            skymap,
            galaxy,
        } => {
            let names = ArtifactNames::new(&config, graceid, skymap, galaxy);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                print_artifact_names(&names);
            }
            Ok(())
        }
    }
}

/// Print a single name, plain or as a one-key JSON object.
fn emit(args: &Args, name: &str) -> Result<()> {
    if args.json {
        println!("{}", name_json(args.command.output_key(), name));
    } else {
        print_name(name);
    }
    Ok(())
}
