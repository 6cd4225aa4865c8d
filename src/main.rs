//! Candidate flagger: duplicate-candidate detection for recruiting platforms

mod cli;
mod config;
mod error;
mod flagging;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, NormalizeTarget};
use config::Config;
use error::{CandidateFlaggerError, Result};
use flagging::detector::{detect_flagged_candidates, get_flag_info_for_candidates};
use flagging::normalizer::{normalize_phone, normalize_url};
use flagging::reporter::format_flag_reason;
use input::loader::RecordLoader;
use log::{error, info};
use output::formatter::ReportGenerator;
use output::report::FlagReport;
use std::path::PathBuf;
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Detect {
            records,
            output,
            save,
            detailed,
        } => {
            info!("Starting duplicate-candidate detection");

            let records_path = resolve_records_path(records, &config)?;
            cli::validate_file_extension(&records_path, &["json", "jsonl", "ndjson"])
                .map_err(|e| CandidateFlaggerError::InvalidInput(format!("Records file: {}", e)))?;

            let output_format = match output {
                Some(format) => {
                    cli::parse_output_format(&format).map_err(CandidateFlaggerError::InvalidInput)?
                }
                None => config.output.format,
            };

            let all_records = RecordLoader::load(&records_path)?;
            let flags = detect_flagged_candidates(&all_records);
            let report = FlagReport::build(&all_records, &flags);

            let generator = ReportGenerator::new(
                config.output.color_output,
                detailed || config.output.detailed,
            );
            let rendered = generator.format_as(&report, output_format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                generator.save_to_file(&rendered, &save_path)?;
                println!("💾 Report saved to {}", save_path.display());
            }
        }

        Commands::Inspect { records, ids } => {
            let records_path = resolve_records_path(records, &config)?;
            let all_records = RecordLoader::load(&records_path)?;

            // Full-population scan: collisions can involve candidates outside
            // the requested id set.
            let flags = get_flag_info_for_candidates(&ids, &all_records);

            for id in &ids {
                match flags.get(id) {
                    Some(entry) => {
                        println!("#{}: {}", id, format_flag_reason(&entry.reasons));
                        for reason in &entry.reasons {
                            if let Some(others) = entry.flagged_with.get(reason) {
                                let others: Vec<String> =
                                    others.iter().map(|other| format!("#{}", other)).collect();
                                println!("    {} shared with {}", reason.label(), others.join(", "));
                            }
                        }
                    }
                    None => println!("#{}: not flagged", id),
                }
            }
        }

        Commands::Normalize { target } => match target {
            NormalizeTarget::Url { value } => match normalize_url(Some(&value)) {
                Some(key) => println!("{}", key),
                None => println!("(no usable value)"),
            },
            NormalizeTarget::Phone { value } => match normalize_phone(Some(&value)) {
                Some(key) => println!("{}", key),
                None => println!("(no usable value)"),
            },
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                match &config.input.default_records_path {
                    Some(path) => println!("Default records file: {}", path.display()),
                    None => println!("Default records file: (none)"),
                }
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Pick the records file from the CLI flag, falling back to the configured default
fn resolve_records_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    flag.or_else(|| config.input.default_records_path.clone())
        .ok_or_else(|| {
            CandidateFlaggerError::InvalidInput(
                "no records file given (--records) and no default configured".to_string(),
            )
        })
}
