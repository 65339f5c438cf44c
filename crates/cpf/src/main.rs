use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cpf::{logging, CpfFormat, CpfToolkit, ToolkitConfig};

/// Generate and validate synthetic CPF identifiers.
#[derive(Debug, Parser)]
#[command(name = "cpf", version, about)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print synthetic, checksum-valid identifiers.
    Generate {
        /// How many to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Print bare digits instead of DDD.DDD.DDD-DD.
        #[arg(long)]
        raw: bool,
    },
    /// Check one or more identifiers.
    Validate {
        /// Identifiers to check. Quote inputs that contain spaces.
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Command::Generate { count, raw } => {
            let config = ToolkitConfig {
                format: if raw { CpfFormat::Raw } else { CpfFormat::Formatted },
                ..Default::default()
            };
            let mut toolkit = CpfToolkit::random(config);

            for cpf in toolkit.generate_batch(count)? {
                println!("{cpf}");
            }
            eprintln!("note: these identifiers are fictitious and must not be used as real CPFs");
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { inputs } => {
            let toolkit = CpfToolkit::random(ToolkitConfig::default());
            let mut all_valid = true;

            for input in &inputs {
                match toolkit.check(input) {
                    Ok(cpf) => println!("{input:?}: valid ({cpf})"),
                    Err(e) => {
                        all_valid = false;
                        println!("{input:?}: invalid: {e}");
                    }
                }
            }

            tracing::info!(checked = inputs.len(), all_valid, "validation finished");
            Ok(if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
