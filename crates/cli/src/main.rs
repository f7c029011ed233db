use clap::{Args, Parser, Subcommand};
use curie_core::{
    config::{data_dir_from_env_value, resolve_data_dir},
    CoreConfig, ModifierVector, PathwayRequest, PathwayService, SUPPORTED_DISEASE,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "curie")]
#[command(about = "Curie HFpEF clinical decision support CLI")]
struct Cli {
    /// Reference data directory (defaults to CURIE_DATA_DIR, then ./data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a management pathway for the given modifiers
    Pathway {
        /// Disease selector
        #[arg(long, default_value = SUPPORTED_DISEASE)]
        disease: String,
        #[command(flatten)]
        modifiers: ModifierFlags,
    },
    /// List all trial records
    Trials,
    /// Print the guideline document
    Guidelines,
    /// Print guideline version and metadata
    Metadata,
}

#[derive(Args)]
struct ModifierFlags {
    /// Severe CKD (eGFR < 30)
    #[arg(long)]
    ckd: bool,
    /// Hypotension (SBP < 100)
    #[arg(long)]
    hypotension: bool,
    /// Atrial fibrillation
    #[arg(long)]
    afib: bool,
    #[arg(long)]
    diabetes: bool,
    /// Advanced frailty
    #[arg(long)]
    frailty: bool,
    #[arg(long)]
    obesity: bool,
    #[arg(long)]
    uncontrolled_hypertension: bool,
}

impl From<ModifierFlags> for ModifierVector {
    fn from(flags: ModifierFlags) -> Self {
        Self {
            ckd: flags.ckd,
            hypotension: flags.hypotension,
            afib: flags.afib,
            diabetes: flags.diabetes,
            frailty: flags.frailty,
            obesity: flags.obesity,
            uncontrolled_hypertension: flags.uncontrolled_hypertension,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let override_dir = cli
        .data_dir
        .or_else(|| data_dir_from_env_value(std::env::var("CURIE_DATA_DIR").ok()));
    let cfg = CoreConfig::new(resolve_data_dir(override_dir)?);
    let service = PathwayService::from_config(&cfg);

    match cli.command {
        Some(Commands::Pathway { disease, modifiers }) => {
            let request = PathwayRequest {
                disease,
                modifiers: modifiers.into(),
            };
            match service.pathway(&request) {
                Ok(pathway) => println!("{}", serde_json::to_string_pretty(&pathway)?),
                Err(e) => eprintln!("Error generating pathway: {}", e),
            }
        }
        Some(Commands::Trials) => match service.trials() {
            Ok(trials) if trials.is_empty() => println!("No trials found."),
            Ok(trials) => println!("{}", serde_json::to_string_pretty(&trials)?),
            Err(e) => eprintln!("Error loading trials: {}", e),
        },
        Some(Commands::Guidelines) => match service.guidelines() {
            Ok(guidelines) => println!("{}", serde_json::to_string_pretty(&guidelines)?),
            Err(e) => eprintln!("Error loading guidelines: {}", e),
        },
        Some(Commands::Metadata) => {
            println!("{}", serde_json::to_string_pretty(&service.metadata())?);
        }
        None => {
            println!("Use 'curie --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn pathway_flags_map_onto_modifiers() {
        let cli = Cli::parse_from([
            "curie",
            "pathway",
            "--afib",
            "--uncontrolled-hypertension",
        ]);
        match cli.command {
            Some(Commands::Pathway { disease, modifiers }) => {
                assert_eq!(disease, "HFpEF");
                let modifiers = ModifierVector::from(modifiers);
                assert!(modifiers.afib);
                assert!(modifiers.uncontrolled_hypertension);
                assert!(!modifiers.ckd);
            }
            _ => panic!("expected pathway command"),
        }
    }
}
