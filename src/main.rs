use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rpg_kit::data::{self, Category, DataFormat, DataLoadable};
use rpg_kit::leveling::{self, LevelingConfig, ReportMode, lint_curve};
use rpg_kit::{Character, Describable, Description, Leveling, Settings};

#[derive(Parser)]
#[command(name = "rpg_kit", version, about = "Inspect RPG data files and leveling curves")]
struct Cli {
    /// Settings file (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Override the data file format (json or toml)
    #[arg(long, global = true)]
    format: Option<DataFormat>,

    /// Override the directory data files are read from
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print one record
    Show { category: Category, id: u64 },

    /// Build a character from a record and grant it experience
    Level {
        category: Category,
        id: u64,
        #[arg(long, allow_hyphen_values = true)]
        exp: i64,
        /// Report remaining experience even without a level-up
        #[arg(long)]
        always_report: bool,
    },

    /// Print the threshold table of a growth curve
    Curve {
        #[arg(long, default_value_t = leveling::DEFAULT_BASE_EXP, allow_hyphen_values = true)]
        base_exp: i64,
        #[arg(long, default_value_t = leveling::DEFAULT_EXPONENT, allow_hyphen_values = true)]
        exponent: f64,
        #[arg(long, default_value_t = 10)]
        levels: u32,
    },

    /// Report suspicious leveling parameters in a record
    Check { category: Category, id: u64 },
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Settings(#[from] rpg_kit::settings::Error),
    #[error(transparent)]
    Data(#[from] data::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings, AppError> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::new(),
    };
    if let Some(format) = cli.format {
        settings = settings.with_format(format);
    }
    if let Some(dir) = &cli.data_dir {
        settings = settings.with_data_dir(dir);
    }
    Ok(settings)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = load_settings(&cli)?;

    match cli.command {
        Command::Show { category, id } => {
            let record = settings.get_by_id(category, id)?;
            println!("{}", Description::from_record(category.key(), &record));
        }
        Command::Level {
            category,
            id,
            exp,
            always_report,
        } => {
            let mut character = Character::load(&settings, category, id)?;
            let mode = if always_report {
                ReportMode::Always
            } else {
                ReportMode::SilentUnlessLeveled
            };
            let start = character.level();

            if let Some(report) = character.give_experience_with(exp, true, mode) {
                println!("{report}");
            }
            if character.level() > start {
                println!("{} reached level {}!", character.name, character.level());
            }
            println!("{}", character.describe());
        }
        Command::Curve {
            base_exp,
            exponent,
            levels,
        } => {
            let config = LevelingConfig::new()
                .with_base_exp(base_exp)
                .with_exponent(exponent);
            for warning in lint_curve(&config) {
                println!("warning: {warning}");
            }
            println!("{:>5}  {:>12}", "level", "next");
            for level in 1..=levels {
                println!(
                    "{:>5}  {:>12}",
                    level,
                    leveling::threshold_at(base_exp, exponent, level)
                );
            }
        }
        Command::Check { category, id } => {
            let record = settings.get_by_id(category, id)?;
            let config = LevelingConfig::from_record(&record).map_err(|source| {
                data::Error::Decode {
                    category,
                    id,
                    source,
                }
            })?;
            let warnings = lint_curve(&config);
            if warnings.is_empty() {
                println!("{category} {id}: ok");
            }
            for warning in warnings {
                println!("{category} {id}: {warning}");
            }
        }
    }

    Ok(())
}
