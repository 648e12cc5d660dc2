use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use credit_score::config::{self, Config};
use credit_score::scoring::{self, WeightKey};
use credit_score::{applicant, output, telemetry};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_REJECTED: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an applicant record (JSON or YAML)
    Score {
        /// Path to the applicant file
        file: PathBuf,

        /// Date used to derive the applicant's age (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        as_of: Option<NaiveDate>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Compute the fixed monthly installment for a loan
    Installment {
        /// Amount borrowed
        #[arg(long)]
        amount: f64,

        /// Term in months
        #[arg(long)]
        term: u32,

        /// Annual nominal rate in percent
        #[arg(long, default_value_t = 0.0)]
        rate: f64,
    },
    /// Show or change scoring weights
    Weights {
        #[command(subcommand)]
        action: Option<WeightsAction>,
    },
}

#[derive(Subcommand, Debug)]
enum WeightsAction {
    /// Print effective weights (default); overrides are marked with *
    Show,
    /// Override a single weight
    Set {
        /// Weight name, e.g. ageBonus or age_bonus
        key: WeightKey,
        value: f64,
    },
    /// Drop all overrides and return to the default weights
    Reset,
}

#[derive(Parser, Debug)]
#[command(name = "credit-score")]
#[command(
    about = "Retail credit scoring with a capacity gate and weighted rules",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/credit-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let config_path = match cli.config.clone().map_or_else(config::get_config_path, Ok) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let config = match config::load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(e) = telemetry::init(config.log_level.as_deref(), cli.verbose) {
        eprintln!("{:#}", e);
        std::process::exit(EXIT_CONFIG);
    }
    config::warn_ignored_weights(&config);
    tracing::debug!(
        path = %config_path.display(),
        overrides = config.weights.len(),
        "config loaded"
    );

    let code = match cli.command {
        Commands::Score { file, as_of, format } => run_score(&config, &file, as_of, format),
        Commands::Installment { amount, term, rate } => run_installment(amount, term, rate),
        Commands::Weights { action } => {
            run_weights(config, &config_path, action.unwrap_or(WeightsAction::Show))
        }
    };

    std::process::exit(code);
}

fn run_score(config: &Config, file: &Path, as_of: Option<NaiveDate>, format: Format) -> i32 {
    // Validate weights at startup
    let weights = config.effective_weights();
    if let Err(errors) = scoring::validate_weights(&weights) {
        eprintln!("Weight config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return EXIT_CONFIG;
    }

    let record = match applicant::load_applicant(file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            return EXIT_INPUT;
        }
    };

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    if let Err(errors) = applicant::validate_applicant(&record, as_of) {
        eprintln!("Applicant errors in {}:", file.display());
        for error in errors {
            eprintln!("  - {}", error);
        }
        return EXIT_INPUT;
    }

    let result = scoring::score(&record, &weights, as_of);

    match format {
        Format::Text => {
            let use_colors = output::should_use_colors();
            println!("{}", output::format_result(&result, &record, as_of, use_colors));
        }
        Format::Json => match output::format_json(&result, &record, as_of) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                return EXIT_INPUT;
            }
        },
    }

    if result.is_accepted() {
        EXIT_SUCCESS
    } else {
        EXIT_REJECTED
    }
}

fn run_installment(amount: f64, term: u32, rate: f64) -> i32 {
    let mut errors = Vec::new();
    if !amount.is_finite() || amount <= 0.0 {
        errors.push(format!("--amount: must be positive (got {})", amount));
    }
    if term == 0 {
        errors.push("--term: must be at least 1 month".to_string());
    }
    if !rate.is_finite() || rate < 0.0 {
        errors.push(format!("--rate: must be non-negative (got {})", rate));
    }
    if !errors.is_empty() {
        for error in errors {
            eprintln!("{}", error);
        }
        return EXIT_INPUT;
    }

    let summary = scoring::repayment_summary(amount, term, rate);
    println!("{}", output::format_repayment(amount, term, &summary));
    EXIT_SUCCESS
}

fn run_weights(mut config: Config, config_path: &Path, action: WeightsAction) -> i32 {
    match action {
        WeightsAction::Show => {
            let use_colors = output::should_use_colors();
            println!(
                "{}",
                output::format_weights(&config.effective_weights(), &config.weights, use_colors)
            );
            return EXIT_SUCCESS;
        }
        WeightsAction::Set { key, value } => {
            let candidate = config.effective_weights().with(key, value);
            if let Err(errors) = scoring::validate_weights(&candidate) {
                for error in errors {
                    eprintln!("{}", error);
                }
                return EXIT_INPUT;
            }
            config.weights.set(key, value);
        }
        WeightsAction::Reset => {
            config.weights = Default::default();
        }
    }

    if let Err(e) = config::save_config(config_path, &config) {
        eprintln!("Config error: {:#}", e);
        return EXIT_CONFIG;
    }
    tracing::info!(
        path = %config_path.display(),
        overrides = config.weights.len(),
        "weights saved"
    );
    println!("Saved weights to {}", config_path.display());
    EXIT_SUCCESS
}
