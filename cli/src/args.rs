use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use nutree_core::domain::common::{
    CatalogConfig, ClassifierConfig, DEFAULT_CLASSIFIER_BASE_URL, NutreeConfig, RetryConfig,
};

use crate::application::output::OutputFormat;

#[derive(Debug, Clone, Parser)]
#[command(name = "nutree", version, about = "Check a recipe against the diets you follow")]
pub struct Args {
    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ClassifierArgs {
    #[arg(long = "api-key", env = "SPOONACULAR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(
        long = "base-url",
        env = "SPOONACULAR_BASE_URL",
        default_value = DEFAULT_CLASSIFIER_BASE_URL
    )]
    pub base_url: String,

    #[arg(long = "timeout-secs", env = "CLASSIFIER_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,

    #[arg(long = "max-retries", env = "CLASSIFIER_MAX_RETRIES", default_value_t = 2)]
    pub max_retries: u32,

    #[arg(
        long = "initial-backoff-ms",
        env = "CLASSIFIER_INITIAL_BACKOFF_MS",
        default_value_t = 500
    )]
    pub initial_backoff_ms: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    /// JSON seed file for the diet catalog
    #[arg(long = "diets-file", env = "DIETS_FILE")]
    pub diets_file: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-level", env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Analyze a recipe and report the chosen diets it does not satisfy
    Analyze(AnalyzeArgs),

    /// List the diets that can be selected
    Diets {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, clap::Args)]
pub struct AnalyzeArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub servings: String,

    /// Comma separated ingredient list
    #[arg(long)]
    pub ingredients: String,

    #[arg(long)]
    pub instructions: Option<String>,

    /// Diet name to check against; repeat for several
    #[arg(long = "diet", conflicts_with = "diet_ids")]
    pub diets: Vec<String>,

    /// Catalog diet id to check against; repeat or comma separate
    #[arg(long = "diet-id", value_delimiter = ',')]
    pub diet_ids: Vec<i32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl From<Args> for NutreeConfig {
    fn from(args: Args) -> Self {
        NutreeConfig {
            classifier: ClassifierConfig {
                base_url: args.classifier.base_url,
                timeout: Duration::from_secs(args.classifier.timeout_secs),
                retry: RetryConfig {
                    max_retries: args.classifier.max_retries,
                    initial_backoff: Duration::from_millis(args.classifier.initial_backoff_ms),
                },
            },
            catalog: CatalogConfig {
                diets_file: args.catalog.diets_file,
            },
        }
    }
}
