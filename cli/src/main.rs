use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use nutree_core::{
    application::create_service,
    domain::{common::NutreeConfig, compliance::value_objects::ApiKey},
};
use tracing::{debug, error};

use crate::application::{
    commands::{analyze::analyze, diets::list_diets},
    exit_code_for,
    logging::init_logger,
};
use crate::args::{Args, Command};

mod application;
mod args;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let args = Args::parse();
    init_logger(&args.log);

    match run(args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}

async fn run(args: Args) -> anyhow::Result<String> {
    let command = args.command.clone();
    let api_key = args.classifier.api_key.clone();

    let config = NutreeConfig::from(args);
    debug!("Configuration: {:?}", config);

    let service = create_service(config).await?;

    match command {
        Command::Analyze(analyze_args) => {
            let api_key = api_key
                .filter(|key| !key.trim().is_empty())
                .map(ApiKey::new)
                .context("an API key is required: pass --api-key or set SPOONACULAR_API_KEY")?;

            analyze(&service, api_key, analyze_args).await
        }
        Command::Diets { format } => list_diets(&service, format).await,
    }
}
