use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use domain::models::{ErrorBody, JsonErr};
use services::api::ApiClient;
use services::config::{load_config, resolve_api_base, resolve_timeout_ms};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            report_error(cli.json, &err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config()?;
    let api = ApiClient::new(
        &resolve_api_base(cli.api.as_deref(), &config),
        resolve_timeout_ms(&config),
    )?;

    match &cli.command {
        Commands::Lookup { user_id } => commands::handle_lookup(cli.json, &api, user_id),
        Commands::Random => commands::handle_random(cli.json, &api),
        Commands::Shell => commands::handle_shell(cli.json, &api),
    }
}

fn report_error(json: bool, err: &anyhow::Error) {
    if json {
        let envelope = JsonErr {
            ok: false,
            error: ErrorBody {
                code: "UNKNOWN".to_string(),
                message: format!("{:#}", err),
            },
        };
        match serde_json::to_string_pretty(&envelope) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("error: {:#}", err),
        }
    } else {
        eprintln!("error: {:#}", err);
    }
}
