use crate::services::api::ApiClient;
use crate::services::dashboard::{Dashboard, LookupState};
use crate::services::lookup::run_lookup;
use crate::services::output::{print_failure, print_view};
use std::process::ExitCode;

pub fn handle_lookup(json: bool, api: &ApiClient, user_id: &str) -> anyhow::Result<ExitCode> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        anyhow::bail!("user id must not be empty");
    }

    let mut dashboard = Dashboard::new();
    let ticket = dashboard.begin(user_id);
    let outcome = run_lookup(api, user_id);
    dashboard.apply(ticket, outcome);

    match dashboard.state() {
        LookupState::Ready(view) => {
            print_view(json, view)?;
            Ok(ExitCode::SUCCESS)
        }
        LookupState::Failed { kind, message } => {
            print_failure(json, *kind, message)?;
            Ok(ExitCode::FAILURE)
        }
        LookupState::Idle | LookupState::Loading { .. } => {
            unreachable!("a one-shot lookup always applies its own outcome")
        }
    }
}

/// Best-effort entry point: a failed random-id fetch is logged and triggers
/// no lookup.
pub fn handle_random(json: bool, api: &ApiClient) -> anyhow::Result<ExitCode> {
    match api.random_user_id() {
        Ok(user_id) => handle_lookup(json, api, &user_id),
        Err(err) => {
            log::warn!("failed to fetch a random user id: {}", err);
            Ok(ExitCode::SUCCESS)
        }
    }
}
