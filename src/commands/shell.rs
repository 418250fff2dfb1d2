use crate::services::api::ApiClient;
use crate::services::dashboard::{Dashboard, LookupState};
use crate::services::lookup::run_lookup;
use crate::services::output::{print_failure, print_view};
use std::io::{BufRead, Write};
use std::process::ExitCode;

/// Interactive prompt over one persistent dashboard. A non-empty line is a
/// lookup, `:random` samples an id from the service, an empty line clears a
/// failed state, `:q`/`:quit` exits.
pub fn handle_shell(json: bool, api: &ApiClient) -> anyhow::Result<ExitCode> {
    let mut dashboard = Dashboard::new();
    let stdin = std::io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            ":q" | ":quit" => break,
            "" => {
                if dashboard.clear_error() {
                    println!("error cleared");
                }
            }
            ":random" => match api.random_user_id() {
                Ok(user_id) => lookup_and_render(json, api, &mut dashboard, &user_id)?,
                Err(err) => log::warn!("failed to fetch a random user id: {}", err),
            },
            user_id => lookup_and_render(json, api, &mut dashboard, user_id)?,
        }
        prompt()?;
    }
    Ok(ExitCode::SUCCESS)
}

fn prompt() -> anyhow::Result<()> {
    print!("churnlens> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn lookup_and_render(
    json: bool,
    api: &ApiClient,
    dashboard: &mut Dashboard,
    user_id: &str,
) -> anyhow::Result<()> {
    let ticket = dashboard.begin(user_id);
    let outcome = run_lookup(api, user_id);
    if !dashboard.apply(ticket, outcome) {
        return Ok(());
    }
    match dashboard.state() {
        LookupState::Ready(view) => print_view(json, view)?,
        LookupState::Failed { kind, message } => {
            print_failure(json, *kind, message)?;
            println!("(press enter to clear, or try another user id)");
        }
        LookupState::Idle | LookupState::Loading { .. } => {}
    }
    Ok(())
}
