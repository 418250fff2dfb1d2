use crate::domain::models::ViewModel;
use crate::services::error::{ErrorKind, LookupError};

/// Lifecycle of the current lookup. One state at a time; consumers never
/// see stale data next to `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading { user_id: String },
    Ready(ViewModel),
    Failed { kind: ErrorKind, message: String },
}

/// Proof of which lookup an outcome belongs to. Issued by [`Dashboard::begin`]
/// and checked at [`Dashboard::apply`]; an outdated ticket is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket {
    seq: u64,
}

/// Owner of the single current-lookup state. The sequence number makes the
/// most recently started lookup the only one whose outcome can commit, so a
/// slow earlier lookup can never overwrite a later one.
#[derive(Debug, Default)]
pub struct Dashboard {
    state: LookupState,
    last_issued: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Start a lookup: prior data or error is discarded immediately.
    pub fn begin(&mut self, user_id: &str) -> LookupTicket {
        self.last_issued += 1;
        self.state = LookupState::Loading {
            user_id: user_id.to_string(),
        };
        LookupTicket {
            seq: self.last_issued,
        }
    }

    /// Commit an outcome if its ticket is still the most recent one.
    /// Returns whether the outcome was applied.
    pub fn apply(&mut self, ticket: LookupTicket, outcome: Result<ViewModel, LookupError>) -> bool {
        if ticket.seq != self.last_issued {
            log::debug!(
                "discarding stale lookup outcome (ticket {} superseded by {})",
                ticket.seq,
                self.last_issued
            );
            return false;
        }
        self.state = match outcome {
            Ok(view) => LookupState::Ready(view),
            Err(err) => LookupState::Failed {
                kind: err.kind,
                message: err.message,
            },
        };
        true
    }

    /// The retry affordance: clears a failed state without re-running the
    /// lookup. Returns whether there was an error to clear.
    pub fn clear_error(&mut self) -> bool {
        if matches!(self.state, LookupState::Failed { .. }) {
            self.state = LookupState::Idle;
            return true;
        }
        false
    }
}
