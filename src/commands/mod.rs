//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — one-shot `lookup` and `random` commands.
//! - `shell.rs` — interactive prompt with persistent dashboard state.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod shell;

pub use runtime::{handle_lookup, handle_random};
pub use shell::handle_shell;
