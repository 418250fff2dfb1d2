//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `api.rs` — blocking HTTP client for the prediction service endpoints.
//! - `lookup.rs` — one-lookup orchestration: sequencing + short-circuit.
//! - `dashboard.rs` — current-lookup state machine with staleness tickets.
//! - `view.rs` — merge of the three raw payloads into the view model.
//! - `risk.rs` — pure score-to-tier classifiers (label and gauge fill).
//! - `error.rs` — failure taxonomy and user-facing messages.
//! - `config.rs` — optional config file + address/timeout resolution.
//! - `output.rs` — JSON/text output helpers and dashboard rendering.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod lookup;
pub mod output;
pub mod risk;
pub mod view;
