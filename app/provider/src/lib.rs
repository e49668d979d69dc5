//! Provider crate: picks a generation backend per call and drives it.
//!
//! `Dispatcher` exposes the three questionnaire calls. Each call waits on
//! the shared `Throttle`, resolves a backend from the `CredentialStore`
//! by fixed priority, builds it into a `Provider`, and runs the request
//! through the `llm` call sequence. `Config` holds the per-backend
//! settings and the throttle interval.

pub mod config;
pub mod credentials;
mod dispatcher;
mod provider;
pub mod throttle;

pub use {
    config::Config,
    credentials::{CredentialStore, FileStore, MemoryStore, resolve},
    dispatcher::Dispatcher,
    provider::{Provider, build_provider},
    throttle::Throttle,
};
