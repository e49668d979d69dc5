//! Error taxonomy for provider calls.
//!
//! Every failure is caught at the adapter boundary and surfaced as one
//! [`Error`] naming the provider, the operation, and the [`Cause`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result alias for provider calls.
pub type Result<T> = std::result::Result<T, Error>;

/// The generation backends, in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Mistral La Plateforme (user key).
    Mistral,
    /// Stable Horde text generation (user key).
    Horde,
    /// OpenAI chat completions (user key, optional organization).
    #[serde(rename = "openai")]
    OpenAI,
    /// Google Gemini, the default hosted backend.
    Gemini,
}

impl ProviderKind {
    /// Every backend, highest priority first.
    pub const PRIORITY: [ProviderKind; 4] =
        [Self::Mistral, Self::Horde, Self::OpenAI, Self::Gemini];

    /// Short identifier for logs and config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mistral => "mistral",
            Self::Horde => "horde",
            Self::OpenAI => "openai",
            Self::Gemini => "gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mistral => "Mistral",
            Self::Horde => "Stable Horde",
            Self::OpenAI => "OpenAI",
            Self::Gemini => "Gemini",
        })
    }
}

/// The three generation calls of a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Eight branching questions with antithetical pairs.
    Branching,
    /// Follow-up questions derived from the path so far.
    Refinement,
    /// The final scenario.
    Scenario,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Branching => "branching choices",
            Self::Refinement => "refinement choices",
            Self::Scenario => "scenario generation",
        })
    }
}

/// Why a provider call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Cause {
    /// The request failed in flight or the provider answered with a
    /// non-success status.
    #[error("{}", transport_message(.status, .message))]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The provider answered, but not with what was asked for.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The selected backend has no credential to call with.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The caller passed a path of the wrong length.
    #[error("expected a path of {expected} steps, got {actual}")]
    InvalidPath { expected: usize, actual: usize },
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("HTTP {status}: {message}"),
        None => format!("request failed: {message}"),
    }
}

/// Discriminant of [`Cause`], for callers that branch on the failure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    MalformedResponse,
    Configuration,
    InvalidPath,
}

/// A failed provider call.
#[derive(Debug, Error)]
#[error("{provider} API error during {operation}: {cause}")]
pub struct Error {
    /// The backend that was called.
    pub provider: ProviderKind,
    /// The call that failed.
    pub operation: Operation,
    /// What went wrong.
    pub cause: Cause,
}

impl Error {
    /// Attach provider and operation to a cause.
    pub fn new(provider: ProviderKind, operation: Operation, cause: Cause) -> Self {
        Self {
            provider,
            operation,
            cause,
        }
    }

    /// The failure type.
    pub fn kind(&self) -> ErrorKind {
        match self.cause {
            Cause::Transport { .. } => ErrorKind::Transport,
            Cause::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Cause::Configuration(_) => ErrorKind::Configuration,
            Cause::InvalidPath { .. } => ErrorKind::InvalidPath,
        }
    }

    /// HTTP status of a transport failure, if the provider answered.
    pub fn status(&self) -> Option<u16> {
        match self.cause {
            Cause::Transport { status, .. } => status,
            _ => None,
        }
    }
}
