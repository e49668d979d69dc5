//! Shared interface for the worldtree generation backends.
//!
//! Holds the questionnaire data model, the prompt and schema text every
//! backend sends, the [`Adapter`] contract each provider crate implements,
//! the HTTP [`Transport`], and the error taxonomy. The concrete providers
//! (Gemini, Mistral, Stable Horde, OpenAI) live in sibling crates; the
//! dispatcher that picks between them lives in `worldtree-provider`.

pub use {
    adapter::Adapter,
    call::{branching, refinement, scenario},
    error::{Cause, Error, ErrorKind, Operation, ProviderKind, Result},
    http::{HttpTransport, ProviderRequest, ProviderResponse, Transport},
    path::{BRANCHING_STEPS, Bud, BudError, PATH_LENGTH, PathHistoryItem},
    prompt::{Task, Wording},
    question::{
        BRANCHING_OPTIONS, BranchingQuestion, ChoiceOption, REFINEMENT_OPTIONS, RefinementQuestion,
    },
    scenario::{NO_SUMMARY, Scenario},
};
pub use reqwest::{self, Client};

mod adapter;
mod call;
pub mod chat;
mod error;
pub mod http;
mod normalize;
mod path;
pub mod prompt;
mod question;
mod scenario;
pub mod schema;
