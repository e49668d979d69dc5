//! Provider implementation
//!
//! Unified `Provider` enum with enum dispatch over the concrete backends.
//! `build_provider()` reads the credentials for the resolved backend and
//! applies the per-backend config.

use crate::{
    Config, CredentialStore,
    credentials::{MISTRAL_API_KEY, OPENAI_API_KEY, OPENAI_ORGANIZATION_ID, STABLEHORDE_API_KEY},
};
use gemini::Gemini;
use horde::Horde;
use llm::{Adapter, Cause, ProviderKind, Task, Wording, reqwest::header::HeaderMap};
use mistral::Mistral;
use openai::OpenAI;
use serde_json::Value;

/// Unified backend enum.
///
/// The dispatcher builds the variant chosen by [`crate::resolve`] for
/// each call and drives it through the [`Adapter`] contract.
#[derive(Debug, Clone)]
pub enum Provider {
    /// Mistral chat completions.
    Mistral(Mistral),
    /// Stable Horde text generation.
    Horde(Horde),
    /// OpenAI chat completions.
    OpenAI(OpenAI),
    /// The hosted default.
    Gemini(Gemini),
}

/// Construct the `kind` backend from stored credentials and config.
///
/// Keyed backends read their key from `store`; Gemini reads its key from
/// config or the environment and fails with [`Cause::Configuration`] if
/// there is none.
pub fn build_provider(
    kind: ProviderKind,
    store: &(impl CredentialStore + ?Sized),
    config: &Config,
) -> Result<Provider, Cause> {
    let provider = match kind {
        ProviderKind::Mistral => {
            let key = required(store, MISTRAL_API_KEY)?;
            let rc = &config.mistral;
            let p = match &rc.base_url {
                Some(url) => Mistral::custom(&key, url)?,
                None => Mistral::api(&key)?,
            };
            Provider::Mistral(match &rc.model {
                Some(model) => p.with_model(model),
                None => p,
            })
        }
        ProviderKind::Horde => {
            let key = required(store, STABLEHORDE_API_KEY)?;
            let hc = &config.horde;
            let url = hc.base_url.as_deref().unwrap_or(horde::endpoint::HORDE);
            Provider::Horde(Horde::custom(&key, url, &hc.client_agent)?)
        }
        ProviderKind::OpenAI => {
            let key = required(store, OPENAI_API_KEY)?;
            let rc = &config.openai;
            let mut p = match &rc.base_url {
                Some(url) => OpenAI::custom(&key, url)?,
                None => OpenAI::api(&key)?,
            };
            if let Some(org) = store.lookup(OPENAI_ORGANIZATION_ID) {
                p = p.with_organization(&org)?;
            }
            Provider::OpenAI(match &rc.model {
                Some(model) => p.with_model(model),
                None => p,
            })
        }
        ProviderKind::Gemini => {
            let gc = &config.gemini;
            let key = gc.key().ok_or_else(|| {
                Cause::Configuration(format!("{} is not set in the environment", gc.api_key_env))
            })?;
            let p = match &gc.base_url {
                Some(url) => Gemini::custom(&key, url)?,
                None => Gemini::api(&key)?,
            };
            Provider::Gemini(match &gc.model {
                Some(model) => p.with_model(model),
                None => p,
            })
        }
    };
    Ok(provider)
}

fn required(store: &(impl CredentialStore + ?Sized), key: &str) -> Result<String, Cause> {
    store
        .lookup(key)
        .ok_or_else(|| Cause::Configuration(format!("{key} is not set")))
}

macro_rules! delegate {
    ($self:ident, $p:ident => $call:expr) => {
        match $self {
            Provider::Mistral($p) => $call,
            Provider::Horde($p) => $call,
            Provider::OpenAI($p) => $call,
            Provider::Gemini($p) => $call,
        }
    };
}

impl Adapter for Provider {
    fn kind(&self) -> ProviderKind {
        delegate!(self, p => p.kind())
    }

    fn endpoint(&self) -> &str {
        delegate!(self, p => p.endpoint())
    }

    fn headers(&self) -> &HeaderMap {
        delegate!(self, p => p.headers())
    }

    fn body(&self, task: &Task) -> Value {
        delegate!(self, p => p.body(task))
    }

    fn text_pointer(&self) -> &'static str {
        delegate!(self, p => p.text_pointer())
    }

    fn error_pointer(&self) -> &'static str {
        delegate!(self, p => p.error_pointer())
    }

    fn wording(&self) -> Wording {
        delegate!(self, p => p.wording())
    }
}
