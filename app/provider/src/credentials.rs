//! Named credentials and backend resolution.
//!
//! Credentials are optional strings looked up by name at dispatch time.
//! A credential counts only when it is non-empty after trimming.

use anyhow::{Context, Result};
use llm::ProviderKind;
use parking_lot::RwLock;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Mistral API key.
pub const MISTRAL_API_KEY: &str = "mistral_api_key";
/// Stable Horde API key.
pub const STABLEHORDE_API_KEY: &str = "stablehorde_api_key";
/// OpenAI API key.
pub const OPENAI_API_KEY: &str = "openai_api_key";
/// OpenAI organization id, sent alongside the OpenAI key when present.
pub const OPENAI_ORGANIZATION_ID: &str = "openai_organization_id";

/// Read access to named credentials.
pub trait CredentialStore: Send + Sync {
    /// The raw value stored under `key`, if any.
    fn credential(&self, key: &str) -> Option<String>;

    /// The value under `key`, trimmed, if it is non-empty.
    fn lookup(&self, key: &str) -> Option<String> {
        self.credential(key)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
    }
}

impl<S: CredentialStore + ?Sized> CredentialStore for Arc<S> {
    fn credential(&self, key: &str) -> Option<String> {
        (**self).credential(key)
    }
}

/// The credential that selects `kind`, or `None` for the hosted default.
pub fn credential_key(kind: ProviderKind) -> Option<&'static str> {
    match kind {
        ProviderKind::Mistral => Some(MISTRAL_API_KEY),
        ProviderKind::Horde => Some(STABLEHORDE_API_KEY),
        ProviderKind::OpenAI => Some(OPENAI_API_KEY),
        ProviderKind::Gemini => None,
    }
}

/// Pick the backend for the next call: the first keyed backend in
/// priority order whose credential is set, else Gemini.
pub fn resolve(store: &(impl CredentialStore + ?Sized)) -> ProviderKind {
    ProviderKind::PRIORITY
        .into_iter()
        .find(|kind| match credential_key(*kind) {
            Some(key) => store.lookup(key).is_some(),
            None => true,
        })
        .unwrap_or(ProviderKind::Gemini)
}

/// In-memory credentials.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_owned(), value.to_owned());
    }

    /// Forget `key`.
    pub fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

impl CredentialStore for MemoryStore {
    fn credential(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }
}

/// Credentials in a flat TOML table, re-read on every lookup.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store at [`FileStore::default_path`].
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// Default path: `~/.config/worldtree/credentials.toml`.
    pub fn default_path() -> PathBuf {
        crate::config::config_dir().join("credentials.toml")
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `value` under `key`, trimmed. A blank value removes the key.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read()?;
        let value = value.trim();
        if value.is_empty() {
            entries.remove(key);
        } else {
            entries.insert(key.to_owned(), value.to_owned());
        }
        self.write(&entries)
    }

    /// Remove `key` from the file.
    pub fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }

    fn read(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(entries)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

impl CredentialStore for FileStore {
    fn credential(&self, key: &str) -> Option<String> {
        match self.read() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!("ignoring credentials file: {e:#}");
                None
            }
        }
    }
}
