//! `Dispatcher`: the three questionnaire calls.

use crate::{Config, CredentialStore, Provider, Throttle, build_provider, resolve};
use llm::{
    BranchingQuestion, Cause, Error, HttpTransport, Operation, PATH_LENGTH, PathHistoryItem,
    ProviderKind, RefinementQuestion, Result, Scenario, Transport,
};
use std::sync::Arc;

/// Routes each call to the backend selected by the stored credentials.
///
/// Every call waits on the throttle, resolves and builds a backend, sends
/// one request, and returns the parsed result or the attributed error.
/// Nothing is cached between calls, so credential edits apply to the
/// next one.
pub struct Dispatcher<S, T = HttpTransport> {
    store: Arc<S>,
    config: Arc<Config>,
    throttle: Arc<Throttle>,
    transport: T,
}

impl<S: CredentialStore> Dispatcher<S> {
    /// A dispatcher over HTTP with its own throttle.
    pub fn new(store: S, config: Config) -> Self {
        Self::with_transport(store, config, HttpTransport::default())
    }
}

impl<S: CredentialStore, T: Transport> Dispatcher<S, T> {
    /// A dispatcher over a custom transport.
    pub fn with_transport(store: S, config: Config, transport: T) -> Self {
        let throttle = Arc::new(Throttle::new(config.min_interval()));
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            throttle,
            transport,
        }
    }

    /// Share `throttle` with other dispatchers.
    pub fn with_throttle(mut self, throttle: Arc<Throttle>) -> Self {
        self.throttle = throttle;
        self
    }

    /// The throttle this dispatcher waits on.
    pub fn throttle(&self) -> &Arc<Throttle> {
        &self.throttle
    }

    /// The credential store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The backend the next call would use.
    pub fn active(&self) -> ProviderKind {
        resolve(&*self.store)
    }

    /// Fetch the eight branching questions.
    pub async fn branching_choices(&self) -> Result<Vec<BranchingQuestion>> {
        self.throttle.throttle().await;
        let provider = self.select(Operation::Branching)?;
        llm::branching(&provider, &self.transport).await
    }

    /// Fetch the follow-up questions for the path so far.
    pub async fn refinement_choices(
        &self,
        path: &[PathHistoryItem],
    ) -> Result<Vec<RefinementQuestion>> {
        self.throttle.throttle().await;
        let provider = self.select(Operation::Refinement)?;
        llm::refinement(&provider, &self.transport, path).await
    }

    /// Fetch the final scenario for a completed path.
    pub async fn scenario(&self, path: &[PathHistoryItem]) -> Result<Scenario> {
        if path.len() != PATH_LENGTH {
            return Err(Error::new(
                self.active(),
                Operation::Scenario,
                Cause::InvalidPath {
                    expected: PATH_LENGTH,
                    actual: path.len(),
                },
            ));
        }
        self.throttle.throttle().await;
        let provider = self.select(Operation::Scenario)?;
        llm::scenario(&provider, &self.transport, path).await
    }

    fn select(&self, operation: Operation) -> Result<Provider> {
        let kind = self.active();
        tracing::debug!(provider = kind.as_str(), %operation, "selected backend");
        build_provider(kind, &*self.store, &self.config)
            .map_err(|cause| Error::new(kind, operation, cause))
    }
}

impl<S, T: Clone> Clone for Dispatcher<S, T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
            throttle: Arc::clone(&self.throttle),
            transport: self.transport.clone(),
        }
    }
}

impl<S, T> std::fmt::Debug for Dispatcher<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}
