//! Build, send, parse: one provider call end to end.
//!
//! Failures from any step are attributed to the adapter's provider and
//! the operation. Nothing is retried here.

use crate::{
    Adapter, BranchingQuestion, Error, Operation, PathHistoryItem, ProviderRequest,
    ProviderResponse, RefinementQuestion, Result, Scenario, Transport,
};

/// Fetch the eight branching questions.
pub async fn branching<A: Adapter, T: Transport>(
    adapter: &A,
    transport: &T,
) -> Result<Vec<BranchingQuestion>> {
    let operation = Operation::Branching;
    let raw = send(adapter, transport, operation, adapter.build_branching_request()).await?;
    adapter
        .parse_branching_response(&raw)
        .map_err(|cause| Error::new(adapter.kind(), operation, cause))
}

/// Fetch the follow-up questions for the path so far.
pub async fn refinement<A: Adapter, T: Transport>(
    adapter: &A,
    transport: &T,
    path: &[PathHistoryItem],
) -> Result<Vec<RefinementQuestion>> {
    let operation = Operation::Refinement;
    let request = adapter.build_refinement_request(path);
    let raw = send(adapter, transport, operation, request).await?;
    adapter
        .parse_refinement_response(&raw)
        .map_err(|cause| Error::new(adapter.kind(), operation, cause))
}

/// Fetch the final scenario for a completed path.
pub async fn scenario<A: Adapter, T: Transport>(
    adapter: &A,
    transport: &T,
    path: &[PathHistoryItem],
) -> Result<Scenario> {
    let operation = Operation::Scenario;
    let request = adapter.build_scenario_request(path);
    let raw = send(adapter, transport, operation, request).await?;
    adapter
        .parse_scenario_response(&raw)
        .map_err(|cause| Error::new(adapter.kind(), operation, cause))
}

async fn send<A: Adapter, T: Transport>(
    adapter: &A,
    transport: &T,
    operation: Operation,
    request: ProviderRequest,
) -> Result<ProviderResponse> {
    tracing::debug!(
        provider = adapter.kind().as_str(),
        %operation,
        endpoint = %request.endpoint,
        "sending generation request"
    );
    let raw = transport
        .post(&request)
        .await
        .map_err(|cause| Error::new(adapter.kind(), operation, cause))?;
    tracing::debug!(
        provider = adapter.kind().as_str(),
        status = raw.status.as_u16(),
        "provider answered"
    );
    Ok(raw)
}
