use crate::core::state::AppState;
use anyhow::{Context, Result};
use tracing::info;

// this runs at boot time
/// Probe the configured backend with a cheap read so misconfigured
/// credentials show up at startup instead of on the first user request.
pub async fn probe_backend(state: &AppState) -> Result<usize> {
    let responses = state
        .gateway
        .list_responses()
        .await
        .context("Failed to reach the survey backend")?;

    info!(
        stored_responses = responses.len(),
        "Backend probe succeeded"
    );

    Ok(responses.len())
}
