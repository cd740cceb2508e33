//! Status poll route

use axum::{extract::State, Json};
use serde::Serialize;

use crate::SharedState;

/// Response for the status endpoint
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Get the current status message.
///
/// Polled by the UI independently of the frame cadence; always reflects the
/// outcome of the most recently processed frame.
pub async fn get_status(State(state): State<SharedState>) -> Json<StatusResponse> {
    let state = state.read().await;
    Json(StatusResponse {
        status: state.status.message().to_string(),
    })
}
