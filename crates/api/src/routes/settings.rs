//! Settings update route

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::SharedState;
use drowsiness::ConfigUpdate;

/// Response for the settings endpoint
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub success: bool,
}

/// Apply a partial settings update.
///
/// Omitted fields keep their current values. The new configuration is picked
/// up by the frame loop at its next step; values are not range-validated.
pub async fn update_settings(
    State(state): State<SharedState>,
    Json(update): Json<ConfigUpdate>,
) -> Json<SettingsResponse> {
    let mut state = state.write().await;
    update.apply(&mut state.config);
    info!(config = ?state.config, "settings updated");

    Json(SettingsResponse { success: true })
}
