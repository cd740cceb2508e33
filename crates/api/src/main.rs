//! Drowsiness Monitor - Main Entry Point

use std::sync::Arc;
use std::time::Duration;

use alerting::LogAlertSink;
use api::{init_logging, load_config, run_monitor_loop, run_server, AppState, SyntheticSource};
use tokio::sync::RwLock;
use tracing::info;

/// Frame cadence of the demo source (~30 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Drowsiness Monitor v{} ===", env!("CARGO_PKG_VERSION"));

    let config = load_config();
    info!(?config, "monitor configuration loaded");

    let state = Arc::new(RwLock::new(AppState::new(config)));

    // Camera and landmark model are external; the bundled synthetic source
    // cycles through every detectable state so the pipeline runs end to end.
    let loop_state = state.clone();
    tokio::spawn(async move {
        run_monitor_loop(
            loop_state,
            SyntheticSource::demo(),
            LogAlertSink,
            FRAME_INTERVAL,
        )
        .await;
    });

    let addr = "0.0.0.0:8080";
    run_server(addr, state).await?;

    Ok(())
}
