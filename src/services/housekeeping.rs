use crate::state::AppState;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Optional background sweep. Without it, expired entries are only dropped
/// when a read finds them.
pub async fn start_sweeper(state: AppState, every: Duration) {
    tokio::spawn(async move {
        loop {
            sleep(every).await;
            sweep_once(&state).await;
        }
    });
}

pub(crate) async fn sweep_once(state: &AppState) -> usize {
    let mut total = 0;
    for (variant, store) in [("preview", &state.preview), ("paste", &state.paste)] {
        let removed = store.sweep_expired().await;
        if removed > 0 {
            let remaining = store.len().await;
            info!(variant, removed, remaining, "swept expired entries");
        }
        total += removed;
    }
    total
}
