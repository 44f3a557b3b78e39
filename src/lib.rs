pub mod config;
pub mod telemetry;
pub mod state;
pub mod error;
pub mod domain { pub mod entry; pub mod slug; }
pub mod services { pub mod housekeeping; pub mod storage; }
pub mod web { pub mod router; pub mod handlers; pub mod utils; }

use crate::services::housekeeping;
use crate::state::AppState;

/// Composition root: the stores are created here and handed to the router,
/// never reached through globals.
pub async fn build_app(cfg: crate::config::Config) -> (axum::Router, u16) {
    let state = AppState::new(&cfg);

    if let Some(every) = cfg.sweep_every {
        housekeeping::start_sweeper(state.clone(), every).await;
        tracing::info!(every_secs = every.as_secs(), "background sweep enabled");
    }
    tracing::info!(
        preview = cfg.preview.enabled,
        preview_ttl = ?cfg.preview.expiry,
        paste = cfg.paste.enabled,
        paste_ttl = ?cfg.paste.expiry,
        "variants configured"
    );

    (crate::web::router::build_router(state, &cfg), cfg.port)
}
