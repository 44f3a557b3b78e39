use axum::{extract::DefaultBodyLimit, routing::{get, post}, Router};
use crate::config::Config;
use crate::state::AppState;
use super::handlers::{
    create_paste, create_preview, health, index, method_not_allowed, view_paste, view_preview,
};

/// Mounts only the variants enabled in `cfg`.
pub fn build_router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new().route("/health", get(health));

    if cfg.preview.enabled {
        router = router.route(
            "/api/htm/{slug}",
            get(view_preview).post(create_preview).fallback(method_not_allowed),
        );
    }
    if cfg.paste.enabled {
        router = router
            .route("/", get(index))
            .route("/html/preview", post(create_paste).fallback(method_not_allowed))
            .route("/html/{id}", get(view_paste).fallback(method_not_allowed));
    }

    router
        .layer(DefaultBodyLimit::max(cfg.max_body_bytes))
        .with_state(state)
}
