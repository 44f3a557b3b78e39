use axum::{
    body::Bytes,
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    Form,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::domain::slug;
use crate::error::{AppError, Result};
use crate::services::storage::Lookup;
use crate::state::AppState;
use crate::web::utils::{
    invalid_link_page, link_expired_page, paste_form_page, paste_not_found_page, preview_frame,
};

#[derive(Debug, Deserialize)]
pub struct CreatePreview {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct PasteForm {
    pub html_code: String,
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn index() -> Html<&'static str> {
    Html(paste_form_page())
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// The body is parsed by hand so a missing or odd content type is reported
/// the same way as malformed JSON.
pub async fn create_preview(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    body: Bytes,
) -> Result<Json<Value>> {
    let req: CreatePreview = serde_json::from_slice(&body).map_err(|e| {
        warn!(%slug, error = %e, "rejected preview body");
        AppError::BadRequest("Invalid JSON".into())
    })?;
    let url = validate_url(&req.url, state.public_base_url.as_deref())?;

    state.preview.put(slug.clone(), url.to_string()).await;
    info!(%slug, variant = "preview", "stored preview link");
    Ok(Json(json!({ "success": true })))
}

pub async fn view_preview(State(state): State<AppState>, Path(slug): Path<String>) -> Html<String> {
    match state.preview.lookup(&slug).await {
        Lookup::Hit(entry) => {
            debug!(%slug, "preview hit");
            Html(preview_frame(&entry.payload))
        }
        Lookup::Expired => {
            info!(%slug, variant = "preview", "evicted expired entry");
            Html(link_expired_page(state.preview.expiry().ttl()))
        }
        Lookup::Missing => Html(invalid_link_page()),
    }
}

pub async fn create_paste(
    State(state): State<AppState>,
    form: std::result::Result<Form<PasteForm>, FormRejection>,
) -> Result<Redirect> {
    let Form(form) = form.map_err(|e| {
        warn!(error = %e, "rejected paste body");
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest(e.body_text())
        }
    })?;

    let id = slug::generate(state.slug_bytes);
    state.paste.put(id.clone(), form.html_code).await;
    info!(slug = %id, variant = "paste", "stored paste");
    Ok(Redirect::to(&state.paste_url(&id)))
}

/// Serves stored HTML verbatim, without any sandboxing.
pub async fn view_paste(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.paste.lookup(&id).await {
        Lookup::Hit(entry) => {
            debug!(slug = %id, "paste hit");
            Html(entry.payload).into_response()
        }
        Lookup::Expired => {
            info!(slug = %id, variant = "paste", "evicted expired entry");
            (StatusCode::NOT_FOUND, Html(paste_not_found_page())).into_response()
        }
        Lookup::Missing => (StatusCode::NOT_FOUND, Html(paste_not_found_page())).into_response(),
    }
}

/// Same-origin targets are refused: `allow-scripts allow-same-origin` lets a
/// framed page from our own origin (a raw paste) lift its sandbox.
fn validate_url<'a>(raw: &'a str, own_base: Option<&str>) -> Result<&'a str> {
    let url = raw.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(AppError::BadRequest("url must be an absolute http(s) URL".into()));
    }
    if let Some(base) = own_base {
        let rest = url.get(..base.len()).filter(|head| head.eq_ignore_ascii_case(base));
        if rest.is_some() && matches!(url.as_bytes().get(base.len()), None | Some(b'/' | b'?' | b'#')) {
            return Err(AppError::BadRequest("url must not point back at this service".into()));
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_http_urls_are_accepted() {
        assert_eq!(validate_url(" https://example.com ", None).unwrap(), "https://example.com");
        assert!(validate_url("http://localhost:8080/x", None).is_ok());
        assert!(validate_url("", None).is_err());
        assert!(validate_url("javascript:alert(1)", None).is_err());
        assert!(validate_url("example.com", None).is_err());
    }

    #[test]
    fn own_origin_is_refused() {
        let base = Some("https://box.example");
        assert!(validate_url("https://box.example/html/deadbeef", base).is_err());
        assert!(validate_url("HTTPS://BOX.EXAMPLE/html/x", base).is_err());
        assert!(validate_url("https://box.example", base).is_err());
        assert!(validate_url("https://box.example.evil.test/", base).is_ok());
        assert!(validate_url("https://other.example/html/x", base).is_ok());
    }
}
