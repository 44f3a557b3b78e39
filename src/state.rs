use crate::config::Config;
use crate::services::storage::SlugStore;

/// Target URL rendered inside the sandboxed preview frame.
pub type PreviewStore = SlugStore<String>;
/// Raw HTML echoed back verbatim.
pub type PasteStore = SlugStore<String>;

#[derive(Clone)]
pub struct AppState {
    pub preview: PreviewStore,
    pub paste: PasteStore,
    pub public_base_url: Option<String>,
    pub slug_bytes: usize,
}

impl AppState {
    pub fn new(cfg: &Config) -> Self {
        Self {
            preview: SlugStore::new(cfg.preview.expiry),
            paste: SlugStore::new(cfg.paste.expiry),
            public_base_url: cfg.public_base_url.clone(),
            slug_bytes: cfg.slug_bytes,
        }
    }

    pub fn paste_url(&self, id: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{base}/html/{id}"),
            None => format!("/html/{id}"),
        }
    }
}
