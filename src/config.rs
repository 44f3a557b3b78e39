use crate::domain::entry::{Expiry, MAX_BODY_BYTES, PREVIEW_TTL, SLUG_BYTES};
use std::str::FromStr;
use std::time::Duration;

/// One deployment variant: whether its routes are mounted and how long its
/// entries live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantConfig {
    pub enabled: bool,
    pub expiry: Expiry,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Prefix for paste redirect URLs; relative redirects when unset.
    pub public_base_url: Option<String>,
    /// Sandboxed iframe over a caller-keyed URL.
    pub preview: VariantConfig,
    /// Raw HTML echo under a server-generated id.
    pub paste: VariantConfig,
    pub slug_bytes: usize,
    pub max_body_bytes: usize,
    pub sweep_every: Option<Duration>,
}

fn default_port() -> u16 { 3000 }

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            public_base_url: None,
            preview: VariantConfig { enabled: true, expiry: Expiry::After(PREVIEW_TTL) },
            paste: VariantConfig { enabled: true, expiry: Expiry::Never },
            slug_bytes: SLUG_BYTES,
            max_body_bytes: MAX_BODY_BYTES,
            sweep_every: None,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self::from_lookup(|name| std::env::var(name).ok()))
    }

    pub(crate) fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |name: &str| -> Option<u64> { parse(var(name)) };
        let defaults = Self::default();

        let preview = VariantConfig {
            enabled: parse(var("PREVIEW_ENABLED")).unwrap_or(defaults.preview.enabled),
            expiry: parsed("PREVIEW_TTL_SECS").map(Expiry::from_secs).unwrap_or(defaults.preview.expiry),
        };
        let paste = VariantConfig {
            enabled: parse(var("PASTE_ENABLED")).unwrap_or(defaults.paste.enabled),
            expiry: parsed("PASTE_TTL_SECS").map(Expiry::from_secs).unwrap_or(defaults.paste.expiry),
        };

        Self {
            port: parse(var("PORT")).unwrap_or(defaults.port),
            public_base_url: var("PUBLIC_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty()),
            preview,
            paste,
            slug_bytes: parse(var("SLUG_BYTES")).unwrap_or(defaults.slug_bytes),
            max_body_bytes: parse(var("MAX_BODY_BYTES")).unwrap_or(defaults.max_body_bytes),
            sweep_every: parsed("SWEEP_INTERVAL_SECS")
                .filter(|&secs| secs > 0)
                .map(Duration::from_secs),
        }
    }
}

fn parse<T: FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let cfg = load(&[]);
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.preview.expiry, Expiry::After(Duration::from_secs(3600)));
        assert_eq!(cfg.paste.expiry, Expiry::Never);
        assert!(cfg.preview.enabled && cfg.paste.enabled);
        assert_eq!(cfg.slug_bytes, 4);
        assert_eq!(cfg.sweep_every, None);
        assert_eq!(cfg.public_base_url, None);
    }

    #[test]
    fn variant_settings_are_independent() {
        let cfg = load(&[
            ("PREVIEW_TTL_SECS", "0"),
            ("PASTE_TTL_SECS", "600"),
            ("PREVIEW_ENABLED", "false"),
        ]);
        assert_eq!(cfg.preview, VariantConfig { enabled: false, expiry: Expiry::Never });
        assert_eq!(cfg.paste, VariantConfig { enabled: true, expiry: Expiry::from_secs(600) });
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = load(&[("PORT", "eighty"), ("PREVIEW_TTL_SECS", "-5"), ("SWEEP_INTERVAL_SECS", "0")]);
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.preview.expiry, Expiry::After(PREVIEW_TTL));
        assert_eq!(cfg.sweep_every, None);
    }

    #[test]
    fn base_url_is_normalised() {
        let cfg = load(&[("PUBLIC_BASE_URL", " https://box.example/ "), ("SWEEP_INTERVAL_SECS", "30")]);
        assert_eq!(cfg.public_base_url.as_deref(), Some("https://box.example"));
        assert_eq!(cfg.sweep_every, Some(Duration::from_secs(30)));
    }
}
