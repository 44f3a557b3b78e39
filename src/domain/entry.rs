use std::time::Duration;
use tokio::time::Instant;

pub const PREVIEW_TTL: Duration = Duration::from_secs(60 * 60);
pub const SLUG_BYTES: usize = 4;
pub const MAX_SLUG_BYTES: usize = 32;
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// How long an entry stays readable after it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    Never,
    After(Duration),
}

impl Expiry {
    /// `0` means the entry never expires.
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 { Expiry::Never } else { Expiry::After(Duration::from_secs(secs)) }
    }

    pub fn ttl(&self) -> Option<Duration> {
        match self {
            Expiry::Never => None,
            Expiry::After(ttl) => Some(*ttl),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Entry<P> {
    pub key: String,
    pub payload: P,
    pub created_at: Instant,
}

impl<P> Entry<P> {
    pub fn new(key: String, payload: P) -> Self {
        Self { key, payload, created_at: Instant::now() }
    }

    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// An entry exactly `ttl` old is still live.
    pub fn is_expired(&self, expiry: Expiry, now: Instant) -> bool {
        match expiry {
            Expiry::Never => false,
            Expiry::After(ttl) => self.age(now) > ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_secs_means_never() {
        assert_eq!(Expiry::from_secs(0), Expiry::Never);
        assert_eq!(Expiry::from_secs(90), Expiry::After(Duration::from_secs(90)));
        assert_eq!(Expiry::Never.ttl(), None);
    }

    #[test]
    fn expiry_boundary_is_strict() {
        let entry = Entry::new("k".to_string(), ());
        let ttl = Duration::from_secs(10);
        let at_ttl = entry.created_at + ttl;

        assert!(!entry.is_expired(Expiry::After(ttl), at_ttl));
        assert!(entry.is_expired(Expiry::After(ttl), at_ttl + Duration::from_millis(1)));
    }

    #[test]
    fn never_policy_ignores_age() {
        let entry = Entry::new("k".to_string(), "v");
        let much_later = entry.created_at + Duration::from_secs(10 * 365 * 24 * 3600);
        assert!(!entry.is_expired(Expiry::Never, much_later));
    }
}
