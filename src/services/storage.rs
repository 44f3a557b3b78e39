use crate::domain::entry::{Entry, Expiry};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Outcome of a read. `Expired` means this read evicted the entry.
#[derive(Debug, Clone)]
pub enum Lookup<P> {
    Hit(Entry<P>),
    Missing,
    Expired,
}

impl<P> Lookup<P> {
    pub fn hit(self) -> Option<Entry<P>> {
        match self {
            Lookup::Hit(entry) => Some(entry),
            Lookup::Missing | Lookup::Expired => None,
        }
    }
}

/// In-memory slug store with lazy, read-time expiry.
///
/// Every operation takes the lock once, so a read that evicts and a write to
/// the same slug never interleave. Nothing is swept on the request path:
/// expired entries that are never read again stay resident until
/// [`SlugStore::sweep_expired`] runs or the process exits.
#[derive(Debug)]
pub struct SlugStore<P> {
    entries: Arc<Mutex<HashMap<String, Entry<P>>>>,
    expiry: Expiry,
}

impl<P> Clone for SlugStore<P> {
    fn clone(&self) -> Self {
        Self { entries: Arc::clone(&self.entries), expiry: self.expiry }
    }
}

impl<P: Clone> SlugStore<P> {
    pub fn new(expiry: Expiry) -> Self {
        Self { entries: Arc::default(), expiry }
    }

    pub fn expiry(&self) -> Expiry { self.expiry }

    /// Inserts or fully replaces the entry, restarting its clock.
    pub async fn put(&self, key: impl Into<String>, payload: P) {
        let key = key.into();
        let entry = Entry::new(key.clone(), payload);
        self.entries.lock().await.insert(key, entry);
    }

    pub async fn lookup(&self, key: &str) -> Lookup<P> {
        let mut entries = self.entries.lock().await;
        let Some(entry) = entries.get(key) else { return Lookup::Missing };
        if !entry.is_expired(self.expiry, Instant::now()) {
            return Lookup::Hit(entry.clone());
        }
        entries.remove(key);
        Lookup::Expired
    }

    pub async fn get(&self, key: &str) -> Option<Entry<P>> {
        self.lookup(key).await.hit()
    }

    pub async fn delete(&self, key: &str) {
        self.entries.lock().await.remove(key);
    }

    /// Includes expired entries nobody has read yet.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Full scan. Only for the background sweeper, never per request.
    pub async fn sweep_expired(&self) -> usize {
        if self.expiry == Expiry::Never {
            return 0;
        }
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(self.expiry, now));
        before - entries.len()
    }
}
