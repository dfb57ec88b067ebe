//! TTL cache store backing every scraper operation
//!
//! The store interface is deliberately small: `get` returns a value only
//! while it is fresh, `set` unconditionally replaces the whole record. TTL
//! policy is a pure predicate on timestamps (`CacheEntry::is_fresh`), so it
//! is independent of the storage medium. Two implementations are provided:
//! an in-memory map and a file-per-key directory store.
//!
//! Expired entries are not deleted on read; they stay until the next write
//! overwrites them. The key space is bounded by the distinct
//! (operation, parameters) pairs actually requested.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Default TTL applied to every cached scraper operation
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// A stored value together with its absolute expiry timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The cached record or list
    pub value: Value,
    /// Unix timestamp (seconds) after which the entry is stale
    pub expires_at: u64,
}

impl CacheEntry {
    /// Create an entry expiring `ttl` from now
    pub fn new(value: Value, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: unix_now() + ttl.as_secs(),
        }
    }

    /// An entry is readable only strictly before its expiry
    pub fn is_fresh(&self, now: u64) -> bool {
        now < self.expires_at
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Key/value store with per-entry expiry
///
/// Implementations must replace records atomically as a whole; readers never
/// observe a partially written value.
pub trait CacheStore: Send + Sync {
    /// Get the value for `key` if present and not expired
    fn get(&self, key: &str) -> Option<Value>;

    /// Unconditionally (over)write `key`, expiring `ttl` from now
    fn set(&self, key: &str, value: Value, ttl: Duration);
}

/// In-memory cache store
///
/// Whole-record replacement under an `RwLock` keeps concurrent readers safe
/// without any further coordination.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// True when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().ok()?;
        match entries.get(key) {
            Some(entry) if entry.is_fresh(unix_now()) => {
                debug!(key, "cache hit");
                Some(entry.value.clone())
            }
            _ => {
                debug!(key, "cache miss");
                None
            }
        }
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), CacheEntry::new(value, ttl));
        }
    }
}

/// File-per-key cache store
///
/// Each key maps to one JSON file holding a full [`CacheEntry`]; writes
/// replace the file, so the record-level atomicity contract holds. Storage
/// survives process restarts.
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl CacheStore for FileCache {
    fn get(&self, key: &str) -> Option<Value> {
        let path = self.entry_path(key);
        let content = std::fs::read_to_string(&path).ok()?;
        let entry: CacheEntry = serde_json::from_str(&content).ok()?;
        if entry.is_fresh(unix_now()) {
            debug!(key, "cache hit");
            Some(entry.value)
        } else {
            debug!(key, "cache miss");
            None
        }
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) {
        let path = self.entry_path(key);
        let entry = CacheEntry::new(value, ttl);
        match serde_json::to_string(&entry) {
            Ok(content) => {
                if let Err(e) = std::fs::write(&path, content) {
                    warn!(key, error = %e, "failed to write cache entry");
                }
            }
            Err(e) => warn!(key, error = %e, "failed to serialize cache entry"),
        }
    }
}

/// Map a cache key onto a string safe for use as a file name
pub fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
