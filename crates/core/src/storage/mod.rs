//! Port for persisted client-side key-value state
//!
//! The browser keeps the session in `localStorage`; here any string-keyed
//! string store will do. Reads and writes are synchronous, matching the
//! storage they replace.

use crmdesk_domain::Result;

/// String key-value storage
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Write several entries.
    ///
    /// Implementations that can persist all entries in one write should
    /// override this so related keys never diverge on disk.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Remove several keys.
    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}
