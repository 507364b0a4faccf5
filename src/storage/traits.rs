use crate::error::Result;

/// String-keyed state storage used by the surrounding authentication workflow
/// (enrollment and authentication state between polling requests).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Remove one key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key.
    fn clear(&self) -> Result<()>;
}
