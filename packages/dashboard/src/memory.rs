use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::DataError;
use crate::models::UserRecord;
use crate::pagination::PageWindow;
use crate::source::UserSource;

/// In-memory UserSource for tests and offline demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: Arc<Mutex<Vec<UserRecord>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let store = Self::new();
        *store.users.lock().unwrap() = users;
        store
    }

    pub fn insert(&self, user: UserRecord) {
        self.users.lock().unwrap().push(user);
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make every query fail until switched back off.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DataError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DataError::load_failed("memory store set to fail"));
        }
        Ok(())
    }
}

impl UserSource for MemoryStore {
    async fn count(&self) -> Result<u64, DataError> {
        self.check()?;
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn range(&self, window: PageWindow) -> Result<Vec<UserRecord>, DataError> {
        self.check()?;
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .skip(window.start as usize)
            .take(window.len() as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_record;

    #[tokio::test]
    async fn test_count_and_range() {
        let store = MemoryStore::with_users(vec![
            sample_record("a"),
            sample_record("b"),
            sample_record("c"),
        ]);
        assert_eq!(store.count().await.unwrap(), 3);

        let rows = store.range(PageWindow { start: 1, end: 1 }).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].uid, "b");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        assert!(store.is_empty());
        other.insert(sample_record("z"));
        assert_eq!(store.len(), 1);

        other.set_failing(true);
        assert!(store.count().await.is_err());
        assert!(store.range(PageWindow::first(3)).await.is_err());
    }
}
