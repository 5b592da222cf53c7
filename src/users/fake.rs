use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::repo::{StoreError, UserStore};
use super::repo_types::User;

/// In-memory `UserStore` with an id sequence starting at 1.
///
/// Counts every call so tests can tell whether a resolver reached the store.
#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<BTreeMap<i32, String>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every following call fail like a dropped pool would.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn fetch_by_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        self.enter()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&id).map(|name| User {
            id,
            name: name.clone(),
        }))
    }

    async fn insert(&self, name: &str) -> Result<User, StoreError> {
        self.enter()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
        self.rows.lock().unwrap().insert(id, name.to_string());
        Ok(User {
            id,
            name: name.to_string(),
        })
    }

    async fn update_by_id(&self, id: i32, name: &str) -> Result<Option<User>, StoreError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|stored| {
            *stored = name.to_string();
            User {
                id,
                name: name.to_string(),
            }
        }))
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, StoreError> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }
}
