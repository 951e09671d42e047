//! 测试用的内存存储和缓存

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::cache::KeyValueCache;
use crate::database::UserStore;
use crate::error::{CacheError, StoreError};
use crate::user::{NewUser, User};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    failure: Option<String>,
    inserts: AtomicUsize,
    scans: AtomicUsize,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self::failing_with("pool timed out")
    }

    /// 所有操作都以给定的错误信息失败
    pub fn failing_with(detail: &str) -> Self {
        Self {
            failure: Some(detail.to_string()),
            ..Default::default()
        }
    }

    pub fn seed(&self, name: &str, email: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn scan_calls(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(detail) => Err(StoreError::Database(sqlx::Error::Protocol(detail.clone()))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.seed(&user.name, &user.email))
    }

    async fn scan_all(&self) -> Result<Vec<User>, StoreError> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.users())
    }
}

/// 键 -> (值, TTL)
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, Option<u64>)>>,
    unavailable: bool,
    read_only: bool,
}

impl MemoryCache {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    /// 读正常，写入和删除失败
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Default::default()
        }
    }

    pub fn put(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), None));
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).map(|(v, _)| v.clone())
    }

    pub fn ttl(&self, key: &str) -> Option<u64> {
        self.entries.lock().unwrap().get(key).and_then(|(_, ttl)| *ttl)
    }

    fn check(&self) -> Result<(), CacheError> {
        if self.unavailable {
            return Err(Self::refused());
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), CacheError> {
        self.check()?;
        if self.read_only {
            return Err(CacheError::Redis(redis::RedisError::from((
                redis::ErrorKind::ResponseError,
                "READONLY You can't write against a read only replica.",
            ))));
        }
        Ok(())
    }

    fn refused() -> CacheError {
        CacheError::Redis(redis::RedisError::from((
            redis::ErrorKind::IoError,
            "connection refused",
        )))
    }
}

#[async_trait]
impl KeyValueCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.check()?;
        Ok(self.value(key))
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError> {
        self.check_write()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), Some(ttl_secs)));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.check_write()?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
