use std::sync::Arc;

use crate::cache::KeyValueCache;
use crate::cache::keys::{USERS_KEY, USERS_TTL_SECS};
use crate::error::CacheError;
use crate::user::User;

/// 用户列表快照的缓存操作
#[derive(Clone)]
pub struct UserListCache {
    cache: Arc<dyn KeyValueCache>,
}

impl UserListCache {
    pub fn new(cache: Arc<dyn KeyValueCache>) -> Self {
        Self { cache }
    }

    /// 读取缓存的用户列表，无法解析的内容按错误处理
    pub async fn get_users(&self) -> Result<Option<Vec<User>>, CacheError> {
        match self.cache.get(USERS_KEY).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub async fn cache_users(&self, users: &[User]) -> Result<(), CacheError> {
        let json = serde_json::to_string(users)?;
        self.cache.set_with_ttl(USERS_KEY, &json, USERS_TTL_SECS).await
    }

    pub async fn clear_users(&self) -> Result<(), CacheError> {
        self.cache.delete(USERS_KEY).await
    }
}
