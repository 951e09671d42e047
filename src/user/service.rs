use std::sync::Arc;

use crate::cache::UserListCache;
use crate::database::UserStore;
use crate::error::ServiceError;

use super::types::{CreateUserRequest, User};
use super::validation::validate_new_user;

/// 用户业务逻辑
///
/// 存储是唯一可信来源，写失败直接返回错误；
/// 缓存的读、写、删除失败都只记录日志，请求照常完成。
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    cache: UserListCache,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, cache: UserListCache) -> Self {
        Self { store, cache }
    }

    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User, ServiceError> {
        let new_user = validate_new_user(req).map_err(ServiceError::Validation)?;

        let user = self.store.insert(new_user).await?;

        // 新增用户后清除列表缓存
        match self.cache.clear_users().await {
            Ok(()) => tracing::info!("Users cache cleared"),
            Err(e) => tracing::error!("Error clearing users cache: {}", e),
        }

        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        match self.cache.get_users().await {
            Ok(Some(users)) => {
                tracing::info!("Cache hit");
                return Ok(users);
            }
            Ok(None) => tracing::info!("Cache miss"),
            Err(e) => tracing::error!("Error checking users cache, falling back to store: {}", e),
        }

        let users = self.store.scan_all().await.inspect_err(|e| {
            tracing::error!("Error fetching users: {}", e);
        })?;

        match self.cache.cache_users(&users).await {
            Ok(()) => tracing::info!("Users cached"),
            Err(e) => tracing::error!("Error saving users to cache: {}", e),
        }

        Ok(users)
    }
}
