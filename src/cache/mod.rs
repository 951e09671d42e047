// 缓存模块
// 缓存只是优化，任何缓存错误都不应影响请求结果

pub mod keys;
pub mod operations;

use async_trait::async_trait;

use crate::error::CacheError;

pub use operations::redis_cache::RedisCache;
pub use operations::user::UserListCache;

/// 字符串键值缓存接口
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
