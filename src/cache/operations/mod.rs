/// 缓存操作
pub mod redis_cache;
pub mod user;
