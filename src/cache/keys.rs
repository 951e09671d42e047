/// 用户列表缓存键，全局唯一，不按用户拆分
pub const USERS_KEY: &str = "users";

/// 用户列表缓存有效期：1小时
pub const USERS_TTL_SECS: u64 = 3600;
