/// 数据库操作实现
pub mod user;
