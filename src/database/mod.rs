// 数据库模块
// 存储是用户数据的唯一可信来源

pub mod operations;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

use crate::config::Config;
use crate::error::StoreError;
use crate::user::{NewUser, User};

pub use operations::user::PgUserStore;

/// 用户存储接口
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 写入新用户，由存储分配 ID 和创建时间
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// 全表扫描
    async fn scan_all(&self) -> Result<Vec<User>, StoreError>;
}

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// 建立连接池并确保 users 表存在
pub async fn connect(config: &Config) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'user_cache_backend';")
                    .await?;
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await?;

    sqlx::query(CREATE_USERS_TABLE).execute(&pool).await?;
    tracing::info!("Connected to Postgres");

    Ok(pool)
}
