use axum::{Router, routing::post};

use crate::{AppState, middleware::log_errors, routes};

/// 用户相关的路由
pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users",
        post(routes::user::create_user).get(routes::user::list_users),
    )
}

/// 创建主路由，所有接口挂在 /api 下
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", user_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}
