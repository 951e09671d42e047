use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    AppState,
    error::AppError,
    user::{CreateUserRequest, CreateUserResponse, User},
};

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUserResponse>), AppError> {
    // 请求体不是合法 JSON 或字段类型不对，同样按输入错误处理
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!("Rejected create user body: {}", rejection);
        AppError::InvalidInput(vec![rejection.body_text()])
    })?;

    let user = state.users.create_user(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User created successfully",
            user,
        }),
    ))
}

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}
