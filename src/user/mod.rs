// 用户模块：类型、校验和业务逻辑

mod service;
mod types;
mod validation;

pub use service::UserService;
pub use types::{CreateUserRequest, CreateUserResponse, NewUser, User};
pub use validation::validate_new_user;
