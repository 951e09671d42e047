pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

use user::UserService;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}
