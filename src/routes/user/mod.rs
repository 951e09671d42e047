mod handler;

pub use handler::{create_user, list_users};
