pub mod create_user;
pub mod error;
pub mod get_user;
pub mod list_users;

pub use create_user::{CreateUserRequest, create_user};
pub use error::{ApiError, ErrorBody};
pub use get_user::get_user;
pub use list_users::list_users;
