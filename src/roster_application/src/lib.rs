pub mod use_cases;

pub use use_cases::create_user::{
    CreateUserCommand, CreateUserError, CreateUserUseCase, UserResponse,
};
