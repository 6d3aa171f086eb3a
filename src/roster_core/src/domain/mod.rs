pub mod email;
pub mod entity;
pub mod id;
pub mod user;
