mod create_user;
mod get_user;
mod helpers;
