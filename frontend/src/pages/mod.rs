pub mod add_post;
pub mod home;
pub mod not_found;
