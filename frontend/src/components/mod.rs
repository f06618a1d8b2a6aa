pub mod auth_layout;
pub mod header;
pub mod input;
pub mod login;
pub mod logout_btn;
pub mod rte;
pub mod signup;
