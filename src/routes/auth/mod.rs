pub mod delete_user;
pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod reset_username;
pub mod verify_email;
