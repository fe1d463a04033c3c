pub mod mail;
pub mod token;
pub mod validate;
