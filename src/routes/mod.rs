use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::types::error::{AppError, FieldErrors};

pub mod auth;
pub mod health;

/// Bodies that fail to deserialize still answer with the standard envelope
/// instead of actix's default error body.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let mut errors = FieldErrors::new();
    errors.entry("body").or_default().push(err.to_string());
    AppError::Validation(errors).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    cfg.service(health::health);
    cfg.service(auth::login::login);
    cfg.service(auth::register::register);
    cfg.service(auth::reset_username::reset_username);
    cfg.service(auth::reset_password::reset_password);
    cfg.service(auth::delete_user::delete_user);
    cfg.service(auth::verify_email::verify_email);
    cfg.service(auth::forgot_password::forgot_password);
}
