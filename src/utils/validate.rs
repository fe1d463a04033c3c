//! Field validation for incoming request bodies. Each handler runs its
//! validator before touching the database; failures carry per-field messages.

use uuid::Uuid;

use crate::types::error::{AppError, FieldErrors};
use crate::types::user::{RCredentials, RRegister, RResetUsername, RUsername};

const REQUIRED: &str = "This field is required.";
const BLANK: &str = "This field may not be blank.";
const BAD_EMAIL: &str = "Enter a valid email address.";

#[derive(Debug)]
pub struct ValidCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct ValidRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct ValidUsernameChange {
    pub id: Uuid,
    pub username: String,
}

fn require(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    match value {
        None => {
            errors.entry(field).or_default().push(REQUIRED.to_string());
            None
        }
        Some(v) if v.trim().is_empty() => {
            errors.entry(field).or_default().push(BLANK.to_string());
            None
        }
        Some(v) => Some(v),
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

pub fn validate_credentials(body: RCredentials) -> Result<ValidCredentials, AppError> {
    let mut errors = FieldErrors::new();
    let username = require(&mut errors, "username", body.username);
    let password = require(&mut errors, "password", body.password);
    match (username, password) {
        (Some(username), Some(password)) => Ok(ValidCredentials { username, password }),
        _ => Err(AppError::Validation(errors)),
    }
}

pub fn validate_registration(body: RRegister) -> Result<ValidRegistration, AppError> {
    let mut errors = FieldErrors::new();
    let first_name = require(&mut errors, "first_name", body.first_name);
    let last_name = require(&mut errors, "last_name", body.last_name);
    let email = require(&mut errors, "email", body.email).and_then(|email| {
        if looks_like_email(&email) {
            Some(email)
        } else {
            errors
                .entry("email")
                .or_default()
                .push(BAD_EMAIL.to_string());
            None
        }
    });
    let username = require(&mut errors, "username", body.username);
    let password = require(&mut errors, "password", body.password);
    match (first_name, last_name, email, username, password) {
        (Some(first_name), Some(last_name), Some(email), Some(username), Some(password)) => {
            Ok(ValidRegistration {
                first_name,
                last_name,
                email,
                username,
                password,
            })
        }
        _ => Err(AppError::Validation(errors)),
    }
}

pub fn validate_username_change(body: RResetUsername) -> Result<ValidUsernameChange, AppError> {
    let mut errors = FieldErrors::new();
    let id = match body.id {
        Some(id) => Some(id),
        None => {
            errors.entry("id").or_default().push(REQUIRED.to_string());
            None
        }
    };
    let username = require(&mut errors, "username", body.username);
    match (id, username) {
        (Some(id), Some(username)) => Ok(ValidUsernameChange { id, username }),
        _ => Err(AppError::Validation(errors)),
    }
}

pub fn validate_username(body: RUsername) -> Result<String, AppError> {
    let mut errors = FieldErrors::new();
    match require(&mut errors, "username", body.username) {
        Some(username) => Ok(username),
        None => Err(AppError::Validation(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_messages(err: AppError, field: &str) -> Vec<String> {
        match err {
            AppError::Validation(errors) => errors.get(field).cloned().unwrap_or_default(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_required() {
        let err = validate_credentials(RCredentials {
            username: None,
            password: Some("pw".into()),
        })
        .unwrap_err();
        assert_eq!(field_messages(err, "username"), vec![REQUIRED.to_string()]);
    }

    #[test]
    fn blank_field_may_not_be_blank() {
        let err = validate_credentials(RCredentials {
            username: Some("  ".into()),
            password: Some("pw".into()),
        })
        .unwrap_err();
        assert_eq!(field_messages(err, "username"), vec![BLANK.to_string()]);
    }

    #[test]
    fn both_fields_reported_at_once() {
        let err = validate_credentials(RCredentials {
            username: None,
            password: None,
        })
        .unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert!(errors.contains_key("username"));
                assert!(errors.contains_key("password"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn registration_rejects_malformed_email() {
        let err = validate_registration(RRegister {
            first_name: Some("Alice".into()),
            last_name: Some("Doe".into()),
            email: Some("not-an-email".into()),
            username: Some("alice".into()),
            password: Some("pw1".into()),
        })
        .unwrap_err();
        assert_eq!(field_messages(err, "email"), vec![BAD_EMAIL.to_string()]);
    }

    #[test]
    fn registration_accepts_complete_input() {
        let valid = validate_registration(RRegister {
            first_name: Some("Alice".into()),
            last_name: Some("Doe".into()),
            email: Some("alice@x.com".into()),
            username: Some("alice".into()),
            password: Some("pw1".into()),
        })
        .unwrap();
        assert_eq!(valid.username, "alice");
        assert_eq!(valid.email, "alice@x.com");
    }

    #[test]
    fn username_change_needs_id() {
        let err = validate_username_change(RResetUsername {
            id: None,
            username: Some("alice2".into()),
        })
        .unwrap_err();
        assert_eq!(field_messages(err, "id"), vec![REQUIRED.to_string()]);
    }
}
