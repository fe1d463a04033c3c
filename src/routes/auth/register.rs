use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RRegister, UsernameData};
use crate::utils::token::hash_password;
use crate::utils::validate::validate_registration;

#[post("/register")]
async fn register(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RRegister>,
) -> ApiResult<UsernameData> {
    let reg = validate_registration(body.into_inner())?;

    // Email is checked first; a taken email short-circuits before the
    // username is ever looked at.
    if db.user_exists_by_email(&reg.email).await? {
        return Err(AppError::DuplicateEmail(reg.email));
    }
    if db.user_exists_by_username(&reg.username).await? {
        return Err(AppError::DuplicateUsername(reg.username));
    }

    let password = hash_password(&reg.password).map_err(|e| AppError::Internal(e.to_string()))?;

    // Accounts are active right away; the verify-email flow can flip the
    // flag for accounts created inactive through other means.
    db.create_user(DBUserCreate {
        first_name: reg.first_name,
        last_name: reg.last_name,
        email: reg.email,
        username: reg.username.clone(),
        password,
        is_active: true,
    })
    .await?;

    Ok(ApiResponse::Ok {
        message: "Registration successful!",
        data: UsernameData {
            username: reg.username,
        },
    })
}
