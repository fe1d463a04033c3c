use actix_web::{put, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RCredentials, UsernameData};
use crate::utils::token::hash_password;
use crate::utils::validate::validate_credentials;

#[put("/reset-password")]
async fn reset_password(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RCredentials>,
) -> ApiResult<UsernameData> {
    // Same body shape as login: username plus the new password.
    let creds = validate_credentials(body.into_inner())?;

    let user = db
        .find_user_by_username(&creds.username)
        .await?
        .ok_or_else(|| AppError::NotFound {
            username: creds.username.clone(),
        })?;

    let password = hash_password(&creds.password).map_err(|e| AppError::Internal(e.to_string()))?;
    db.set_password(user, password).await?;

    Ok(ApiResponse::Ok {
        message: "Reset password successfully!",
        data: UsernameData {
            username: creds.username,
        },
    })
}
