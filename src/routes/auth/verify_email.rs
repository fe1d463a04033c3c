use actix_web::{get, web};
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UsernameData;
use crate::utils::token::decode_token;

#[get("/verify-email/{token}")]
async fn verify_email(
    db: web::Data<Arc<PostgresService>>,
    config: web::Data<EnvConfig>,
    path: web::Path<String>,
) -> ApiResult<UsernameData> {
    let token = path.into_inner();

    // A bad signature, a malformed token and a vanished user all look the
    // same to the caller; the specifics only reach the logs.
    let claims = decode_token(&token, &config.secret_key)
        .map_err(|e| AppError::Internal(format!("token decode failed: {e}")))?;

    let user = db
        .find_user_by_username(&claims.username)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("verified token for unknown user {}", claims.username))
        })?;

    let user = db.activate_user(user).await?;

    Ok(ApiResponse::Ok {
        message: "Account activated successfully!",
        data: UsernameData {
            username: user.username,
        },
    })
}
