use actix_web::{post, web};
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUsername, UsernameData};
use crate::utils::mail::{reset_password_email, send_email};
use crate::utils::validate::validate_username;

#[post("/forgot-password")]
async fn forgot_password(
    db: web::Data<Arc<PostgresService>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RUsername>,
) -> ApiResult<UsernameData> {
    let username = validate_username(body.into_inner())?;

    let user = db
        .find_user_by_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound {
            username: username.clone(),
        })?;

    let mail = reset_password_email(&config.mail.from_address, &user.email);
    send_email(&config.mail, mail).await.map_err(AppError::Mail)?;

    Ok(ApiResponse::Ok {
        message: "Email sent successfully for password reset!",
        data: UsernameData { username },
    })
}
