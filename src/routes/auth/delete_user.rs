use actix_web::{delete, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUsername, UsernameData};
use crate::utils::validate::validate_username;

#[delete("/delete-user")]
async fn delete_user(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUsername>,
) -> ApiResult<UsernameData> {
    let username = validate_username(body.into_inner())?;

    let user = db
        .find_user_by_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound {
            username: username.clone(),
        })?;

    // Hard delete, no soft-delete flag.
    db.delete_user(user).await?;

    Ok(ApiResponse::Ok {
        message: "User deleted successfully!",
        data: UsernameData { username },
    })
}
