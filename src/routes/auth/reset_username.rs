use actix_web::{put, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RResetUsername, UsernameData};
use crate::utils::validate::validate_username_change;

#[put("/reset-username")]
async fn reset_username(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RResetUsername>,
) -> ApiResult<UsernameData> {
    let change = validate_username_change(body.into_inner())?;

    let user = db
        .find_user_by_id(&change.id)
        .await?
        .ok_or_else(|| AppError::NotFound {
            username: change.username.clone(),
        })?;

    // No application-level uniqueness re-check; a collision trips the unique
    // constraint and surfaces as the generic failure.
    let updated = db.set_username(user, change.username).await?;

    Ok(ApiResponse::Ok {
        message: "Reset username successfully!",
        data: UsernameData {
            username: updated.username,
        },
    })
}
