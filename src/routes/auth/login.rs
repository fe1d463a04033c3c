use actix_web::{post, web};
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginData, RCredentials};
use crate::utils::token::{sign_token, verify_password};
use crate::utils::validate::validate_credentials;

#[post("/login")]
async fn login(
    db: web::Data<Arc<PostgresService>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RCredentials>,
) -> ApiResult<LoginData> {
    let creds = validate_credentials(body.into_inner())?;

    // Kept quirk from the original service: the token is minted before the
    // credential check and goes out in the payload either way.
    let token = sign_token(&creds.username, &config.secret_key)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = db.find_user_by_username(&creds.username).await?;
    let authenticated = match &user {
        Some(user) => verify_password(&creds.password, &user.password)
            .map_err(|e| AppError::Internal(e.to_string()))?,
        None => false,
    };

    let data = LoginData {
        username: creds.username,
        token,
    };
    if authenticated {
        Ok(ApiResponse::Ok {
            message: "Login successful!",
            data,
        })
    } else {
        Ok(ApiResponse::Fail {
            message: "Login failed!",
            data,
        })
    }
}
