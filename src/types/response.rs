use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use crate::types::error::AppError;

/// Every payload goes out wrapped in `{success, message, data}`.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

pub enum ApiResponse<T> {
    Ok { message: &'static str, data: T },
    /// Business failure that is not an `AppError`: same 400 as validation,
    /// distinguishable only by message and data.
    Fail { message: &'static str, data: T },
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok { message, data } => HttpResponse::Ok().json(Envelope {
                success: true,
                message,
                data,
            }),
            ApiResponse::Fail { message, data } => HttpResponse::BadRequest().json(Envelope {
                success: false,
                message,
                data,
            }),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
