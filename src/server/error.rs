//! HTTP 错误响应

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::RsmError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// 接口错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求参数不合法
    BadRequest(String),
    /// 解析失败（规则缺陷或内部错误）
    Internal(RsmError),
}

impl From<RsmError> for ApiError {
    fn from(err: RsmError) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(err) => {
                tracing::error!("请求处理失败：{}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
