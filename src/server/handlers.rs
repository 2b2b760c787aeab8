//! 接口处理函数

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AppState;
use super::error::ApiError;
use crate::render::into_rows;
use crate::rule::FieldMap;

/// 单条解析请求
#[derive(Debug, Deserialize)]
pub struct SingleRequest {
    pub model: String,
}

/// 批量解析请求
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub models: Vec<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// POST /parse/single
pub async fn parse_single(
    State(state): State<AppState>,
    Json(req): Json<SingleRequest>,
) -> Result<Json<FieldMap>, ApiError> {
    debug!("单条解析：{}", req.model);
    let fields = state.resolver.resolve(&req.model)?;
    Ok(Json(fields))
}

/// POST /parse/batch
///
/// 单条缺陷不影响其他条目，缺陷条目以带错误字段的结果返回。
pub async fn parse_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<Vec<FieldMap>>, ApiError> {
    if req.models.is_empty() {
        return Err(ApiError::BadRequest("models 不能为空".to_string()));
    }

    debug!("批量解析：{} 条", req.models.len());
    let results = state
        .resolver
        .resolve_all_concurrent(req.models.clone(), state.batch_workers)
        .await;
    Ok(Json(into_rows(req.models.as_slice(), results)))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(HealthResponse { status: "ok" }),
    )
}
