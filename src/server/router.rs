use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use super::AppState;
use super::handlers;

/// 构建接口路由
pub fn init(state: AppState) -> Router {
    Router::new()
        .route("/parse/single", post(handlers::parse_single))
        .route("/parse/batch", post(handlers::parse_batch))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_BATCH_WORKERS;
    use crate::resolver::ModelResolver;
    use crate::rule::{FieldMap, ModelRule, RuleRegistry};
    use crate::error::{RsmError, RsmResult};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    struct BrokenRule;

    impl ModelRule for BrokenRule {
        fn key(&self) -> &str {
            "broken"
        }

        fn matches(&self, model: &str) -> bool {
            model.starts_with("BRK")
        }

        fn extract(&self, model: &str) -> RsmResult<FieldMap> {
            Err(RsmError::InvalidInput(model.to_string()))
        }
    }

    fn app() -> Router {
        let registry = RuleRegistry::builtin().with_rule(BrokenRule).unwrap();
        init(AppState::new(ModelResolver::with_registry(registry), 2))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_parse_single() {
        let response = app()
            .oneshot(post_json("/parse/single", r#"{"model":"SV630PS2R8I"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response).await,
            r#"{"型号":"SV630PS2R8I","产品组族":"Servo","产品系列":"630","产品类型":"脉冲型","电压等级":"220V","额定电流":"2.8A","安装方式":"基板标准"}"#
        );
    }

    #[tokio::test]
    async fn test_parse_single_unrecognized_is_ok() {
        let response = app()
            .oneshot(post_json("/parse/single", r#"{"model":"ABC123"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"{"型号":"ABC123","错误":"未识别型号规则"}"#);
    }

    #[tokio::test]
    async fn test_parse_single_defect_is_server_error() {
        let response = app()
            .oneshot(post_json("/parse/single", r#"{"model":"BRK-1"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.contains("\"error\""));
    }

    #[tokio::test]
    async fn test_parse_batch_keeps_order_and_isolates_defects() {
        let response = app()
            .oneshot(post_json(
                "/parse/batch",
                r#"{"models":["XY1A-220-05KW-F","BRK-1","ABC123","AC-M-2KW-1500-90"]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let rows: Vec<FieldMap> = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].get("功率"), Some("05KW"));
        assert_eq!(rows[1].model(), Some("BRK-1"));
        assert!(rows[1].get("错误").unwrap().starts_with("解析失败"));
        assert!(rows[2].is_unrecognized());
        assert_eq!(rows[3].get("额定功率"), Some("2KW"));
    }

    #[tokio::test]
    async fn test_parse_batch_with_oversized_worker_count() {
        let state = AppState::new(ModelResolver::builtin(), usize::MAX / 2);
        assert_eq!(state.batch_workers, MAX_BATCH_WORKERS);

        let response = init(state)
            .oneshot(post_json("/parse/batch", r#"{"models":["SV630PS2R8I"]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let rows: Vec<FieldMap> = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(rows[0].get("安装方式"), Some("基板标准"));
    }

    #[tokio::test]
    async fn test_parse_batch_rejects_bad_requests() {
        let empty = app()
            .oneshot(post_json("/parse/batch", r#"{"models":[]}"#))
            .await
            .unwrap();
        assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

        let wrong_type = app()
            .oneshot(post_json("/parse/batch", r#"{"models":[1,2]}"#))
            .await
            .unwrap();
        assert!(wrong_type.status().is_client_error());

        let missing_field = app()
            .oneshot(post_json("/parse/single", r#"{}"#))
            .await
            .unwrap();
        assert!(missing_field.status().is_client_error());
    }
}
