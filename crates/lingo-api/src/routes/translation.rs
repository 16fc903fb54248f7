//! 번역 endpoint.
//!
//! 번역 실행, 히스토리 조회, 언어 감지를 제공합니다. 모든
//! 엔드포인트는 인증이 필요하며, 사용자 ID는 토큰 claims에서
//! 추출됩니다 (요청 본문으로 신원을 받지 않습니다).
//!
//! # 엔드포인트
//!
//! - `POST /api/translation/translate` - 번역 실행
//! - `GET  /api/translation/history?limit=N` - 히스토리 조회 (최신순)
//! - `POST /api/translation/detect` - 언어 감지

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use lingo_core::{TranslationRequest, TranslationResponse};

use crate::auth::JwtAuth;
use crate::error::{from_lingo_error, ApiErrorResponse, ApiResult};
use crate::repository::TranslationHistoryRecord;
use crate::state::AppState;

// ==================== 요청/응답 타입 ====================

/// 번역 요청 본문.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// 번역할 텍스트
    pub text: String,
    /// 출발 언어 (생략 시 "auto")
    pub source_language: Option<String>,
    /// 도착 언어 (생략 시 "en")
    pub target_language: Option<String>,
}

/// 히스토리 조회 쿼리.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// 최대 조회 개수 (기본: 10)
    pub limit: Option<i64>,
}

/// 언어 감지 요청 본문.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DetectRequest {
    /// 감지할 텍스트
    pub text: String,
}

/// 언어 감지 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    /// 입력 텍스트
    pub text: String,
    /// 감지된 언어 코드
    pub detected_language: String,
}

// ==================== Handler ====================

/// 번역 실행.
///
/// POST /api/translation/translate
///
/// 히스토리 저장에 성공하면 `request_id`가 응답에 포함됩니다.
/// 저장 실패는 번역 결과에 영향을 주지 않습니다.
#[utoipa::path(
    post,
    path = "/api/translation/translate",
    tag = "translation",
    security(("bearer_auth" = [])),
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "번역 성공", body = TranslationResponse),
        (status = 400, description = "검증 실패", body = ApiErrorResponse),
        (status = 401, description = "인증 실패", body = ApiErrorResponse),
        (status = 502, description = "번역 제공자 실패", body = ApiErrorResponse)
    )
)]
pub async fn translate(
    State(state): State<Arc<AppState>>,
    JwtAuth(claims): JwtAuth,
    Json(request): Json<TranslateRequest>,
) -> ApiResult<Json<TranslationResponse>> {
    let service = state.translation_service();

    let request = TranslationRequest::new(
        request.text,
        request.source_language,
        request.target_language,
        claims.sub,
    );

    let response = service.translate(request).await.map_err(from_lingo_error)?;
    Ok(Json(response))
}

/// 번역 히스토리 조회.
///
/// GET /api/translation/history?limit=N
///
/// 인증된 사용자의 히스토리만 최신순으로 반환합니다.
#[utoipa::path(
    get,
    path = "/api/translation/history",
    tag = "translation",
    security(("bearer_auth" = [])),
    params(
        ("limit" = Option<i64>, Query, description = "최대 조회 개수 (기본: 10)")
    ),
    responses(
        (status = 200, description = "히스토리 목록", body = Vec<TranslationHistoryRecord>),
        (status = 401, description = "인증 실패", body = ApiErrorResponse)
    )
)]
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    JwtAuth(claims): JwtAuth,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<Vec<TranslationHistoryRecord>>> {
    let service = state.translation_service();

    let records = service
        .get_history(&claims.sub, query.limit)
        .await
        .map_err(from_lingo_error)?;

    Ok(Json(records))
}

/// 언어 감지.
///
/// POST /api/translation/detect
#[utoipa::path(
    post,
    path = "/api/translation/detect",
    tag = "translation",
    security(("bearer_auth" = [])),
    request_body = DetectRequest,
    responses(
        (status = 200, description = "감지 성공", body = DetectResponse),
        (status = 400, description = "검증 실패", body = ApiErrorResponse),
        (status = 401, description = "인증 실패", body = ApiErrorResponse)
    )
)]
pub async fn detect(
    State(state): State<Arc<AppState>>,
    JwtAuth(_claims): JwtAuth,
    Json(request): Json<DetectRequest>,
) -> ApiResult<Json<DetectResponse>> {
    let service = state.translation_service();

    let detected_language = service
        .detect_language(&request.text)
        .await
        .map_err(from_lingo_error)?;

    Ok(Json(DetectResponse {
        text: request.text,
        detected_language,
    }))
}

// ==================== 라우터 ====================

/// 번역 라우터 생성.
pub fn translation_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/translate", post(translate))
        .route("/history", get(get_history))
        .route("/detect", post(detect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{create_token, Claims, JwtConfig, Role};
    use crate::state::create_test_state;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Extension,
    };
    use tower::ServiceExt;

    fn translation_app(state: Arc<AppState>) -> Router {
        let secret = state.config.auth.secret_key.clone();
        Router::new()
            .nest("/translation", translation_router())
            .layer(Extension(JwtConfig::new(secret)))
            .with_state(state)
    }

    fn bearer(state: &AppState, user_id: &str) -> String {
        let claims = Claims::new(user_id, "user@example.com", Role::User, 24);
        let token = create_token(&claims, &state.config.auth.secret_key).unwrap();
        format!("Bearer {}", token)
    }

    async fn post_json(app: Router, uri: &str, auth: Option<&str>, body: &str) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(value) = auth {
            builder = builder.header("Authorization", value);
        }
        let response = app
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_translate_requires_auth() {
        let app = translation_app(Arc::new(create_test_state()));

        let (status, _) = post_json(
            app,
            "/translation/translate",
            None,
            r#"{"text":"hello","targetLanguage":"fr"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_translate_returns_translation() {
        let state = Arc::new(create_test_state());
        let auth = bearer(&state, "u1");
        let app = translation_app(state);

        let (status, body) = post_json(
            app,
            "/translation/translate",
            Some(&auth),
            r#"{"text":"hello","targetLanguage":"fr"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);

        let response: TranslationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.original_text, "hello");
        assert!(!response.translated_text.is_empty());
        assert_eq!(response.target_language, "fr");
        // DB 미설정이므로 저장이 생략되어 request_id 없음
        assert!(response.request_id.is_none());
    }

    #[tokio::test]
    async fn test_translate_empty_text_is_bad_request() {
        let state = Arc::new(create_test_state());
        let auth = bearer(&state, "u1");
        let app = translation_app(state);

        let (status, body) = post_json(
            app,
            "/translation/translate",
            Some(&auth),
            r#"{"text":""}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(error.get("error").is_some());
    }

    #[tokio::test]
    async fn test_history_without_db_is_empty() {
        let state = Arc::new(create_test_state());
        let auth = bearer(&state, "u1");
        let app = translation_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/translation/history?limit=5")
                    .header("Authorization", auth)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let records: Vec<TranslationHistoryRecord> = serde_json::from_slice(&body).unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_detect_language() {
        let state = Arc::new(create_test_state());
        let auth = bearer(&state, "u1");
        let app = translation_app(state);

        let (status, body) = post_json(
            app,
            "/translation/detect",
            Some(&auth),
            r#"{"text":"bonjour"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);

        let response: DetectResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.text, "bonjour");
        assert_eq!(response.detected_language, "fr");
    }

    #[tokio::test]
    async fn test_detect_empty_text_is_bad_request() {
        let state = Arc::new(create_test_state());
        let auth = bearer(&state, "u1");
        let app = translation_app(state);

        let (status, _) =
            post_json(app, "/translation/detect", Some(&auth), r#"{"text":"  "}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
