//! 통합 API 에러 응답 타입.
//!
//! 모든 엔드포인트에서 일관된 에러 형식 `{"error": <message>}`를
//! 제공합니다. 상태 코드 매핑:
//!
//! - 400: 입력 검증 실패
//! - 401: 인증 실패
//! - 403: 권한 부족
//! - 502: 번역 제공자 실패
//! - 500: 그 외 서버 에러

use axum::http::StatusCode;
use axum::Json;
use lingo_core::LingoError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 통합 API 에러 응답.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 사람이 읽을 수 있는 에러 메시지
    pub error: String,
}

impl ApiErrorResponse {
    /// 새 에러 응답 생성.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

/// 400 응답 생성.
pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ApiErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ApiErrorResponse::new(message)))
}

/// 401 응답 생성.
pub fn unauthorized(message: impl Into<String>) -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiErrorResponse::new(message)),
    )
}

/// 500 응답 생성.
pub fn internal_error(message: impl Into<String>) -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse::new(message)),
    )
}

/// [`LingoError`]를 HTTP 응답으로 변환.
pub fn from_lingo_error(err: LingoError) -> (StatusCode, Json<ApiErrorResponse>) {
    let status = match &err {
        LingoError::Validation(_) => StatusCode::BAD_REQUEST,
        LingoError::Auth(_) => StatusCode::UNAUTHORIZED,
        LingoError::Forbidden(_) => StatusCode::FORBIDDEN,
        LingoError::NotFound(_) => StatusCode::NOT_FOUND,
        LingoError::Provider(_) | LingoError::Network(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ApiErrorResponse::new(err.to_string())))
}
