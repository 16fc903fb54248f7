//! 번역 품질 검사 endpoint.
//!
//! 번역 결과에 대한 기본 품질 검사를 제공합니다. 현재는 길이
//! 비율과 빈 결과만 검사하며, 용어집 기반 검사는 아직 지원하지
//! 않습니다.

use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::JwtAuth;
use crate::error::{bad_request, ApiResult};
use crate::state::AppState;

/// 품질 검사 요청.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QaCheckRequest {
    /// 원본 텍스트
    pub original_text: String,
    /// 번역된 텍스트
    pub translated_text: String,
}

/// 품질 검사 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QaCheckResponse {
    /// 검사 통과 여부
    pub passed: bool,
    /// 발견된 문제 목록
    pub issues: Vec<String>,
}

/// 번역 품질 검사.
///
/// POST /api/qa/check
#[utoipa::path(
    post,
    path = "/api/qa/check",
    tag = "qa",
    security(("bearer_auth" = [])),
    request_body = QaCheckRequest,
    responses(
        (status = 200, description = "검사 결과", body = QaCheckResponse),
        (status = 400, description = "검증 실패"),
        (status = 401, description = "인증 실패")
    )
)]
pub async fn check(
    JwtAuth(_claims): JwtAuth,
    Json(request): Json<QaCheckRequest>,
) -> ApiResult<Json<QaCheckResponse>> {
    if request.original_text.trim().is_empty() {
        return Err(bad_request("원본 텍스트를 제공해주세요"));
    }

    let mut issues = Vec::new();

    if request.translated_text.trim().is_empty() {
        issues.push("번역 결과가 비어 있습니다".to_string());
    } else {
        // 원본 대비 비정상적인 길이 비율은 누락/중복 번역 신호
        let ratio = request.translated_text.chars().count() as f64
            / request.original_text.chars().count() as f64;
        if ratio < 0.2 {
            issues.push("번역 결과가 원본에 비해 지나치게 짧습니다".to_string());
        } else if ratio > 5.0 {
            issues.push("번역 결과가 원본에 비해 지나치게 깁니다".to_string());
        }
    }

    Ok(Json(QaCheckResponse {
        passed: issues.is_empty(),
        issues,
    }))
}

/// 품질 검사 라우터 생성.
pub fn qa_router() -> Router<Arc<AppState>> {
    Router::new().route("/check", post(check))
}
