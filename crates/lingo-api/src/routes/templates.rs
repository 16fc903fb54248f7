//! 번역 템플릿 endpoint.
//!
//! 자주 쓰는 정형 문구의 템플릿 목록을 제공합니다. 현재는 내장
//! 목록만 반환하며, 사용자 정의 템플릿 저장은 아직 지원하지
//! 않습니다.

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::JwtAuth;
use crate::state::AppState;

/// 번역 템플릿.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationTemplate {
    /// 템플릿 ID
    pub id: String,
    /// 템플릿 이름
    pub name: String,
    /// 템플릿 본문 (`{name}` 형식의 자리표시자 포함 가능)
    pub text: String,
}

/// 내장 템플릿 목록.
fn builtin_templates() -> Vec<TranslationTemplate> {
    vec![
        TranslationTemplate {
            id: "greeting".to_string(),
            name: "인사".to_string(),
            text: "Hello {name}, thank you for reaching out.".to_string(),
        },
        TranslationTemplate {
            id: "follow-up".to_string(),
            name: "후속 문의".to_string(),
            text: "Just following up on my previous message.".to_string(),
        },
        TranslationTemplate {
            id: "closing".to_string(),
            name: "맺음말".to_string(),
            text: "Best regards, {name}".to_string(),
        },
    ]
}

/// 템플릿 목록 조회.
///
/// GET /api/templates
#[utoipa::path(
    get,
    path = "/api/templates",
    tag = "templates",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "템플릿 목록", body = Vec<TranslationTemplate>),
        (status = 401, description = "인증 실패")
    )
)]
pub async fn list_templates(JwtAuth(_claims): JwtAuth) -> Json<Vec<TranslationTemplate>> {
    Json(builtin_templates())
}

/// 템플릿 라우터 생성.
pub fn templates_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_templates))
}
