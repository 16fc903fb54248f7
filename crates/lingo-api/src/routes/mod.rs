//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/api/health` - 헬스 체크 (liveness/readiness)
//! - `/api/` - 서비스 정보
//! - `/api/auth` - 회원가입/로그인/내 정보
//! - `/api/translation` - 번역/히스토리/언어 감지
//! - `/api/users` - 사용자 관리 (admin)
//! - `/api/templates` - 번역 템플릿
//! - `/api/qa` - 번역 품질 검사

pub mod auth;
pub mod health;
pub mod qa;
pub mod templates;
pub mod translation;
pub mod users;

pub use auth::{auth_router, AuthResponse, CredentialsRequest, UserInfo};
pub use health::{
    health_router, ComponentHealth, ComponentStatus, HealthResponse, ReadyResponse,
    ServiceInfoResponse,
};
pub use qa::{qa_router, QaCheckRequest, QaCheckResponse};
pub use templates::{templates_router, TranslationTemplate};
pub use translation::{translation_router, DetectRequest, DetectResponse, TranslateRequest};
pub use users::{users_router, UserSummary};

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 `/api` 아래에 조합하여 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/", get(health::service_info))
        .nest("/api/health", health_router())
        .nest("/api/auth", auth_router())
        .nest("/api/translation", translation_router())
        .nest("/api/users", users_router())
        .nest("/api/templates", templates_router())
        .nest("/api/qa", qa_router())
}
