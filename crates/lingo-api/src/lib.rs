//! 번역 백엔드 REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API
//! - JWT 인증 및 역할 기반 접근 제어
//! - PBKDF2 비밀번호 해싱
//! - 번역 파이프라인 (검증 → 제공자 호출 → 히스토리 저장)
//! - 헬스 체크 엔드포인트
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`auth`]: JWT 인증 및 권한 관리
//! - [`services`]: 번역 파이프라인
//! - [`repository`]: 사용자/히스토리 저장소
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod auth;
pub mod error;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;

pub use auth::{hash_password, verify_password, Claims, JwtAuth, JwtAuthError, Role};
pub use error::{ApiErrorResponse, ApiResult};
pub use routes::create_api_router;
pub use services::TranslationService;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
