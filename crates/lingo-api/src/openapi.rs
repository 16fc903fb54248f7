//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.
//!
//! # 자동 생성 구조
//!
//! 각 라우트 모듈은 자체 스키마를 정의하고, 중앙 `ApiDoc`에서 집계합니다.
//! 새로운 엔드포인트를 추가할 때:
//!
//! 1. 응답/요청 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 및 `paths(...)` 섹션에 추가

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use lingo_core::TranslationResponse;

use crate::error::ApiErrorResponse;
use crate::repository::TranslationHistoryRecord;
use crate::routes::{
    AuthResponse, ComponentHealth, ComponentStatus, CredentialsRequest, DetectRequest,
    DetectResponse, HealthResponse, QaCheckRequest, QaCheckResponse, ReadyResponse,
    TranslateRequest, TranslationTemplate, UserInfo, UserSummary,
};

/// LingoBridge API 문서.
///
/// 모든 엔드포인트와 스키마를 포함하는 OpenAPI 3.0 스펙입니다.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LingoBridge Translation API",
        description = r#"
# LingoBridge 번역 지원 백엔드 REST API

번역 실행, 히스토리 관리, 언어 감지를 위한 REST API입니다.

## 주요 기능

- **번역**: DeepL/Google Translate 기반 번역 파이프라인
- **히스토리**: 사용자별 번역 기록 저장 및 조회
- **언어 감지**: 입력 텍스트의 언어 자동 감지
- **인증**: JWT 기반 인증 및 역할 기반 접근 제어

## 인증

`/api/auth`와 헬스 체크를 제외한 엔드포인트는 JWT Bearer 토큰이
필요합니다. `Authorization: Bearer <token>` 헤더를 포함하세요.
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "auth", description = "인증 - 회원가입/로그인/토큰 확인"),
        (name = "translation", description = "번역 - 실행/히스토리/언어 감지"),
        (name = "users", description = "사용자 관리 - admin 전용"),
        (name = "templates", description = "템플릿 - 정형 문구 목록"),
        (name = "qa", description = "품질 검사 - 번역 결과 검증")
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            // ===== Common =====
            ApiErrorResponse,

            // ===== Health =====
            HealthResponse,
            ReadyResponse,
            ComponentHealth,
            ComponentStatus,

            // ===== Auth =====
            CredentialsRequest,
            AuthResponse,
            UserInfo,

            // ===== Translation =====
            TranslateRequest,
            TranslationResponse,
            TranslationHistoryRecord,
            DetectRequest,
            DetectResponse,

            // ===== Users =====
            UserSummary,

            // ===== Templates / QA =====
            TranslationTemplate,
            QaCheckRequest,
            QaCheckResponse,
        )
    ),
    paths(
        // ===== Health =====
        crate::routes::health::health_check,
        crate::routes::health::health_ready,

        // ===== Auth =====
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::me,

        // ===== Translation =====
        crate::routes::translation::translate,
        crate::routes::translation::get_history,
        crate::routes::translation::detect,

        // ===== Users =====
        crate::routes::users::list_users,

        // ===== Templates / QA =====
        crate::routes::templates::list_templates,
        crate::routes::qa::check,
    )
)]
pub struct ApiDoc;

/// Bearer 토큰 보안 스킴 등록.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Swagger UI 라우터 생성.
///
/// 다음 경로에 문서 UI를 마운트합니다:
/// - `/swagger-ui` - Swagger UI 대화형 문서
/// - `/api-docs/openapi.json` - OpenAPI JSON 스펙
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_valid() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&spec).unwrap();

        assert!(json.contains("LingoBridge Translation API"));

        // 태그 확인
        assert!(json.contains("translation"));
        assert!(json.contains("auth"));

        // 경로 확인
        assert!(json.contains("/api/health"));
        assert!(json.contains("/api/auth/login"));
        assert!(json.contains("/api/translation/translate"));
        assert!(json.contains("/api/translation/history"));
        assert!(json.contains("/api/users"));
    }

    #[test]
    fn test_openapi_contains_security_scheme() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string(&spec).unwrap();

        assert!(json.contains("bearer_auth"));
    }

    #[test]
    fn test_swagger_ui_router_creates() {
        let _router: Router<()> = swagger_ui_router();
    }

    #[test]
    fn test_openapi_contains_schemas() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string(&spec).unwrap();

        assert!(json.contains("TranslationResponse"));
        assert!(json.contains("TranslationHistoryRecord"));
        assert!(json.contains("ApiErrorResponse"));
        assert!(json.contains("AuthResponse"));
    }
}
