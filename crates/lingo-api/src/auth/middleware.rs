//! Axum용 JWT 인증 미들웨어.
//!
//! 보호된 핸들러는 추출기를 통해 인증을 요구합니다. 추출기 거부는
//! 핸들러 실행 전에 요청을 종료하므로, 거부된 요청에서 핸들러는
//! 절대 호출되지 않습니다.
//!
//! 요청별 상태 전이:
//! 토큰 추출 → 서명/만료 검증 → (필요 시) 역할 확인 → 핸들러 실행.
//! 각 단계의 실패는 구분된 메시지와 함께 401/403으로 매핑됩니다.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::{decode_token, Claims, JwtError, Role};

/// JWT 인증 추출기.
///
/// Axum 핸들러에서 인증된 사용자 정보를 추출합니다.
///
/// # 사용 예시
///
/// ```rust,ignore
/// async fn protected_handler(
///     JwtAuth(claims): JwtAuth,
/// ) -> impl IntoResponse {
///     format!("Authenticated user: {}", claims.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JwtAuth(pub Claims);

/// JWT 인증 에러.
#[derive(Debug, thiserror::Error)]
pub enum JwtAuthError {
    #[error("인증 토큰이 필요합니다")]
    MissingToken,
    #[error("잘못된 Authorization 헤더 형식")]
    InvalidAuthHeader,
    #[error("토큰이 만료되었습니다")]
    TokenExpired,
    #[error("유효하지 않은 토큰")]
    InvalidToken,
    #[error("무권한 접근입니다")]
    InsufficientPermission,
    #[error("서버 인증 설정이 없습니다")]
    SecretUnavailable,
}

impl IntoResponse for JwtAuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            JwtAuthError::MissingToken
            | JwtAuthError::InvalidAuthHeader
            | JwtAuthError::TokenExpired
            | JwtAuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            JwtAuthError::InsufficientPermission => StatusCode::FORBIDDEN,
            JwtAuthError::SecretUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// JWT 비밀 키 저장소.
///
/// 시작 시 한 번 구성되어 axum Extension으로 주입됩니다.
/// 비밀 키가 없으면 토큰 검증은 500으로 실패하며, 임의의 대체 키를
/// 생성하지 않습니다.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    /// 새 JWT 설정 생성.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl<S> FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = JwtAuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Authorization 헤더에서 토큰 추출
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(JwtAuthError::MissingToken)?;

        // Bearer 토큰 형식 확인
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(JwtAuthError::InvalidAuthHeader)?;

        // Extensions에서 프로세스 전역 비밀 키 가져오기
        let jwt_secret = parts
            .extensions
            .get::<JwtConfig>()
            .map(|c| c.secret.clone())
            .ok_or(JwtAuthError::SecretUnavailable)?;

        // 토큰 검증
        let claims = decode_token(token, &jwt_secret).map_err(|e| match e {
            JwtError::TokenExpired => JwtAuthError::TokenExpired,
            _ => JwtAuthError::InvalidToken,
        })?;

        Ok(JwtAuth(claims))
    }
}

/// 특정 역할을 요구하는 검사 함수.
///
/// 역할 비교는 정확한 일치입니다.
///
/// # Returns
///
/// 역할이 일치하면 Ok(()), 불일치하면 Err(JwtAuthError)
pub fn require_role(required_role: Role, claims: &Claims) -> Result<(), JwtAuthError> {
    if claims.role == required_role {
        Ok(())
    } else {
        Err(JwtAuthError::InsufficientPermission)
    }
}

/// Admin 권한을 요구하는 추출기.
///
/// [`JwtAuth`]와 조합되어 인증 성공 후 역할을 확인합니다.
#[derive(Debug, Clone)]
pub struct AdminAuth(pub Claims);

impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
{
    type Rejection = JwtAuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let JwtAuth(claims) = JwtAuth::from_request_parts(parts, state).await?;
        require_role(Role::Admin, &claims)?;
        Ok(AdminAuth(claims))
    }
}
