//! 인증 endpoint.
//!
//! 회원가입/로그인/내 정보 조회를 제공합니다.
//!
//! # 엔드포인트
//!
//! - `POST /api/auth/register` - 회원가입 (201 + 토큰)
//! - `POST /api/auth/login` - 로그인 (토큰 발급)
//! - `GET  /api/auth/me` - 토큰 claims 확인 (인증 필요)
//!
//! 로그인 실패 시 이메일 존재 여부를 구분하지 않는 단일 메시지를
//! 반환합니다.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::{
    create_token, hash_password, validate_password_strength, verify_password, Claims, JwtAuth,
    Role,
};
use crate::error::{bad_request, internal_error, unauthorized, ApiErrorResponse, ApiResult};
use crate::repository::{NewUser, UserRepository};
use crate::state::AppState;

// ==================== 요청/응답 타입 ====================

/// 회원가입/로그인 요청.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    /// 이메일 주소
    pub email: String,
    /// 비밀번호 (평문, 저장 전 해시됨)
    pub password: String,
}

/// 토큰 발급 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// JWT 액세스 토큰
    pub token: String,
    /// 사용자 정보
    pub user: UserInfo,
}

/// 응답용 사용자 정보 (자격증명 제외).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    /// 사용자 ID
    pub id: String,
    /// 이메일 주소
    pub email: String,
    /// 역할 ("admin" | "user")
    pub role: String,
}

// ==================== Handler ====================

/// 회원가입.
///
/// POST /api/auth/register
///
/// 비밀번호는 PBKDF2로 해시되어 저장되며, 성공 시 즉시 토큰을
/// 발급합니다.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "가입 성공", body = AuthResponse),
        (status = 400, description = "검증 실패 또는 중복 이메일", body = ApiErrorResponse),
        (status = 500, description = "서버 에러", body = ApiErrorResponse)
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let pool = state
        .db_pool
        .as_ref()
        .ok_or_else(|| internal_error("데이터베이스가 설정되지 않았습니다"))?;

    let email = request.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(bad_request("유효한 이메일 주소를 입력해주세요"));
    }

    validate_password_strength(&request.password).map_err(bad_request)?;

    // 중복 가입 확인
    let existing = UserRepository::find_by_email(pool, &email)
        .await
        .map_err(|e| internal_error(format!("사용자 조회 실패: {}", e)))?;
    if existing.is_some() {
        return Err(bad_request("이미 등록된 이메일입니다"));
    }

    let (password_hash, salt) = hash_password(&request.password, None);
    let user = UserRepository::create(
        pool,
        NewUser {
            email: email.clone(),
            password_hash,
            salt,
            role: Role::User.to_string(),
        },
    )
    .await
    .map_err(|e| internal_error(format!("사용자 생성 실패: {}", e)))?;

    info!(email = %email, "신규 사용자 등록");

    let response = issue_token(&state, user.id, &user.email, Role::User)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// 로그인.
///
/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "로그인 성공", body = AuthResponse),
        (status = 401, description = "인증 실패", body = ApiErrorResponse)
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let pool = state
        .db_pool
        .as_ref()
        .ok_or_else(|| internal_error("데이터베이스가 설정되지 않았습니다"))?;

    let email = request.email.trim().to_lowercase();

    let user = UserRepository::find_by_email(pool, &email)
        .await
        .map_err(|e| internal_error(format!("사용자 조회 실패: {}", e)))?
        .ok_or_else(|| unauthorized("이메일 또는 비밀번호가 올바르지 않습니다"))?;

    if !verify_password(&user.password_hash, &user.salt, &request.password) {
        warn!(email = %email, "비밀번호 불일치 로그인 시도");
        return Err(unauthorized("이메일 또는 비밀번호가 올바르지 않습니다"));
    }

    let role = Role::parse(&user.role)
        .ok_or_else(|| internal_error(format!("알 수 없는 역할: {}", user.role)))?;

    let response = issue_token(&state, user.id, &user.email, role)?;
    Ok(Json(response))
}

/// 내 정보 조회.
///
/// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "토큰 claims", body = UserInfo),
        (status = 401, description = "인증 실패", body = ApiErrorResponse)
    )
)]
pub async fn me(JwtAuth(claims): JwtAuth) -> Json<UserInfo> {
    Json(UserInfo {
        id: claims.sub,
        email: claims.email,
        role: claims.role.to_string(),
    })
}

/// 토큰 발급 공통 로직.
fn issue_token(
    state: &AppState,
    user_id: Uuid,
    email: &str,
    role: Role,
) -> Result<AuthResponse, (StatusCode, Json<ApiErrorResponse>)> {
    let claims = Claims::new(
        user_id.to_string(),
        email,
        role,
        state.config.auth.token_ttl_hours,
    );
    let token = create_token(&claims, &state.config.auth.secret_key)
        .map_err(|e| internal_error(format!("토큰 발급 실패: {}", e)))?;

    Ok(AuthResponse {
        token,
        user: UserInfo {
            id: user_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        },
    })
}

// ==================== 라우터 ====================

/// 인증 라우터 생성.
pub fn auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;
    use crate::state::create_test_state;
    use axum::{body::Body, http::Request, Extension};
    use tower::ServiceExt;

    fn auth_app(state: Arc<AppState>) -> Router {
        let secret = state.config.auth.secret_key.clone();
        Router::new()
            .nest("/auth", auth_router())
            .layer(Extension(JwtConfig::new(secret)))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_register_without_db_is_server_error() {
        let app = auth_app(Arc::new(create_test_state()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/register")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"email":"user@example.com","password":"password1"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_me_requires_auth() {
        let app = auth_app(Arc::new(create_test_state()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/auth/me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me_echoes_claims() {
        let state = Arc::new(create_test_state());
        let secret = state.config.auth.secret_key.clone();
        let app = auth_app(state);

        let claims = Claims::new("user-1", "user@example.com", Role::User, 24);
        let token = create_token(&claims, &secret).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/auth/me")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let info: UserInfo = serde_json::from_slice(&body).unwrap();

        assert_eq!(info.id, "user-1");
        assert_eq!(info.email, "user@example.com");
        assert_eq!(info.role, "user");
    }
}
