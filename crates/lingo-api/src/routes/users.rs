//! 사용자 관리 endpoint (관리자 전용).
//!
//! # 엔드포인트
//!
//! - `GET /api/users` - 전체 사용자 목록 (admin 역할 필요)

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::AdminAuth;
use crate::error::{internal_error, ApiErrorResponse, ApiResult};
use crate::repository::UserRepository;
use crate::state::AppState;

/// 목록 조회 기본 개수.
const DEFAULT_LIST_LIMIT: i64 = 100;

/// 사용자 목록 항목 (자격증명 제외).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// 사용자 ID
    pub id: String,
    /// 이메일 주소
    pub email: String,
    /// 역할
    pub role: String,
    /// 가입 시각
    pub created_at: DateTime<Utc>,
}

/// 전체 사용자 목록 조회.
///
/// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "사용자 목록", body = Vec<UserSummary>),
        (status = 401, description = "인증 실패", body = ApiErrorResponse),
        (status = 403, description = "admin 역할 필요", body = ApiErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    AdminAuth(_claims): AdminAuth,
) -> ApiResult<Json<Vec<UserSummary>>> {
    let pool = state
        .db_pool
        .as_ref()
        .ok_or_else(|| internal_error("데이터베이스가 설정되지 않았습니다"))?;

    let users = UserRepository::list(pool, DEFAULT_LIST_LIMIT)
        .await
        .map_err(|e| internal_error(format!("사용자 목록 조회 실패: {}", e)))?;

    let summaries = users
        .into_iter()
        .map(|u| UserSummary {
            id: u.id.to_string(),
            email: u.email,
            role: u.role,
            created_at: u.created_at,
        })
        .collect();

    Ok(Json(summaries))
}

/// 사용자 관리 라우터 생성.
pub fn users_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_users))
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

    fn users_app(state: Arc<AppState>) -> Router {
        let secret = state.config.auth.secret_key.clone();
        Router::new()
            .nest("/users", users_router())
            .layer(Extension(JwtConfig::new(secret)))
            .with_state(state)
    }

    async fn send(app: Router, auth: Option<&str>) -> StatusCode {
        let mut builder = Request::builder().uri("/users");
        if let Some(value) = auth {
            builder = builder.header("Authorization", value);
        }
        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_list_requires_auth() {
        let app = users_app(Arc::new(create_test_state()));
        assert_eq!(send(app, None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_rejects_non_admin() {
        let state = Arc::new(create_test_state());
        let claims = Claims::new("u1", "user@example.com", Role::User, 24);
        let token = create_token(&claims, &state.config.auth.secret_key).unwrap();
        let app = users_app(state);

        let status = send(app, Some(&format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_list_admin_without_db_is_server_error() {
        let state = Arc::new(create_test_state());
        let claims = Claims::new("a1", "admin@example.com", Role::Admin, 24);
        let token = create_token(&claims, &state.config.auth.secret_key).unwrap();
        let app = users_app(state);

        // 역할 검사는 통과하고 DB 부재로 500
        let status = send(app, Some(&format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
