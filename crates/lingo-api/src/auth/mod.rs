//! 인증 및 권한 부여.
//!
//! JWT 기반 인증 및 역할 기반 접근 제어를 제공합니다.
//!
//! # 구성 요소
//!
//! - [`Claims`]: JWT 페이로드 구조체
//! - [`Role`]: 사용자 역할 (Admin, User)
//! - [`JwtAuth`]: Axum 미들웨어용 JWT 검증 추출기
//! - [`AdminAuth`]: 관리자 권한을 요구하는 추출기
//! - PBKDF2 비밀번호 해싱/검증 함수
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! async fn protected_handler(
//!     JwtAuth(claims): JwtAuth,
//! ) -> impl IntoResponse {
//!     format!("Hello, {}!", claims.sub)
//! }
//! ```

mod jwt;
mod middleware;
mod password;
mod roles;

pub use jwt::{create_token, decode_token, Claims, JwtError};
pub use middleware::{require_role, AdminAuth, JwtAuth, JwtAuthError, JwtConfig};
pub use password::{hash_password, validate_password_strength, verify_password};
pub use roles::Role;
