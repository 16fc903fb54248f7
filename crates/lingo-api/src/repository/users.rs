//! 사용자 저장소.
//!
//! 사용자 계정 레코드를 관리합니다. 비밀번호는 PBKDF2 해시와
//! 솔트(hex 문자열)로만 저장되며, 평문은 어디에도 남지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// 사용자 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub salt: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// 사용자 생성 입력.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub salt: String,
    pub role: String,
}

/// 사용자 저장소.
pub struct UserRepository;

impl UserRepository {
    /// 사용자 생성.
    ///
    /// 이메일 고유 제약 위반 시 `sqlx::Error::Database`를 반환합니다.
    pub async fn create(pool: &PgPool, input: NewUser) -> Result<UserRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash, salt, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.salt)
        .bind(&input.role)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// 이메일로 사용자 조회.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT * FROM users WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// 전체 사용자 목록 조회 (관리자용).
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT * FROM users ORDER BY created_at DESC LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// 비밀번호 변경.
    ///
    /// 해시와 솔트를 단일 UPDATE로 함께 교체합니다.
    pub async fn update_password(
        pool: &PgPool,
        user_id: Uuid,
        password_hash: &str,
        salt: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users SET password_hash = $2, salt = $3 WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(password_hash)
        .bind(salt)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
