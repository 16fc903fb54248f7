//! 역할 기반 접근 제어.
//!
//! 사용자 역할 정의. 토큰의 역할 비교는 대소문자를 구분하는
//! 정확한 문자열 일치입니다.

use serde::{Deserialize, Serialize};

/// 사용자 역할.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 관리자 - 사용자 관리 등 모든 권한 보유
    Admin,
    /// 일반 사용자 - 번역/히스토리 접근 권한
    User,
}

impl Role {
    /// 문자열에서 역할 파싱 (대소문자 구분).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Admin => "admin",
            Role::User => "user",
        };
        write!(f, "{}", s)
    }
}
