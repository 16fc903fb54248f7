//! 데이터 저장소.
//!
//! sqlx 기반 PostgreSQL 저장소 구현:
//! - [`UserRepository`]: 사용자 계정 (등록/조회)
//! - [`HistoryStore`]: 번역 히스토리 (trait, 테스트에서 대체 가능)
//! - [`PgHistoryStore`]: 히스토리의 PostgreSQL 구현

mod history;
mod users;

pub use history::{
    HistoryStore, NewTranslationRecord, PgHistoryStore, TranslationHistoryRecord,
};
pub use users::{NewUser, UserRecord, UserRepository};
