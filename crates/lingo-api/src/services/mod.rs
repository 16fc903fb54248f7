//! 비즈니스 서비스.

mod translation;

pub use translation::TranslationService;
