//! 비밀번호 해싱 유틸리티.
//!
//! PBKDF2-HMAC-SHA256 (100,000회 반복, 256비트 출력) 기반
//! 해싱 및 검증. 해시와 솔트는 모두 hex 문자열로 다룹니다.
//!
//! 솔트는 무작위 16바이트를 hex 인코딩한 문자열이며, PBKDF2에는
//! 이 hex 문자열의 UTF-8 바이트가 입력됩니다. 검증 비교는
//! 타이밍 부채널을 피하기 위해 상수 시간으로 수행합니다.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// PBKDF2 반복 횟수.
const PBKDF2_ITERATIONS: u32 = 100_000;

/// 솔트 길이 (바이트, hex 인코딩 전).
const SALT_LEN: usize = 16;

/// 해시 출력 길이 (바이트).
const HASH_LEN: usize = 32;

/// 무작위 솔트 생성 (hex 문자열).
fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// 비밀번호 해싱.
///
/// 솔트를 제공하지 않으면 새로 생성합니다. 동일한 (비밀번호, 솔트)
/// 쌍에 대해 항상 동일한 해시를 반환합니다.
///
/// # Arguments
///
/// * `password` - 평문 비밀번호
/// * `salt` - 기존 솔트 (hex 문자열), 없으면 새로 생성
///
/// # Returns
///
/// `(hash_hex, salt_hex)` 튜플
pub fn hash_password(password: &str, salt: Option<&str>) -> (String, String) {
    let salt = match salt {
        Some(s) => s.to_string(),
        None => generate_salt(),
    };

    let mut output = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut output,
    );

    (hex::encode(output), salt)
}

/// 비밀번호 검증.
///
/// 저장된 해시와 같은 솔트로 재계산한 해시를 상수 시간으로
/// 비교합니다.
///
/// # Arguments
///
/// * `stored_hash` - 저장된 해시 (hex 문자열)
/// * `salt` - 저장된 솔트 (hex 문자열)
/// * `candidate` - 검증할 평문 비밀번호
pub fn verify_password(stored_hash: &str, salt: &str, candidate: &str) -> bool {
    let Ok(stored) = hex::decode(stored_hash) else {
        return false;
    };

    let mut computed = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(
        candidate.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut computed,
    );

    stored.len() == HASH_LEN && bool::from(stored.ct_eq(&computed))
}

/// 비밀번호 강도 검증.
///
/// # 요구사항
///
/// - 최소 8자 이상
/// - 최소 1개의 숫자 포함
/// - 최소 1개의 영문자 포함
pub fn validate_password_strength(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("비밀번호는 최소 8자 이상이어야 합니다");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("비밀번호에 최소 1개의 숫자가 포함되어야 합니다");
    }

    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("비밀번호에 최소 1개의 영문자가 포함되어야 합니다");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let (hash, salt) = hash_password("TestPassword123", None);

        assert_eq!(hash.len(), HASH_LEN * 2);
        assert_eq!(salt.len(), SALT_LEN * 2);

        assert!(verify_password(&hash, &salt, "TestPassword123"));
        assert!(!verify_password(&hash, &salt, "WrongPassword123"));
    }

    #[test]
    fn test_deterministic_with_same_salt() {
        let (hash1, salt) = hash_password("password1", None);
        let (hash2, salt2) = hash_password("password1", Some(&salt));

        assert_eq!(hash1, hash2);
        assert_eq!(salt, salt2);
    }

    #[test]
    fn test_fresh_salt_per_credential() {
        let (hash1, salt1) = hash_password("password1", None);
        let (hash2, salt2) = hash_password("password1", None);

        assert_ne!(salt1, salt2);
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_rejects_malformed_stored_hash() {
        assert!(!verify_password("not-hex!!", "abcd", "password"));
        assert!(!verify_password("abcd", "abcd", "password")); // 길이 불일치
    }

    #[test]
    fn test_unicode_password() {
        let (hash, salt) = hash_password("한글비밀번호123", None);
        assert!(verify_password(&hash, &salt, "한글비밀번호123"));
        assert!(!verify_password(&hash, &salt, "한글비밀번호124"));
    }

    #[test]
    fn test_password_strength_validation() {
        assert!(validate_password_strength("Password1").is_ok());
        assert!(validate_password_strength("Pass1").is_err());
        assert!(validate_password_strength("PasswordOnly").is_err());
        assert!(validate_password_strength("12345678").is_err());
        assert!(validate_password_strength("").is_err());
    }
}
