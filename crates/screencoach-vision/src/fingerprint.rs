//! 인코딩 페이로드 다이제스트: 동일 프레임 재전송 방지용.

use screencoach_core::models::frame::Digest;
use sha2::{Digest as _, Sha256};

/// 페이로드 SHA-256
pub fn fingerprint(payload: &[u8]) -> Digest {
    let hash = Sha256::digest(payload);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Digest::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_and_content_sensitive() {
        assert_eq!(fingerprint(b"frame"), fingerprint(b"frame"));
        assert_ne!(fingerprint(b"frame"), fingerprint(b"frame!"));
    }

    #[test]
    fn known_vector() {
        assert_eq!(
            fingerprint(b"abc").to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            fingerprint(b"").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
