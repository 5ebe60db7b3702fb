//! Hash related utils.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

/// Hex encoded SHA256 digest of `content`.
pub fn hex_sha256(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content).as_slice())
}

/// HMAC-SHA256 of `content` under `key`.
pub fn hmac_sha256(key: &[u8], content: &[u8]) -> Vec<u8> {
    hmac_sha256_digest(key, content).as_ref().to_vec()
}

/// Hex encoded HMAC-SHA256 of `content` under `key`.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    hex::encode(hmac_sha256_digest(key, content))
}

fn hmac_sha256_digest(key: &[u8], content: &[u8]) -> impl AsRef<[u8]> {
    // new_from_slice accepts keys of any length.
    let mut mac =
        Hmac::<Sha256>::new_from_slice(key).expect("hmac must accept key of any length");
    mac.update(content);
    mac.finalize().into_bytes()
}
