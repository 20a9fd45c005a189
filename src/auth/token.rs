// src/auth/token.rs

//! Session token material. The browser holds the raw token in its cookie;
//! the `sessions` table only ever sees the SHA-256 digest.

use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SESSION_TOKEN_BYTES: usize = 32;

/// Fresh session token from the OS RNG.
pub fn generate_token_default() -> String {
    generate_token(&mut OsRng, SESSION_TOKEN_BYTES)
}

/// `nbytes` of randomness as unpadded URL-safe base64, so it can sit in a
/// cookie value without quoting.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// Lookup key for a session row.
pub fn hash_token(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}
