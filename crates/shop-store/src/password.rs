//! Salted password digests.
//!
//! Stored form is `"{salt}${digest}"`, both lowercase hex. Verification
//! recomputes the digest and compares with `subtle::ConstantTimeEq`, so a
//! mismatch costs the same regardless of where the digests diverge.

use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::id::encode_hex;

const SALT_BYTES: usize = 16;

/// Hash a plaintext password with a fresh random salt.
pub fn hash(password: &str) -> String {
    let mut salt = [0u8; SALT_BYTES];
    OsRng.fill_bytes(&mut salt);
    let salt = encode_hex(&salt);
    let digest = digest_hex(&salt, password);
    format!("{salt}${digest}")
}

/// Verify a plaintext password against a stored `salt$digest` value.
///
/// An unparseable stored value verifies as false — never as an error, so
/// the authenticator's failure modes stay indistinguishable.
pub fn verify(password: &str, stored: &str) -> bool {
    let Some((salt, expected)) = stored.split_once('$') else {
        return false;
    };
    let candidate = digest_hex(salt, password);
    candidate.as_bytes().ct_eq(expected.as_bytes()).into()
}

fn digest_hex(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b"$");
    hasher.update(password.as_bytes());
    encode_hex(&hasher.finalize())
}
