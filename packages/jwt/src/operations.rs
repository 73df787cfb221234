//! One-call sign and verify per algorithm
//!
//! Thin wrappers that bind borrowed key material and run the engine. Use the
//! bindings in [`crate::algorithms`] with [`crate::engine`] directly to keep a
//! binding around across calls.

use crate::algorithms::{Es256Signer, Es256Verifier, Hs256, Rs256Signer, Rs256Verifier};
use crate::engine::{decode_and_verify, encode};
use crate::error::JwtResult;
use p256::ecdsa::{SigningKey, VerifyingKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Sign `claims` with HMAC-SHA256 under `secret`.
///
/// # Errors
/// `JwtError::Serialization` if `claims` cannot be encoded.
pub fn sign_hs256<C: Serialize + ?Sized>(secret: &[u8], claims: &C) -> JwtResult<String> {
    encode(&Hs256::new(secret), claims)
}

/// Verify an HS256 token and decode its claims.
///
/// # Errors
/// See [`decode_and_verify`].
pub fn verify_hs256<T: DeserializeOwned>(secret: &[u8], token: impl AsRef<[u8]>) -> JwtResult<T> {
    decode_and_verify(&Hs256::new(secret), token)
}

/// Sign `claims` with RSASSA-PKCS1-v1_5 SHA-256. Deterministic for a given
/// key and claim set.
///
/// # Errors
/// `JwtError::Serialization` if `claims` cannot be encoded,
/// `JwtError::SigningFailure` if the key cannot sign.
pub fn sign_rs256<C: Serialize + ?Sized>(key: &RsaPrivateKey, claims: &C) -> JwtResult<String> {
    encode(&Rs256Signer::new(key), claims)
}

/// Verify an RS256 token and decode its claims.
///
/// # Errors
/// See [`decode_and_verify`].
pub fn verify_rs256<T: DeserializeOwned>(
    key: &RsaPublicKey,
    token: impl AsRef<[u8]>,
) -> JwtResult<T> {
    decode_and_verify(&Rs256Verifier::new(key), token)
}

/// Sign `claims` with ECDSA P-256 SHA-256.
///
/// # Errors
/// `JwtError::Serialization` if `claims` cannot be encoded,
/// `JwtError::SigningFailure` if the key cannot sign.
pub fn sign_es256<C: Serialize + ?Sized>(key: &SigningKey, claims: &C) -> JwtResult<String> {
    encode(&Es256Signer::new(key), claims)
}

/// Verify an ES256 token and decode its claims.
///
/// # Errors
/// See [`decode_and_verify`].
pub fn verify_es256<T: DeserializeOwned>(
    key: &VerifyingKey,
    token: impl AsRef<[u8]>,
) -> JwtResult<T> {
    decode_and_verify(&Es256Verifier::new(key), token)
}
