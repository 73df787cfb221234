//! HS256: HMAC-SHA256 over a shared secret.

use crate::error::{JwtError, JwtResult};
use crate::traits::{TokenSigner, TokenVerifier};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha256 = Hmac<Sha256>;

/// `alg` value for HMAC-SHA256.
pub const HS256: &str = "HS256";

/// HMAC-SHA256 output size in bytes.
pub const HS256_SIGNATURE_LEN: usize = 32;

/// HS256 binding over a borrowed secret. Signs and verifies.
#[derive(Clone, Copy)]
pub struct Hs256<'k> {
    secret: &'k [u8],
}

impl<'k> Hs256<'k> {
    /// Bind `secret`. Any length is accepted, as HMAC allows.
    #[inline]
    #[must_use]
    pub fn new(secret: &'k [u8]) -> Self {
        Self { secret }
    }

    fn mac(&self, message: &[u8]) -> Result<HmacSha256, hmac::digest::InvalidLength> {
        let mut mac = HmacSha256::new_from_slice(self.secret)?;
        mac.update(message);
        Ok(mac)
    }
}

impl std::fmt::Debug for Hs256<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hs256").finish_non_exhaustive()
    }
}

impl TokenSigner for Hs256<'_> {
    const ALGORITHM: &'static str = HS256;

    fn signature_len(&self) -> usize {
        HS256_SIGNATURE_LEN
    }

    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        let mac = self
            .mac(message)
            .map_err(|e| JwtError::signing_failure(format!("HMAC key rejected: {e}")))?;
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

impl TokenVerifier for Hs256<'_> {
    const ALGORITHM: &'static str = HS256;

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        if signature.len() != HS256_SIGNATURE_LEN {
            return false;
        }
        let Ok(mac) = self.mac(message) else {
            return false;
        };
        let expected = mac.finalize().into_bytes();
        expected.as_slice().ct_eq(signature).into()
    }
}

/// Owned HS256 secret, wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hs256Secret(Vec<u8>);

impl Hs256Secret {
    /// Take ownership of secret bytes.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    /// Borrow the secret as a binding.
    #[inline]
    #[must_use]
    pub fn binding(&self) -> Hs256<'_> {
        Hs256::new(&self.0)
    }
}

impl std::fmt::Debug for Hs256Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Hs256Secret(..)")
    }
}
