//! ES256: ECDSA over P-256 with SHA-256.
//!
//! The wire signature is the fixed-width `r || s` form, each scalar
//! left-padded with zeros to the curve's 32-byte coordinate size. DER is
//! never produced or accepted.

use crate::error::{JwtError, JwtResult};
use crate::traits::{TokenSigner, TokenVerifier};
use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};

/// `alg` value for ECDSA P-256 SHA-256.
pub const ES256: &str = "ES256";

/// Byte width of one P-256 coordinate / scalar.
pub const COORDINATE_SIZE: usize = 32;

/// Byte length of an ES256 signature.
pub const ES256_SIGNATURE_LEN: usize = 2 * COORDINATE_SIZE;

/// Fixed-width ES256 signature, `r || s`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EcdsaSignature([u8; ES256_SIGNATURE_LEN]);

impl EcdsaSignature {
    /// Build from big-endian scalar components of any width up to
    /// `COORDINATE_SIZE` after stripping leading zeros.
    #[must_use]
    pub fn from_components(r: &[u8], s: &[u8]) -> Option<Self> {
        let mut out = [0u8; ES256_SIGNATURE_LEN];
        left_pad_into(r, &mut out[..COORDINATE_SIZE])?;
        left_pad_into(s, &mut out[COORDINATE_SIZE..])?;
        Some(Self(out))
    }

    /// The `r` component.
    #[inline]
    #[must_use]
    pub fn r(&self) -> &[u8] {
        &self.0[..COORDINATE_SIZE]
    }

    /// The `s` component.
    #[inline]
    #[must_use]
    pub fn s(&self) -> &[u8] {
        &self.0[COORDINATE_SIZE..]
    }

    /// Raw wire bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ES256_SIGNATURE_LEN] {
        &self.0
    }
}

fn left_pad_into(component: &[u8], dst: &mut [u8]) -> Option<()> {
    let first = component
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(component.len());
    let trimmed = &component[first..];
    if trimmed.len() > dst.len() {
        return None;
    }
    let offset = dst.len() - trimmed.len();
    dst[offset..].copy_from_slice(trimmed);
    Some(())
}

impl TryFrom<&[u8]> for EcdsaSignature {
    type Error = JwtError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let fixed: [u8; ES256_SIGNATURE_LEN] =
            bytes.try_into().map_err(|_| JwtError::InvalidSignature)?;
        Ok(Self(fixed))
    }
}

impl From<Signature> for EcdsaSignature {
    fn from(signature: Signature) -> Self {
        let mut out = [0u8; ES256_SIGNATURE_LEN];
        out.copy_from_slice(&signature.to_bytes());
        Self(out)
    }
}

impl std::fmt::Debug for EcdsaSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EcdsaSignature(")?;
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}

/// ES256 signing binding over a borrowed P-256 private key.
#[derive(Clone, Copy)]
pub struct Es256Signer<'k> {
    key: &'k SigningKey,
}

impl<'k> Es256Signer<'k> {
    /// Bind an already-parsed private key.
    #[inline]
    #[must_use]
    pub fn new(key: &'k SigningKey) -> Self {
        Self { key }
    }
}

impl TokenSigner for Es256Signer<'_> {
    const ALGORITHM: &'static str = ES256;

    fn signature_len(&self) -> usize {
        ES256_SIGNATURE_LEN
    }

    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        let signature: Signature = self
            .key
            .try_sign(message)
            .map_err(|e| JwtError::signing_failure(format!("ECDSA signing failed: {e}")))?;
        Ok(EcdsaSignature::from(signature).as_bytes().to_vec())
    }
}

/// ES256 verifying binding over a borrowed P-256 public key.
#[derive(Clone, Copy)]
pub struct Es256Verifier<'k> {
    key: &'k VerifyingKey,
}

impl<'k> Es256Verifier<'k> {
    /// Bind an already-parsed public key.
    #[inline]
    #[must_use]
    pub fn new(key: &'k VerifyingKey) -> Self {
        Self { key }
    }
}

impl TokenVerifier for Es256Verifier<'_> {
    const ALGORITHM: &'static str = ES256;

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(fixed) = EcdsaSignature::try_from(signature) else {
            return false;
        };
        // Rejects zero or out-of-range scalars
        let Ok(signature) = Signature::from_slice(fixed.as_bytes()) else {
            return false;
        };
        self.key.verify(message, &signature).is_ok()
    }
}

impl std::fmt::Debug for Es256Signer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Es256Signer").finish_non_exhaustive()
    }
}

impl std::fmt::Debug for Es256Verifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Es256Verifier").finish_non_exhaustive()
    }
}
