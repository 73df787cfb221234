//! Algorithm binding traits.

use crate::error::JwtResult;

/// Signing half of an algorithm binding.
///
/// Implementations close over private key material. The algorithm name is a
/// property of the type, so the header written on encode can never disagree
/// with the key that produced the signature.
pub trait TokenSigner {
    /// Header `alg` value.
    const ALGORITHM: &'static str;

    /// Number of signature bytes `sign` returns.
    fn signature_len(&self) -> usize;

    /// Sign the signing input.
    ///
    /// # Errors
    /// Returns `JwtError::SigningFailure` if the primitive cannot produce a
    /// signature. This is the only way signing fails.
    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>>;
}

/// Verifying half of an algorithm binding.
pub trait TokenVerifier {
    /// Header `alg` value this verifier accepts.
    const ALGORITHM: &'static str;

    /// Check `signature` over `message`.
    ///
    /// Signatures of the wrong length are rejected before the primitive runs.
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool;
}

impl<T: TokenSigner> TokenSigner for &T {
    const ALGORITHM: &'static str = T::ALGORITHM;

    fn signature_len(&self) -> usize {
        (**self).signature_len()
    }

    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        (**self).sign(message)
    }
}

impl<T: TokenVerifier> TokenVerifier for &T {
    const ALGORITHM: &'static str = T::ALGORITHM;

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        (**self).verify(message, signature)
    }
}
