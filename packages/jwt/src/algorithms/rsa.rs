//! RS256: RSASSA-PKCS1-v1_5 with SHA-256.

use crate::error::{JwtError, JwtResult};
use crate::traits::{TokenSigner, TokenVerifier};
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

/// `alg` value for RSA PKCS#1 v1.5 with SHA-256.
pub const RS256: &str = "RS256";

/// RS256 signing binding over a borrowed private key.
#[derive(Clone, Copy)]
pub struct Rs256Signer<'k> {
    key: &'k RsaPrivateKey,
}

impl<'k> Rs256Signer<'k> {
    /// Bind an already-parsed private key.
    #[inline]
    #[must_use]
    pub fn new(key: &'k RsaPrivateKey) -> Self {
        Self { key }
    }
}

impl TokenSigner for Rs256Signer<'_> {
    const ALGORITHM: &'static str = RS256;

    fn signature_len(&self) -> usize {
        self.key.size()
    }

    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        let hashed = Sha256::digest(message);
        self.key
            .sign(Pkcs1v15Sign::new::<Sha256>(), &hashed)
            .map_err(|e| JwtError::signing_failure(format!("RSA signing failed: {e}")))
    }
}

/// RS256 verifying binding over a borrowed public key.
#[derive(Clone, Copy)]
pub struct Rs256Verifier<'k> {
    key: &'k RsaPublicKey,
}

impl<'k> Rs256Verifier<'k> {
    /// Bind an already-parsed public key.
    #[inline]
    #[must_use]
    pub fn new(key: &'k RsaPublicKey) -> Self {
        Self { key }
    }
}

impl TokenVerifier for Rs256Verifier<'_> {
    const ALGORITHM: &'static str = RS256;

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        // PKCS#1 v1.5 signatures are exactly as long as the modulus
        if signature.len() != self.key.size() {
            return false;
        }
        let hashed = Sha256::digest(message);
        self.key
            .verify(Pkcs1v15Sign::new::<Sha256>(), &hashed, signature)
            .is_ok()
    }
}

impl std::fmt::Debug for Rs256Signer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rs256Signer")
            .field("bits", &(self.key.size() * 8))
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for Rs256Verifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rs256Verifier")
            .field("bits", &(self.key.size() * 8))
            .finish()
    }
}
