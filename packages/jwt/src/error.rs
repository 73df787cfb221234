//! JWT error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
///
/// `InvalidSignature` carries no detail: a token signed with the
/// wrong algorithm, a signature that does not decode, a signature of the wrong
/// length and a signature that fails the cryptographic check are all reported
/// the same way.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token is not three base64url segments
    #[error("Malformed JWT: {0}")]
    MalformedToken(&'static str),

    /// Signature or algorithm check failed
    #[error("Invalid JWT signature")]
    InvalidSignature,

    /// Header or claims JSON could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The underlying primitive could not produce a signature
    #[error("Signing error: {0}")]
    SigningFailure(String),

    /// Time-based claim check failed
    #[error("JWT token has expired")]
    ExpiredToken,
}

impl JwtError {
    /// Create a malformed token error
    #[inline]
    #[must_use]
    pub fn malformed(reason: &'static str) -> Self {
        JwtError::MalformedToken(reason)
    }

    /// Create a signing failure error
    #[inline]
    #[must_use]
    pub fn signing_failure(msg: impl Into<String>) -> Self {
        JwtError::SigningFailure(msg.into())
    }

    /// Whether this error means "reject the token".
    ///
    /// Production request paths should treat every rejection the same way
    /// instead of branching on the variant.
    #[inline]
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            JwtError::MalformedToken(_) | JwtError::InvalidSignature | JwtError::Serialization(_)
        )
    }
}
