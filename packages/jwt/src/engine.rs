//! Token engine: the encode and decode-and-verify pipelines
//!
//! Stateless. Decoding is strictly `split → header → algorithm → signature →
//! claims`; the claims segment is not even base64-decoded until the signature
//! over it has been accepted.

use crate::error::{JwtError, JwtResult};
use crate::segments::{Segments, decode_segment, encode_segment, encoded_len};
use crate::traits::{TokenSigner, TokenVerifier};
use crate::types::Header;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Serialize `claims`, sign them with `signer` and return the compact token.
///
/// # Errors
/// `JwtError::Serialization` if `claims` cannot be encoded as JSON,
/// `JwtError::SigningFailure` if the primitive fails.
pub fn encode<S, C>(signer: &S, claims: &C) -> JwtResult<String>
where
    S: TokenSigner,
    C: Serialize + ?Sized,
{
    let header_json = serde_json::to_vec(&Header::new(S::ALGORITHM))?;
    let claims_json = serde_json::to_vec(claims)?;

    let signing_len = encoded_len(header_json.len()) + 1 + encoded_len(claims_json.len());
    let mut token =
        String::with_capacity(signing_len + 1 + encoded_len(signer.signature_len()));
    encode_segment(&header_json, &mut token);
    token.push('.');
    encode_segment(&claims_json, &mut token);

    let signature = signer.sign(token.as_bytes()).map_err(|e| {
        debug!(alg = S::ALGORITHM, error = %e, "signing failed");
        e
    })?;

    token.push('.');
    encode_segment(&signature, &mut token);

    trace!(alg = S::ALGORITHM, len = token.len(), "token encoded");
    Ok(token)
}

/// Verify `token` with `verifier` and only then deserialize its claims.
///
/// # Errors
/// - `JwtError::MalformedToken` if the token lacks two separators or the
///   header/claims segment is not base64url
/// - `JwtError::Serialization` if the header or claims JSON does not parse
/// - `JwtError::InvalidSignature` if the header names another algorithm or
///   the signature does not check out
pub fn decode_and_verify<V, T>(verifier: &V, token: impl AsRef<[u8]>) -> JwtResult<T>
where
    V: TokenVerifier,
    T: DeserializeOwned,
{
    let segments = Segments::split(token.as_ref()).map_err(|e| {
        debug!(stage = "split", alg = V::ALGORITHM, "rejecting token");
        e
    })?;

    let header_json = decode_segment(segments.header()).map_err(|_| {
        debug!(stage = "header", alg = V::ALGORITHM, "header is not base64url");
        JwtError::malformed("header segment is not base64url")
    })?;
    let header: Header<'_> = serde_json::from_slice(&header_json).map_err(|e| {
        debug!(stage = "header", alg = V::ALGORITHM, "header is not valid JSON");
        JwtError::from(e)
    })?;

    if header.alg != V::ALGORITHM {
        debug!(stage = "algorithm", alg = V::ALGORITHM, "header algorithm mismatch");
        return Err(JwtError::InvalidSignature);
    }

    let Ok(signature) = decode_segment(segments.signature()) else {
        debug!(stage = "signature", alg = V::ALGORITHM, "signature is not base64url");
        return Err(JwtError::InvalidSignature);
    };
    if !verifier.verify(segments.signing_input(), &signature) {
        debug!(stage = "signature", alg = V::ALGORITHM, "signature rejected");
        return Err(JwtError::InvalidSignature);
    }

    let claims_json = decode_segment(segments.claims()).map_err(|_| {
        debug!(stage = "claims", alg = V::ALGORITHM, "claims are not base64url");
        JwtError::malformed("claims segment is not base64url")
    })?;
    let claims = serde_json::from_slice(&claims_json).map_err(|e| {
        debug!(stage = "claims", alg = V::ALGORITHM, "claims do not match target type");
        JwtError::from(e)
    })?;

    trace!(alg = V::ALGORITHM, "token verified");
    Ok(claims)
}
