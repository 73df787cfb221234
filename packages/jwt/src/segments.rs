//! Segment codec: splitting and joining the three base64url parts of a token
//!
//! Knows nothing about cryptography. The only invariant it owns is the
//! signing input: exactly `header "." claims`, taken verbatim from the token.

use crate::error::{JwtError, JwtResult};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

/// Segment separator.
pub const SEPARATOR: u8 = b'.';

/// The three segments of a token, borrowed from the token bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'t> {
    token: &'t [u8],
    header_end: usize,
    claims_end: usize,
}

impl<'t> Segments<'t> {
    /// Locate the two structural separators.
    ///
    /// Only the first `.` and the next `.` after it are structural; anything
    /// past the second separator belongs to the signature segment.
    pub fn split(token: &'t [u8]) -> JwtResult<Self> {
        let header_end = find_separator(token, 0)
            .ok_or(JwtError::MalformedToken("missing header separator"))?;
        let claims_end = find_separator(token, header_end + 1)
            .ok_or(JwtError::MalformedToken("missing claims separator"))?;

        Ok(Self {
            token,
            header_end,
            claims_end,
        })
    }

    /// Encoded header segment.
    #[inline]
    #[must_use]
    pub fn header(&self) -> &'t [u8] {
        &self.token[..self.header_end]
    }

    /// Encoded claims segment.
    #[inline]
    #[must_use]
    pub fn claims(&self) -> &'t [u8] {
        &self.token[self.header_end + 1..self.claims_end]
    }

    /// Encoded signature segment.
    #[inline]
    #[must_use]
    pub fn signature(&self) -> &'t [u8] {
        &self.token[self.claims_end + 1..]
    }

    /// `header "." claims`, the exact bytes covered by the signature.
    #[inline]
    #[must_use]
    pub fn signing_input(&self) -> &'t [u8] {
        &self.token[..self.claims_end]
    }
}

#[inline]
fn find_separator(token: &[u8], from: usize) -> Option<usize> {
    token
        .get(from..)?
        .iter()
        .position(|&b| b == SEPARATOR)
        .map(|pos| from + pos)
}

/// Unpadded base64url length of `len` input bytes.
#[inline]
#[must_use]
pub const fn encoded_len(len: usize) -> usize {
    let full = len / 3 * 4;
    match len % 3 {
        0 => full,
        1 => full + 2,
        _ => full + 3,
    }
}

/// Append the unpadded base64url encoding of `input` to `out`.
#[inline]
pub fn encode_segment(input: &[u8], out: &mut String) {
    URL_SAFE_NO_PAD.encode_string(input, out);
}

/// Decode one unpadded base64url segment.
#[inline]
pub fn decode_segment(segment: &[u8]) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(segment)
}
