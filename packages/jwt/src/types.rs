//! JWT type definitions

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Value written to the `typ` header member.
pub const HEADER_TYPE_JWT: &str = "JWT";

/// JWT header structure.
///
/// Serializes as exactly `{"typ":"JWT","alg":"<ALG>"}`. On decode `typ` may be
/// absent and unknown members are ignored; only `alg` is ever inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header<'a> {
    /// Token type.
    #[serde(default, borrow)]
    pub typ: Cow<'a, str>,
    /// Algorithm used for signing.
    #[serde(borrow)]
    pub alg: Cow<'a, str>,
}

impl Header<'static> {
    /// Header for a token signed with `alg`.
    #[must_use]
    pub fn new(alg: &'static str) -> Self {
        Self {
            typ: Cow::Borrowed(HEADER_TYPE_JWT),
            alg: Cow::Borrowed(alg),
        }
    }
}
