//! Registered claim set
//!
//! `StandardClaims` carries the registered claim names. Application claims
//! live in the caller's own struct, which embeds `StandardClaims` with
//! `#[serde(flatten)]`.

use crate::error::JwtResult;
use crate::validation::{verify_expiration_time, verify_not_before};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[inline]
fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// Registered claims.
///
/// Every member is omitted from JSON when it holds its zero value and
/// defaults to that zero value when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardClaims {
    /// Issuer.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub iss: String,
    /// Subject.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub: String,
    /// Audience.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub aud: String,
    /// Expiry (unix seconds).
    #[serde(skip_serializing_if = "is_zero")]
    pub exp: i64,
    /// Not before (unix seconds).
    #[serde(skip_serializing_if = "is_zero")]
    pub nbf: i64,
    /// Issued-at (unix seconds).
    #[serde(skip_serializing_if = "is_zero")]
    pub iat: i64,
    /// JWT ID.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub jti: String,
}

impl StandardClaims {
    /// Empty claim set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set issuer.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.iss = issuer.into();
        self
    }

    /// Set subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.sub = subject.into();
        self
    }

    /// Set audience.
    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.aud = audience.into();
        self
    }

    /// Set JWT ID.
    #[must_use]
    pub fn with_jwt_id(mut self, jti: impl Into<String>) -> Self {
        self.jti = jti.into();
        self
    }

    /// Set expiry. Sub-second precision is dropped.
    #[must_use]
    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.exp = at.timestamp();
        self
    }

    /// Set not-before. Sub-second precision is dropped.
    #[must_use]
    pub fn not_before_at(mut self, at: DateTime<Utc>) -> Self {
        self.nbf = at.timestamp();
        self
    }

    /// Set issued-at. Sub-second precision is dropped.
    #[must_use]
    pub fn issued_at_time(mut self, at: DateTime<Utc>) -> Self {
        self.iat = at.timestamp();
        self
    }

    /// Check `exp` against `now`. An absent `exp` reads as zero, i.e. the
    /// epoch, so callers that allow open-ended tokens must check for that
    /// themselves.
    ///
    /// # Errors
    /// `JwtError::ExpiredToken` if `now` is strictly after `exp`.
    pub fn verify_expiration_time(&self, now: DateTime<Utc>) -> JwtResult<()> {
        verify_expiration_time(self.exp, now)
    }

    /// Check `nbf` against `now`.
    ///
    /// # Errors
    /// `JwtError::ExpiredToken` if `now` is strictly before `nbf`.
    pub fn verify_not_before(&self, now: DateTime<Utc>) -> JwtResult<()> {
        verify_not_before(self.nbf, now)
    }
}
