//! Time-based claim checks.
//!
//! Pure functions of the claim value and a caller-supplied `now`. There is no
//! leeway; shift `now` to tolerate clock skew.

use crate::error::{JwtError, JwtResult};
use chrono::{DateTime, Utc};

/// Fail with `ExpiredToken` if `now` is strictly after `exp` (Unix seconds).
///
/// `now == exp` is still valid; any fraction of a second past it is not.
pub fn verify_expiration_time(exp: i64, now: DateTime<Utc>) -> JwtResult<()> {
    let secs = now.timestamp();
    if secs > exp || (secs == exp && now.timestamp_subsec_nanos() > 0) {
        return Err(JwtError::ExpiredToken);
    }
    Ok(())
}

/// Fail with `ExpiredToken` if `now` is strictly before `nbf` (Unix seconds).
///
/// `now == nbf` is already valid.
pub fn verify_not_before(nbf: i64, now: DateTime<Utc>) -> JwtResult<()> {
    // timestamp() floors, so any instant inside the second before nbf lands below it
    if now.timestamp() < nbf {
        return Err(JwtError::ExpiredToken);
    }
    Ok(())
}
