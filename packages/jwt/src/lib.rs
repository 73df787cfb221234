//! Compact JSON Web Tokens with HS256, RS256 and ES256
//!
//! This crate provides:
//! - Encoding of any `Serialize` claim set into a signed compact token
//! - Signature verification that strictly precedes claim decoding
//! - `exp` / `nbf` checks against a caller-supplied clock
//!
//! Each algorithm is its own binding type. A token whose header names a
//! different algorithm than the verifier's binding is rejected exactly like a
//! bad signature, so there is no `alg` negotiation and no `none`.
//!
//! ```
//! use strict_jwt::{StandardClaims, sign_hs256, verify_hs256};
//!
//! let claims = StandardClaims::new().with_subject("jdoe@example.com");
//! let token = sign_hs256(b"my secret key", &claims)?;
//! let back: StandardClaims = verify_hs256(b"my secret key", &token)?;
//! assert_eq!(back.sub, "jdoe@example.com");
//! # Ok::<(), strict_jwt::JwtError>(())
//! ```

#![forbid(unsafe_code)]

pub mod algorithms;
pub mod claims;
pub mod engine;
mod error;
pub mod operations;
pub mod segments;
pub mod traits;
mod types;
pub mod validation;

pub use algorithms::{
    EcdsaSignature, Es256Signer, Es256Verifier, Hs256, Hs256Secret, Rs256Signer, Rs256Verifier,
};
pub use claims::StandardClaims;
pub use engine::{decode_and_verify, encode};
pub use error::*;
pub use operations::{
    sign_es256, sign_hs256, sign_rs256, verify_es256, verify_hs256, verify_rs256,
};
pub use traits::{TokenSigner, TokenVerifier};
pub use types::*;
pub use validation::{verify_expiration_time, verify_not_before};
