//! Algorithm bindings
//!
//! One module per supported algorithm. Each binding pairs a fixed `alg` name
//! with sign/verify over caller-supplied, already-parsed key material.

pub mod ecdsa;
pub mod hmac;
pub mod rsa;

pub use self::ecdsa::{
    COORDINATE_SIZE, ES256, ES256_SIGNATURE_LEN, EcdsaSignature, Es256Signer, Es256Verifier,
};
pub use self::hmac::{HS256, HS256_SIGNATURE_LEN, Hs256, Hs256Secret};
pub use self::rsa::{RS256, Rs256Signer, Rs256Verifier};
