//! # subkey-core — Subscription Envelope Codec
//!
//! Defines how a subscription JSON document is bound to a digital
//! signature and serialized for transport as a single opaque string, the
//! "subscription key".
//!
//! Forward path: subscription JSON, canonical bytes, injected signer,
//! two-field envelope, base64 transport string. Reverse path: transport
//! string, envelope, payload and signature bytes, injected verifier.
//!
//! ## Crate Policy
//!
//! - No cryptography here: signing and verification are injected
//!   capabilities (`subkey-crypto` provides the SSH-backed ones).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod capacity;
pub mod envelope;
pub mod error;
pub mod signing;
pub mod stream;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use capacity::{inject_capacity, CAPACITY_FIELD, DEFAULT_CAPACITY_GB};
pub use envelope::{DecodedEnvelope, Envelope, SubscriptionKey};
pub use error::{CodecError, SignError, VerifyError};
pub use signing::{encode, verify, Signer, Verifier};
pub use stream::scan_lenient;
