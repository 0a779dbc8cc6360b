//! # RSA sign bridge
//!
//! Registers a Rust function as the `rsa_sign` callback of an OpenSSL
//! `RSA_METHOD` and shows libcrypto calling into it. The callback is a stub:
//! it logs what it was given, calls back across the boundary once and reports
//! success without writing a signature.
//!
//! ## Modules
//!
//! * `sign` - The stub signer and the request it observes.
//! * `method` - The bridged `RSA_METHOD` table.
//! * `engine` - Process-wide ENGINE registration (feature `engine`).
//! * `ffi` - C ABI entry points, libcrypto declarations and JNI bindings.
//! * `digest` - Digest NID identification for diagnostics.
//! * `config`, `logging`, `error` - Ambient plumbing.

pub mod config;
pub mod digest;
#[cfg(feature = "engine")]
pub mod engine;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod method;
pub mod sign;
