//! FFI module - C ABI entry points, libcrypto declarations and JNI bindings.
//!
//! Control flow for a signing call: libcrypto `RSA_sign` →
//! [`trampoline::rsa_sign_trampoline`] → [`callback::rsa_sign_callback`] →
//! [`trampoline::called_from_callback`] → back out with status 1.

pub mod callback;
#[cfg(feature = "engine")]
pub mod engine;
pub mod sys;
pub mod trampoline;
