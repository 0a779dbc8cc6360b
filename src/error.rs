//! Errors raised while building the RSA method table or registering the engine.
//!
//! The signing callback itself has no error path; everything here happens
//! before libcrypto ever calls into the bridge.

use std::os::raw::c_int;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("RSA_meth_dup returned NULL")]
    MethodAlloc,
    #[error("RSA_meth_{0} failed")]
    MethodSetter(&'static str),
    #[error("ENGINE_new returned NULL")]
    EngineAlloc,
    #[error("ENGINE_set_id failed")]
    SetId,
    #[error("ENGINE_set_name failed")]
    SetName,
    #[error("ENGINE_set_RSA failed")]
    SetRsa,
    #[error("ENGINE_add failed")]
    Add,
    #[error("ENGINE_remove failed")]
    Remove,
    #[error("engine id mismatch: requested {requested:?}, this engine is {expected:?}")]
    IdMismatch { requested: String, expected: String },
}

/// OpenSSL convention: 1 on success, 0 on failure.
#[cfg_attr(not(feature = "engine"), allow(dead_code))]
pub(crate) fn map_error(e: &EngineError) -> c_int {
    log::error!("rsa-sign-bridge: {e}");
    0
}
