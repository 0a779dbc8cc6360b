//! libcrypto declarations the bridge needs beyond what `openssl-sys` binds.
//!
//! Linking is handled by `openssl-sys`, which already pulls in libcrypto.

#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_int, c_uchar, c_uint};

use openssl_sys::RSA;
#[cfg(feature = "engine")]
use openssl_sys::ENGINE;

/// Opaque `RSA_METHOD` table.
#[repr(C)]
pub struct RSA_METHOD {
    _private: [u8; 0],
}

/// Signature of the `rsa_sign` slot in `RSA_METHOD`.
pub type RsaSignFn = unsafe extern "C" fn(
    c_int,
    *const c_uchar,
    c_uint,
    *mut c_uchar,
    *mut c_uint,
    *const RSA,
) -> c_int;

/// Advertises that the method implements `rsa_sign`. Ignored by 1.1+, which
/// dispatches whenever the slot is non-NULL, but required by 1.0.
pub const RSA_FLAG_SIGN_VER: c_int = 0x0040;

unsafe extern "C" {
    pub fn RSA_PKCS1_OpenSSL() -> *const RSA_METHOD;
    pub fn RSA_meth_dup(meth: *const RSA_METHOD) -> *mut RSA_METHOD;
    pub fn RSA_meth_free(meth: *mut RSA_METHOD);
    pub fn RSA_meth_set1_name(meth: *mut RSA_METHOD, name: *const c_char) -> c_int;
    pub fn RSA_meth_get0_name(meth: *const RSA_METHOD) -> *const c_char;
    pub fn RSA_meth_get_flags(meth: *const RSA_METHOD) -> c_int;
    pub fn RSA_meth_set_flags(meth: *mut RSA_METHOD, flags: c_int) -> c_int;
    pub fn RSA_meth_get_sign(meth: *const RSA_METHOD) -> Option<RsaSignFn>;
    pub fn RSA_meth_set_sign(meth: *mut RSA_METHOD, sign: Option<RsaSignFn>) -> c_int;

    pub fn RSA_set_method(rsa: *mut RSA, meth: *const RSA_METHOD) -> c_int;
    pub fn RSA_get_method(rsa: *const RSA) -> *const RSA_METHOD;
    pub fn RSA_sign(
        kind: c_int,
        m: *const c_uchar,
        m_length: c_uint,
        sigret: *mut c_uchar,
        siglen: *mut c_uint,
        rsa: *mut RSA,
    ) -> c_int;
}

#[cfg(feature = "engine")]
unsafe extern "C" {
    pub fn ENGINE_new() -> *mut ENGINE;
    pub fn ENGINE_free(e: *mut ENGINE) -> c_int;
    pub fn ENGINE_add(e: *mut ENGINE) -> c_int;
    pub fn ENGINE_remove(e: *mut ENGINE) -> c_int;
    pub fn ENGINE_by_id(id: *const c_char) -> *mut ENGINE;
    pub fn ENGINE_set_id(e: *mut ENGINE, id: *const c_char) -> c_int;
    pub fn ENGINE_set_name(e: *mut ENGINE, name: *const c_char) -> c_int;
    pub fn ENGINE_set_RSA(e: *mut ENGINE, rsa_meth: *const RSA_METHOD) -> c_int;
    pub fn ENGINE_get_id(e: *const ENGINE) -> *const c_char;
    pub fn ENGINE_get_name(e: *const ENGINE) -> *const c_char;
    pub fn ENGINE_get_RSA(e: *const ENGINE) -> *const RSA_METHOD;
}
