//! C ABI and JNI bindings for the signing callback.
//!
//! The C entry point captures its raw arguments into a
//! [`crate::sign::SignRequest`] and hands it to [`crate::sign::sign_stub`].

use std::os::raw::{c_int, c_uchar, c_uint};
use std::ptr;

use openssl_sys::{BIGNUM, RSA, RSA_get0_key, RSA_size};

use super::trampoline::called_from_callback;
use crate::logging;
use crate::sign::{KeyHandle, SignRequest, sign_stub};

// ============================================================================
// C FFI Functions
// ============================================================================

/// `rsa_sign` implementation exposed across the C ABI.
///
/// Installs the stderr logger on first use if the host has none, then logs
/// the request, calls [`called_from_callback`] and returns 1. Never
/// writes `sigret` or `siglen`.
///
/// # Safety
/// * `_m`, `sigret` and `siglen` are recorded as addresses only and may be
///   anything, including NULL.
/// * `rsa` must be NULL or a live `RSA *` for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rsa_sign_callback(
    xtype: c_int,
    _m: *const c_uchar,
    m_length: c_uint,
    sigret: *mut c_uchar,
    siglen: *mut c_uint,
    rsa: *const RSA,
) -> c_int {
    logging::ensure_init();

    let request = SignRequest {
        digest_type: xtype,
        digest_len: m_length,
        sigret: sigret as usize,
        siglen: siglen as usize,
        key: KeyHandle::from_ptr(rsa),
        modulus_bytes: unsafe { modulus_bytes(rsa) },
    };

    sign_stub(&request, || called_from_callback())
}

/// `RSA_size(rsa)`, or `None` for a NULL key or one without a modulus.
/// `RSA_size` dereferences the modulus, so it is checked first.
unsafe fn modulus_bytes(rsa: *const RSA) -> Option<c_int> {
    if rsa.is_null() {
        return None;
    }

    let mut n: *const BIGNUM = ptr::null();
    unsafe {
        RSA_get0_key(rsa, &mut n, ptr::null_mut(), ptr::null_mut());
        if n.is_null() {
            return None;
        }
        Some(RSA_size(rsa))
    }
}

// ============================================================================
// JNI Bindings (Android Only)
// ============================================================================

#[cfg(target_os = "android")]
use jni::JNIEnv;
#[cfg(target_os = "android")]
use jni::objects::JByteArray;
#[cfg(target_os = "android")]
use jni::sys::{jbyteArray, jclass, jint};

/// Runs the stub signer on a digest owned by the JVM. Returns the callback's
/// status, or 0 if the array cannot be read.
#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
pub extern "C" fn Java_expo_modules_rsasignbridge_RsaSignBridgeModule_signDigest(
    mut env: JNIEnv,
    _class: jclass,
    digest_type: jint,
    digest_byte_array: jbyteArray,
) -> jint {
    let digest_obj = unsafe { JByteArray::from_raw(digest_byte_array) };
    let digest = match env.convert_byte_array(&digest_obj) {
        Ok(d) => d,
        Err(_) => return 0,
    };

    let m_length = match c_uint::try_from(digest.len()) {
        Ok(len) => len,
        Err(_) => return 0,
    };

    let mut sigret = [0u8; 512];
    let mut siglen: c_uint = 0;

    unsafe {
        rsa_sign_callback(
            digest_type,
            digest.as_ptr(),
            m_length,
            sigret.as_mut_ptr(),
            &mut siglen,
            ptr::null(),
        )
    }
}

#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
pub extern "C" fn Java_expo_modules_rsasignbridge_RsaSignBridgeModule_keyContextSize(
    _env: JNIEnv,
    _class: jclass,
) -> jint {
    crate::sign::key_context_size() as jint
}
