//! The native side of the bridge.
//!
//! [`rsa_sign_trampoline`] is what gets stored in the `rsa_sign` slot of the
//! method table; it forwards to [`rsa_sign_callback`] untouched.
//! [`called_from_callback`] exists only so the callback can prove it can reach
//! back across the boundary.

use std::os::raw::{c_int, c_uchar, c_uint};

use openssl_sys::RSA;

use super::callback::rsa_sign_callback;
use super::sys::RsaSignFn;

/// Function pointer installed into `RSA_METHOD`.
pub const RSA_SIGN_TRAMPOLINE: RsaSignFn = rsa_sign_trampoline;

/// `rsa_sign` entry point handed to libcrypto.
///
/// # Safety
/// Same contract as [`rsa_sign_callback`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rsa_sign_trampoline(
    xtype: c_int,
    m: *const c_uchar,
    m_length: c_uint,
    sigret: *mut c_uchar,
    siglen: *mut c_uint,
    rsa: *const RSA,
) -> c_int {
    unsafe { rsa_sign_callback(xtype, m, m_length, sigret, siglen, rsa) }
}

/// Reverse-reachability probe called by the signing callback.
#[unsafe(no_mangle)]
pub extern "C" fn called_from_callback() {
    log::info!("called_from_callback: reached native side");
}
