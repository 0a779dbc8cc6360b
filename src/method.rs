//! Owned `RSA_METHOD` whose `rsa_sign` slot points at the trampoline.

use std::ffi::CStr;
use std::ptr::NonNull;

use openssl_sys::RSA;

use crate::error::EngineError;
use crate::ffi::sys::{
    RSA_FLAG_SIGN_VER, RSA_METHOD, RSA_PKCS1_OpenSSL, RSA_meth_dup, RSA_meth_free,
    RSA_meth_get_flags, RSA_meth_get_sign, RSA_meth_set_flags, RSA_meth_set_sign,
    RSA_meth_set1_name, RSA_set_method, RsaSignFn,
};
use crate::ffi::trampoline::RSA_SIGN_TRAMPOLINE;

/// A heap-allocated method table, freed on drop.
///
/// Every operation except `rsa_sign` is inherited from libcrypto's default
/// PKCS#1 implementation.
pub struct RsaMethod {
    raw: NonNull<RSA_METHOD>,
}

// The table is fully built before it is shared and never mutated afterwards;
// libcrypto only reads it.
unsafe impl Send for RsaMethod {}
unsafe impl Sync for RsaMethod {}

impl RsaMethod {
    /// Duplicates the default method and routes signing through the bridge.
    pub fn bridged(name: &CStr) -> Result<Self, EngineError> {
        openssl_sys::init();

        let raw = NonNull::new(unsafe { RSA_meth_dup(RSA_PKCS1_OpenSSL()) })
            .ok_or(EngineError::MethodAlloc)?;
        // Owned from here on, so early returns free it.
        let method = RsaMethod { raw };

        unsafe {
            if RSA_meth_set1_name(method.as_mut_ptr(), name.as_ptr()) != 1 {
                return Err(EngineError::MethodSetter("set1_name"));
            }
            let flags = RSA_meth_get_flags(method.as_ptr()) | RSA_FLAG_SIGN_VER;
            if RSA_meth_set_flags(method.as_mut_ptr(), flags) != 1 {
                return Err(EngineError::MethodSetter("set_flags"));
            }
            if RSA_meth_set_sign(method.as_mut_ptr(), Some(RSA_SIGN_TRAMPOLINE)) != 1 {
                return Err(EngineError::MethodSetter("set_sign"));
            }
        }

        log::debug!("rsa method {:?} built", name);
        Ok(method)
    }

    pub fn as_ptr(&self) -> *const RSA_METHOD {
        self.raw.as_ptr()
    }

    fn as_mut_ptr(&self) -> *mut RSA_METHOD {
        self.raw.as_ptr()
    }

    /// Current contents of the `rsa_sign` slot.
    pub fn sign_fn(&self) -> Option<RsaSignFn> {
        unsafe { RSA_meth_get_sign(self.as_ptr()) }
    }

    pub fn flags(&self) -> i32 {
        unsafe { RSA_meth_get_flags(self.as_ptr()) }
    }

    /// Switches a single key over to this method, independent of any engine.
    ///
    /// # Safety
    /// `rsa` must be a live key, and `self` must outlive it or be replaced on
    /// it before being dropped.
    pub unsafe fn install(&self, rsa: *mut RSA) -> Result<(), EngineError> {
        if unsafe { RSA_set_method(rsa, self.as_ptr()) } != 1 {
            return Err(EngineError::MethodSetter("install"));
        }
        Ok(())
    }
}

impl Drop for RsaMethod {
    fn drop(&mut self) {
        unsafe { RSA_meth_free(self.raw.as_ptr()) }
    }
}
