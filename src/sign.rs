//! The stub RSA signer behind the C callback.
//!
//! Everything the callback observes is captured into a [`SignRequest`] made of
//! plain integers and addresses, so nothing here can dereference caller
//! memory. [`sign_stub`] logs the request, runs the reverse hook and reports
//! success without producing a signature.

use std::fmt;
use std::mem;
use std::os::raw::{c_int, c_uint};

use crate::digest::DigestKind;

/// Status returned to libcrypto. `rsa_sign` treats 1 as success.
pub const SIGN_OK: c_int = 1;

/// Name prefixed to every diagnostic line written by the callback.
pub const CALLBACK_SCOPE: &str = "rsa_sign_callback";
pub const ENTRY_MARKER: &str = "IN";
/// Logged after `sizeof(rsa)` when the key type is opaque.
pub const OPAQUE_KEY_NOTE: &str = "sizeof(rsa) is 0 because RSA is opaque in this libcrypto";
pub const EXIT_MARKER: &str = "OUT";

/// Footprint of the native key object type as Rust sees it.
///
/// libcrypto 1.1+ keeps `RSA` opaque, so this describes the opaque type and
/// is the same for every key. A value of 0 means the layout is hidden from
/// Rust, not that the key is empty; see [`OPAQUE_KEY_NOTE`].
pub const fn key_context_size() -> usize {
    mem::size_of::<openssl_sys::RSA>()
}

/// Opaque token for the native `RSA *` handed to the callback.
///
/// Only ever compared or printed; it is turned back into a pointer solely to
/// pass it to libcrypto functions that take an `RSA *`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyHandle(usize);

impl KeyHandle {
    pub const NULL: KeyHandle = KeyHandle(0);

    pub fn from_ptr(ptr: *const openssl_sys::RSA) -> Self {
        KeyHandle(ptr as usize)
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    pub fn as_ptr(self) -> *const openssl_sys::RSA {
        self.0 as *const openssl_sys::RSA
    }
}

impl fmt::Debug for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyHandle({:#x})", self.0)
    }
}

/// One `rsa_sign` invocation as observed by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignRequest {
    /// OpenSSL NID of the digest algorithm.
    pub digest_type: c_int,
    pub digest_len: c_uint,
    /// Address of the signature output buffer.
    pub sigret: usize,
    /// Address of the signature length output.
    pub siglen: usize,
    pub key: KeyHandle,
    /// `RSA_size(rsa)` when the key carries a modulus.
    pub modulus_bytes: Option<c_int>,
}

impl SignRequest {
    pub fn digest_kind(&self) -> Option<DigestKind> {
        DigestKind::from_nid(self.digest_type)
    }
}

/// Emits the entry marker on creation and the exit marker when dropped, so
/// every way out of the callback is bracketed.
pub struct DiagnosticScope {
    scope: &'static str,
}

impl DiagnosticScope {
    pub fn enter(scope: &'static str) -> Self {
        log::info!("{scope}: {ENTRY_MARKER}");
        DiagnosticScope { scope }
    }
}

impl Drop for DiagnosticScope {
    fn drop(&mut self) {
        log::info!("{}: {EXIT_MARKER}", self.scope);
    }
}

/// Logs `request`, calls `reverse` once and returns [`SIGN_OK`].
///
/// The output buffer and length are never touched; a caller that inspects
/// them after a successful return sees whatever it put there.
pub fn sign_stub<F>(request: &SignRequest, reverse: F) -> c_int
where
    F: FnOnce(),
{
    let _scope = DiagnosticScope::enter(CALLBACK_SCOPE);

    log::info!("{CALLBACK_SCOPE}: xtype = {}", request.digest_type);
    log::info!("{CALLBACK_SCOPE}: m_length = {}", request.digest_len);
    log::info!("{CALLBACK_SCOPE}: sigret = {:#x}", request.sigret);
    log::info!("{CALLBACK_SCOPE}: siglen = {:#x}", request.siglen);
    log::info!("{CALLBACK_SCOPE}: sizeof(rsa) = {}", key_context_size());
    if key_context_size() == 0 {
        log::debug!("{CALLBACK_SCOPE}: {OPAQUE_KEY_NOTE}");
    }

    match request.digest_kind() {
        Some(kind) => {
            log::debug!("{CALLBACK_SCOPE}: digest = {}", kind.name());
            if kind.digest_len() != request.digest_len {
                log::warn!(
                    "{CALLBACK_SCOPE}: m_length {} does not match {} size {}",
                    request.digest_len,
                    kind.name(),
                    kind.digest_len()
                );
            }
        }
        None => log::debug!("{CALLBACK_SCOPE}: digest = unknown"),
    }

    if let Some(bytes) = request.modulus_bytes {
        log::debug!("{CALLBACK_SCOPE}: RSA_size(rsa) = {bytes}");
    }

    // An external signing service would be called here.
    reverse();

    SIGN_OK
}
