//! Entry points for libcrypto's dynamic engine loader.
//!
//! `openssl engine dynamic -pre SO_PATH:librsa_sign_bridge.so -pre LOAD`
//! resolves `v_check` and `bind_engine` by name.

use std::ffi::{CStr, c_void};
use std::os::raw::{c_char, c_int, c_ulong};
use std::sync::OnceLock;

use openssl_sys::ENGINE;

use crate::config::EngineConfig;
use crate::engine::bind;
use crate::error::{EngineError, map_error};
use crate::logging;
use crate::method::RsaMethod;

/// `OSSL_DYNAMIC_VERSION` for libcrypto 1.1 and 3.x.
pub const OSSL_DYNAMIC_VERSION: c_ulong = 0x0003_0000;
/// `OSSL_DYNAMIC_OLDEST`.
pub const OSSL_DYNAMIC_OLDEST: c_ulong = 0x0003_0000;

// Engines bound by the loader live until process exit, so their method does too.
static DYNAMIC_METHOD: OnceLock<RsaMethod> = OnceLock::new();

fn dynamic_method(config: &EngineConfig) -> Result<&'static RsaMethod, EngineError> {
    if let Some(method) = DYNAMIC_METHOD.get() {
        return Ok(method);
    }
    let method = RsaMethod::bridged(config.id)?;
    // A concurrent bind may have won; its method is used and ours is dropped.
    let _ = DYNAMIC_METHOD.set(method);
    DYNAMIC_METHOD.get().ok_or(EngineError::MethodAlloc)
}

fn bind_dynamic(e: *mut ENGINE, id: *const c_char) -> Result<(), EngineError> {
    let config = EngineConfig::default();

    if !id.is_null() {
        let requested = unsafe { CStr::from_ptr(id) };
        if requested != config.id {
            return Err(EngineError::IdMismatch {
                requested: requested.to_string_lossy().into_owned(),
                expected: config.id_str(),
            });
        }
    }

    let method = dynamic_method(&config)?;
    unsafe { bind(e, &config, method) }
}

/// Version handshake: accept any loader at least as new as ours.
#[unsafe(no_mangle)]
pub extern "C" fn v_check(v: c_ulong) -> c_ulong {
    if v >= OSSL_DYNAMIC_OLDEST {
        OSSL_DYNAMIC_VERSION
    } else {
        0
    }
}

/// Binds the engine handed over by the dynamic loader.
///
/// `fns` carries the loader's allocator callbacks; it is not used because the
/// bridge links against the same shared libcrypto as the loader.
///
/// # Safety
/// `e` must be a live ENGINE; `id` must be NULL or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bind_engine(
    e: *mut ENGINE,
    id: *const c_char,
    _fns: *const c_void,
) -> c_int {
    logging::init_from_env();

    if e.is_null() {
        log::error!("bind_engine: NULL engine");
        return 0;
    }

    match bind_dynamic(e, id) {
        Ok(()) => {
            log::info!("bind_engine: bound");
            1
        }
        Err(err) => map_error(&err),
    }
}
