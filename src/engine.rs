//! ENGINE registration.
//!
//! [`register`] builds one process-wide engine carrying the bridged
//! [`RsaMethod`] and adds it to libcrypto's engine list; [`unregister`] undoes
//! it. Both are idempotent. The dynamic loader path lives in
//! [`crate::ffi::engine`] and goes through [`bind`].

use std::ptr::NonNull;
use std::sync::{Mutex, PoisonError};

use openssl_sys::ENGINE;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::ffi::sys::{
    ENGINE_add, ENGINE_free, ENGINE_new, ENGINE_remove, ENGINE_set_RSA, ENGINE_set_id,
    ENGINE_set_name,
};
use crate::logging;
use crate::method::RsaMethod;

struct Registration {
    engine: NonNull<ENGINE>,
    // Freed after the engine; libcrypto holds a bare pointer to it.
    method: RsaMethod,
    config: EngineConfig,
}

// Only touched while holding REGISTRY.
unsafe impl Send for Registration {}

static REGISTRY: Mutex<Option<Registration>> = Mutex::new(None);

/// Sets id, name and RSA method on `e`.
///
/// # Safety
/// `e` must be a live ENGINE and `method` must outlive it.
pub unsafe fn bind(
    e: *mut ENGINE,
    config: &EngineConfig,
    method: &RsaMethod,
) -> Result<(), EngineError> {
    unsafe {
        if ENGINE_set_id(e, config.id.as_ptr()) != 1 {
            return Err(EngineError::SetId);
        }
        if ENGINE_set_name(e, config.name.as_ptr()) != 1 {
            return Err(EngineError::SetName);
        }
        if ENGINE_set_RSA(e, method.as_ptr()) != 1 {
            return Err(EngineError::SetRsa);
        }
    }
    log::debug!("engine {} bound", config.id_str());
    Ok(())
}

/// Registers the engine under [`EngineConfig::default`].
pub fn register() -> Result<(), EngineError> {
    register_with(EngineConfig::default())
}

/// Registers the engine once per process. Later calls, with any config, are
/// no-ops until [`unregister`] runs.
pub fn register_with(config: EngineConfig) -> Result<(), EngineError> {
    logging::init_from_env();

    let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = registry.as_ref() {
        log::debug!("engine {} already registered", existing.config.id_str());
        return Ok(());
    }

    let method = RsaMethod::bridged(config.id)?;
    let engine = NonNull::new(unsafe { ENGINE_new() }).ok_or(EngineError::EngineAlloc)?;

    let added = unsafe { bind(engine.as_ptr(), &config, &method) }.and_then(|()| {
        if unsafe { ENGINE_add(engine.as_ptr()) } != 1 {
            return Err(EngineError::Add);
        }
        Ok(())
    });
    if let Err(e) = added {
        unsafe { ENGINE_free(engine.as_ptr()) };
        return Err(e);
    }

    log::info!("engine {} registered", config.id_str());
    *registry = Some(Registration {
        engine,
        method,
        config,
    });
    Ok(())
}

/// Removes the registered engine and frees it along with its method.
///
/// Keys that obtained the engine's method must be freed first.
pub fn unregister() -> Result<(), EngineError> {
    let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    let Some(registration) = registry.take() else {
        return Ok(());
    };

    let engine = registration.engine.as_ptr();
    unsafe {
        if ENGINE_remove(engine) != 1 {
            log::warn!("engine {} could not be removed", registration.config.id_str());
            *registry = Some(registration);
            return Err(EngineError::Remove);
        }
        ENGINE_free(engine);
    }
    drop(registration.method);

    log::info!("engine {} unregistered", registration.config.id_str());
    Ok(())
}

pub fn is_registered() -> bool {
    REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}
