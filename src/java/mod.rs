//! JNI surface.
//!
//! Exposes the bridge to a JVM caller through fixed `Java_*` exports and,
//! at load time, through `RegisterNatives` on the configured class.

pub mod boundary;
pub mod entry;
pub mod exports;
pub mod naming;

use std::ffi::c_void;

use jni::sys::{jint, JNI_ERR, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use tracing::{error, info, warn};

pub use entry::{entry_points, BridgeMethod};
pub use naming::{export_symbol, export_symbol_for_class, export_symbol_overloaded};

use crate::config::BridgeConfig;
use crate::error::BridgeResult;
use crate::logging;

/// Called by the JVM from `System.loadLibrary`.
///
/// A failed registration is logged and the load continues: the fixed
/// exports still resolve for the default class.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(vm: JavaVM, _reserved: *mut c_void) -> jint {
    let config = BridgeConfig::default();
    logging::init(&config);

    let mut env = match vm.get_env() {
        Ok(env) => env,
        Err(err) => {
            error!("JNI_OnLoad could not obtain JNIEnv: {err}");
            return JNI_ERR;
        }
    };

    if let Err(err) = register_natives(&mut env, &config.java_class) {
        warn!("RegisterNatives on {} failed: {err}", config.java_class);
        let _ = env.exception_clear();
    }
    JNI_VERSION_1_6
}

/// Registers the entry-point table on `class` (binary name, slash separated).
pub fn register_natives(env: &mut JNIEnv<'_>, class: &str) -> BridgeResult<()> {
    let methods = entry_points();
    env.register_native_methods(class, &methods)?;
    info!("registered {} native methods on {class}", methods.len());
    Ok(())
}
