//! Conversions at the JVM boundary: borrowed strings in, strings and
//! exceptions out.

use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use jni::objects::{JObject, JString};
use jni::sys::jstring;
use jni::JNIEnv;
use tracing::{error, warn};

use crate::error::{BridgeError, BridgeResult};

/// Rejects a null text handle before any view of it is taken.
pub(crate) fn check_text_handle(input: &JObject<'_>) -> BridgeResult<()> {
    if input.is_null() {
        return Err(BridgeError::invalid_argument("input text is null"));
    }
    Ok(())
}

/// Runs `op` with a read-only view of the caller's string.
///
/// The view is acquired with `GetStringUTFChars` and released by the guard's
/// `Drop`, so it is released exactly once however this function exits.
pub(crate) fn with_borrowed_text<R>(
    env: &mut JNIEnv<'_>,
    input: &JString<'_>,
    op: impl FnOnce(&str) -> BridgeResult<R>,
) -> BridgeResult<R> {
    check_text_handle(input)?;
    let view = env.get_string(input)?;
    let text: Cow<'_, str> = (&view).into();
    op(&text)
}

/// Folds a caught panic into the error path.
pub(crate) fn settle<T>(outcome: thread::Result<BridgeResult<T>>) -> BridgeResult<T> {
    match outcome {
        Ok(result) => result,
        Err(_) => Err(BridgeError::internal("panic in native bridge")),
    }
}

/// Class to throw for `err`, or `None` when an exception is already pending.
pub(crate) fn exception_to_throw(err: &BridgeError, pending: bool) -> Option<&'static str> {
    if pending {
        None
    } else {
        Some(err.java_exception_class())
    }
}

/// Runs a string-returning operation and hands the result to the JVM.
///
/// Errors and panics become a pending Java exception and a null return.
pub(crate) fn string_call<'local, F>(env: &mut JNIEnv<'local>, op: F) -> jstring
where
    F: FnOnce(&mut JNIEnv<'local>) -> BridgeResult<String>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> BridgeResult<jstring> {
        let text = op(env)?;
        Ok(env.new_string(text)?.into_raw())
    }));

    match settle(outcome) {
        Ok(raw) => raw,
        Err(err) => {
            raise(env, &err);
            std::ptr::null_mut()
        }
    }
}

/// Throws the exception mapped from `err` unless one is already pending.
pub(crate) fn raise(env: &mut JNIEnv<'_>, err: &BridgeError) {
    warn!("native call failed: {err}");
    let pending = env.exception_check().unwrap_or(false);
    let Some(class) = exception_to_throw(err, pending) else {
        return;
    };
    if let Err(throw_err) = env.throw_new(class, err.to_string()) {
        error!("could not throw {class}: {throw_err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handle_rejected() {
        let null = JObject::null();
        assert!(matches!(
            check_text_handle(&null),
            Err(BridgeError::InvalidArgument(_))
        ));
        let null_text = JString::from(JObject::null());
        let err = check_text_handle(&null_text).unwrap_err();
        assert_eq!(err.java_exception_class(), "java/lang/IllegalArgumentException");
    }

    #[test]
    fn test_settle_panic() {
        let outcome = panic::catch_unwind(|| -> BridgeResult<String> { panic!("boom") });
        let err = settle(outcome).unwrap_err();
        assert!(matches!(err, BridgeError::Internal(_)));
        assert_eq!(err.java_exception_class(), "java/lang/RuntimeException");
    }

    #[test]
    fn test_settle_passes_through() {
        let ok = panic::catch_unwind(|| -> BridgeResult<u8> { Ok(7) });
        assert_eq!(settle(ok).unwrap(), 7);

        let failed = panic::catch_unwind(|| -> BridgeResult<u8> {
            Err(BridgeError::invalid_argument("x"))
        });
        assert!(matches!(settle(failed), Err(BridgeError::InvalidArgument(_))));
    }

    #[test]
    fn test_pending_exception_kept() {
        let err = BridgeError::invalid_argument("x");
        assert_eq!(exception_to_throw(&err, true), None);
        assert_eq!(
            exception_to_throw(&err, false),
            Some("java/lang/IllegalArgumentException")
        );
    }
}
