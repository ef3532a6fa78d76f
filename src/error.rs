//! Error taxonomy shared by the core and both foreign surfaces.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    /// A null or otherwise unusable text handle was passed in.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("system query failed: {0}")]
    SystemQuery(#[source] std::io::Error),

    #[error("jni error: {0}")]
    Jni(#[from] jni::errors::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        BridgeError::InvalidArgument(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        BridgeError::Internal(message.into())
    }

    /// Status code reported through the C ABI.
    pub fn code(&self) -> ErrorCode {
        match self {
            BridgeError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            BridgeError::SystemQuery(_) => ErrorCode::SystemQuery,
            BridgeError::Jni(_) | BridgeError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// JVM exception class thrown for this error on the JNI surface.
    pub fn java_exception_class(&self) -> &'static str {
        match self {
            BridgeError::InvalidArgument(_) => "java/lang/IllegalArgumentException",
            BridgeError::SystemQuery(_) => "java/lang/IllegalStateException",
            BridgeError::Jni(_) | BridgeError::Internal(_) => "java/lang/RuntimeException",
        }
    }
}

/// Status codes returned by the `nb_*` functions.
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    Ok = 0,
    InvalidArgument = 1,
    SystemQuery = 2,
    Internal = 3,
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> i32 {
        code as i32
    }
}
