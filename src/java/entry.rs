//! Entry-point table.
//!
//! Each bridge method is keyed by its Java name. `JNI_OnLoad` hands the
//! table to `RegisterNatives`, so the bridge can serve any class that
//! declares these methods, not only the one named in the fixed exports.

use std::ffi::c_void;

use jni::NativeMethod;

use super::exports;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BridgeMethod {
    Greeting,
    AddTwoNumbers,
    ProcessString,
    SystemInfo,
}

impl BridgeMethod {
    pub const ALL: [BridgeMethod; 4] = [
        BridgeMethod::Greeting,
        BridgeMethod::AddTwoNumbers,
        BridgeMethod::ProcessString,
        BridgeMethod::SystemInfo,
    ];

    pub fn java_name(self) -> &'static str {
        match self {
            BridgeMethod::Greeting => "getGreetingFromNative",
            BridgeMethod::AddTwoNumbers => "addTwoNumbers",
            BridgeMethod::ProcessString => "processString",
            BridgeMethod::SystemInfo => "getSystemInfo",
        }
    }

    /// JNI method descriptor.
    pub fn signature(self) -> &'static str {
        match self {
            BridgeMethod::Greeting | BridgeMethod::SystemInfo => "()Ljava/lang/String;",
            BridgeMethod::AddTwoNumbers => "(II)I",
            BridgeMethod::ProcessString => "(Ljava/lang/String;)Ljava/lang/String;",
        }
    }

    pub fn fn_ptr(self) -> *mut c_void {
        match self {
            BridgeMethod::Greeting => {
                exports::Java_com_gdet_testapp_jni_JniHelper_getGreetingFromNative as *mut c_void
            }
            BridgeMethod::AddTwoNumbers => {
                exports::Java_com_gdet_testapp_jni_JniHelper_addTwoNumbers as *mut c_void
            }
            BridgeMethod::ProcessString => {
                exports::Java_com_gdet_testapp_jni_JniHelper_processString as *mut c_void
            }
            BridgeMethod::SystemInfo => {
                exports::Java_com_gdet_testapp_jni_JniHelper_getSystemInfo as *mut c_void
            }
        }
    }

    pub fn from_java_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.java_name() == name)
    }

    pub fn native_method(self) -> NativeMethod {
        NativeMethod {
            name: self.java_name().into(),
            sig: self.signature().into(),
            fn_ptr: self.fn_ptr(),
        }
    }
}

/// The full table in registration order.
pub fn entry_points() -> Vec<NativeMethod> {
    BridgeMethod::ALL
        .into_iter()
        .map(BridgeMethod::native_method)
        .collect()
}
