//! Fixed exports for `com.gdet.testapp.jni.JniHelper`.
//!
//! The JVM resolves these by name without registration. The same functions
//! back the entry-point table in `entry`.

#![allow(non_snake_case)]

use jni::objects::{JObject, JString};
use jni::sys::{jint, jstring};
use jni::JNIEnv;

use super::boundary::{string_call, with_borrowed_text};
use crate::bridge;

#[no_mangle]
pub extern "system" fn Java_com_gdet_testapp_jni_JniHelper_getGreetingFromNative<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    string_call(&mut env, |_| Ok(bridge::greet()))
}

#[no_mangle]
pub extern "system" fn Java_com_gdet_testapp_jni_JniHelper_addTwoNumbers<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    a: jint,
    b: jint,
) -> jint {
    bridge::add(a, b)
}

#[no_mangle]
pub extern "system" fn Java_com_gdet_testapp_jni_JniHelper_processString<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    name: JString<'local>,
) -> jstring {
    string_call(&mut env, |env| {
        with_borrowed_text(env, &name, |text| Ok(bridge::process_text(text)))
    })
}

#[no_mangle]
pub extern "system" fn Java_com_gdet_testapp_jni_JniHelper_getSystemInfo<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    string_call(&mut env, |_| Ok(bridge::system_info()?.to_string()))
}
