//! JNI export-name mangling.
//!
//! A native method `m` of class `C` in package `p.q` resolves to the symbol
//! `Java_p_q_C_m`. Overloaded methods append `__` and the mangled argument
//! descriptor.

use std::fmt::Write;

/// Short export name for `package.class.method`.
///
/// `package` may be dot or slash separated, or empty for the default package.
pub fn export_symbol(package: &str, class: &str, method: &str) -> String {
    let mut out = String::from("Java_");
    if !package.is_empty() {
        mangle_into(&mut out, package);
        out.push('_');
    }
    mangle_into(&mut out, class);
    out.push('_');
    mangle_into(&mut out, method);
    out
}

/// Long export name, used when `method` is overloaded.
///
/// Returns `None` if `signature` is not a method descriptor.
pub fn export_symbol_overloaded(
    package: &str,
    class: &str,
    method: &str,
    signature: &str,
) -> Option<String> {
    let args = signature.strip_prefix('(')?.split_once(')')?.0;
    let mut out = export_symbol(package, class, method);
    out.push_str("__");
    mangle_into(&mut out, args);
    Some(out)
}

/// Short export name for a binary class name such as `a/b/C`.
pub fn export_symbol_for_class(binary_class: &str, method: &str) -> String {
    let binary_class = binary_class.replace('.', "/");
    match binary_class.rsplit_once('/') {
        Some((package, class)) => export_symbol(package, class, method),
        None => export_symbol("", &binary_class, method),
    }
}

fn mangle_into(out: &mut String, name: &str) {
    for ch in name.chars() {
        match ch {
            '.' | '/' => out.push('_'),
            '_' => out.push_str("_1"),
            ';' => out.push_str("_2"),
            '[' => out.push_str("_3"),
            c if c.is_ascii_alphanumeric() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "_0{unit:04x}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names() {
        assert_eq!(
            export_symbol("com.gdet.testapp.jni", "JniHelper", "getGreetingFromNative"),
            "Java_com_gdet_testapp_jni_JniHelper_getGreetingFromNative"
        );
        assert_eq!(export_symbol("", "Main", "run"), "Java_Main_run");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(
            export_symbol("my_pkg", "A", "do_it"),
            "Java_my_1pkg_A_do_1it"
        );
        assert_eq!(export_symbol("p", "Caf\u{e9}", "m"), "Java_p_Caf_000e9_m");
    }

    #[test]
    fn test_overloaded() {
        assert_eq!(
            export_symbol_overloaded(
                "com.gdet.testapp.jni",
                "JniHelper",
                "processString",
                "(Ljava/lang/String;)Ljava/lang/String;"
            )
            .as_deref(),
            Some("Java_com_gdet_testapp_jni_JniHelper_processString__Ljava_lang_String_2")
        );
        assert_eq!(
            export_symbol_overloaded("p", "C", "add", "(II)I").as_deref(),
            Some("Java_p_C_add__II")
        );
        assert_eq!(
            export_symbol_overloaded("p", "C", "m", "[I").as_deref(),
            None
        );
    }

    #[test]
    fn test_binary_class() {
        assert_eq!(
            export_symbol_for_class("com/gdet/testapp/jni/JniHelper", "addTwoNumbers"),
            "Java_com_gdet_testapp_jni_JniHelper_addTwoNumbers"
        );
        assert_eq!(export_symbol_for_class("Main", "run"), "Java_Main_run");
    }
}
