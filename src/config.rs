//! Bridge configuration.
//!
//! Everything here has a compiled-in default; the library reads no
//! environment variables or files.

/// Log tag used on the platform log channel.
pub const DEFAULT_LOG_TAG: &str = "NativeLib";

/// JVM class the entry-point table is registered under by `JNI_OnLoad`.
pub const DEFAULT_JAVA_CLASS: &str = "com/gdet/testapp/jni/JniHelper";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub log_tag: String,
    /// `EnvFilter` directive, e.g. `"info"` or `"native_bridge=debug"`.
    pub log_level: String,
    /// Binary class name (slash separated).
    pub java_class: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_tag: DEFAULT_LOG_TAG.to_owned(),
            log_level: "info".to_owned(),
            java_class: DEFAULT_JAVA_CLASS.to_owned(),
        }
    }
}

impl BridgeConfig {
    pub fn with_log_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.log_tag = tag.into();
        self
    }

    pub fn with_log_level<S: Into<String>>(mut self, level: S) -> Self {
        self.log_level = level.into();
        self
    }

    /// Accepts either `a.b.C` or `a/b/C`.
    pub fn with_java_class<S: AsRef<str>>(mut self, class: S) -> Self {
        self.java_class = class.as_ref().replace('.', "/");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = BridgeConfig::default();
        assert_eq!(cfg.log_tag, "NativeLib");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.java_class, "com/gdet/testapp/jni/JniHelper");
    }

    #[test]
    fn test_java_class_normalized() {
        let cfg = BridgeConfig::default().with_java_class("org.example.Native");
        assert_eq!(cfg.java_class, "org/example/Native");
    }
}
