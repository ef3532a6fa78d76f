//! Host identification via `uname(2)`.

use std::fmt;

use tracing::{debug, info};

use crate::error::{BridgeError, BridgeResult};

/// Field labels in output order.
pub const LABELS: [&str; 5] = ["System Name", "Node Name", "Release", "Version", "Machine"];

/// Kernel and platform identity of the host at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub sysname: String,
    pub nodename: String,
    pub release: String,
    pub version: String,
    pub machine: String,
}

impl SystemInfo {
    #[cfg(unix)]
    pub fn query() -> BridgeResult<Self> {
        let uts = nix::sys::utsname::uname()
            .map_err(|errno| BridgeError::SystemQuery(std::io::Error::from(errno)))?;
        let field = |raw: &std::ffi::OsStr| raw.to_string_lossy().into_owned();

        Ok(Self {
            sysname: field(uts.sysname()),
            nodename: field(uts.nodename()),
            release: field(uts.release()),
            version: field(uts.version()),
            machine: field(uts.machine()),
        })
    }

    #[cfg(not(unix))]
    pub fn query() -> BridgeResult<Self> {
        Err(BridgeError::SystemQuery(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "uname is not available on this platform",
        )))
    }

    /// `(label, value)` pairs in output order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            (LABELS[0], &self.sysname),
            (LABELS[1], &self.nodename),
            (LABELS[2], &self.release),
            (LABELS[3], &self.version),
            (LABELS[4], &self.machine),
        ]
    }
}

impl fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.fields().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

pub fn system_info() -> BridgeResult<SystemInfo> {
    info!("getSystemInfo called");
    let info = SystemInfo::query()?;
    debug!(sysname = %info.sysname, machine = %info.machine, "uname succeeded");
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SystemInfo {
        SystemInfo {
            sysname: "Linux".into(),
            nodename: "pixel".into(),
            release: "6.1.0".into(),
            version: "#1 SMP PREEMPT".into(),
            machine: "aarch64".into(),
        }
    }

    #[test]
    fn test_display_layout() {
        assert_eq!(
            sample().to_string(),
            "System Name: Linux\n\
             Node Name: pixel\n\
             Release: 6.1.0\n\
             Version: #1 SMP PREEMPT\n\
             Machine: aarch64"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_query_host() {
        let info = system_info().unwrap();
        let rendered = info.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        for (line, label) in lines.iter().zip(LABELS) {
            let value = line
                .strip_prefix(label)
                .and_then(|rest| rest.strip_prefix(": "))
                .unwrap_or_else(|| panic!("line {line:?} missing label {label}"));
            assert!(!value.is_empty(), "{label} should not be empty");
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_query_linux() {
        let info = SystemInfo::query().unwrap();
        assert_eq!(info.sysname, "Linux");
        assert!(!info.machine.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_query_repeatable() {
        assert_eq!(system_info().unwrap(), system_info().unwrap());
    }
}
