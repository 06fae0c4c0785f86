//! Working-directory state for ospec.
//!
//! The host assistant can pin a working directory for validator processes
//! without changing the process's actual current directory. When no override
//! is set, the operating system's current directory is used. Resolution
//! always yields an absolute path.
//!
//! This is the only process-wide state in the crate; everything else is
//! constructed per invocation.

use crate::error::{OspecError, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, RwLock};

static CWD_OVERRIDE: LazyLock<RwLock<Option<PathBuf>>> = LazyLock::new(|| RwLock::new(None));

/// Pin the working directory used for validator invocations.
pub fn set_cwd<P: AsRef<Path>>(path: P) {
    let mut guard = CWD_OVERRIDE.write().expect("cwd override lock poisoned");
    *guard = Some(path.as_ref().to_path_buf());
}

/// Remove the pinned working directory, reverting to the OS current directory.
#[allow(dead_code)]
pub fn clear_cwd() {
    let mut guard = CWD_OVERRIDE.write().expect("cwd override lock poisoned");
    *guard = None;
}

/// Resolve the working directory for validator invocations.
///
/// Returns the pinned override when one is set, otherwise the OS current
/// directory. The result is normalized to an absolute path.
pub fn resolve_cwd() -> Result<PathBuf> {
    let pinned = CWD_OVERRIDE
        .read()
        .expect("cwd override lock poisoned")
        .clone();

    let cwd = match pinned {
        Some(path) => path,
        None => env::current_dir().map_err(|e| {
            OspecError::UserError(format!("failed to get current working directory: {}", e))
        })?,
    };

    std::path::absolute(&cwd).map_err(|e| {
        OspecError::UserError(format!(
            "failed to resolve working directory '{}': {}",
            cwd.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn resolve_defaults_to_os_current_dir() {
        clear_cwd();
        let resolved = resolve_cwd().unwrap();
        assert_eq!(resolved, env::current_dir().unwrap());
        assert!(resolved.is_absolute());
    }

    #[test]
    #[serial]
    fn resolve_uses_pinned_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        set_cwd(temp_dir.path());

        let resolved = resolve_cwd().unwrap();
        assert_eq!(resolved, temp_dir.path());

        clear_cwd();
    }

    #[test]
    #[serial]
    fn resolve_normalizes_relative_override() {
        set_cwd("some/relative/dir");

        let resolved = resolve_cwd().unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/relative/dir"));

        clear_cwd();
    }

    #[test]
    #[serial]
    fn clear_reverts_to_os_current_dir() {
        set_cwd("/tmp");
        clear_cwd();
        assert_eq!(resolve_cwd().unwrap(), env::current_dir().unwrap());
    }
}
