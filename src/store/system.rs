use std::env::{self, VarError};

use super::EnvStore;
use crate::errors::{EnvSettingError, Result};

/// The real process environment.
///
/// Names and values are checked before writing: an empty name, a name containing `=` or NUL, or a value containing
/// NUL is an [`EnvSettingError::InvalidEntry`] and leaves the environment untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvStore for SystemEnv {
    fn has(&self, name: &str) -> bool {
        env::var_os(name).is_some()
    }

    fn get(&self, name: &str) -> Result<Option<String>> {
        match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(EnvSettingError::NotUnicode { name: name.to_string() }),
        }
    }

    #[allow(unsafe_code)]
    fn set(&self, name: &str, value: &str) -> Result<()> {
        check_entry(name, value).map_err(|reason| EnvSettingError::InvalidEntry {
            name: name.to_string(),
            reason,
        })?;
        // SAFETY: defaults are written while declaring, which callers do at startup before spawning threads that
        // read the environment through libc.
        unsafe { env::set_var(name, value) }
        Ok(())
    }
}

/// The inputs `std::env::set_var` panics on.
fn check_entry(name: &str, value: &str) -> std::result::Result<(), &'static str> {
    if name.is_empty() {
        return Err("name is empty");
    }
    if name.contains('=') {
        return Err("name contains `=`");
    }
    if name.contains('\0') {
        return Err("name contains a NUL byte");
    }
    if value.contains('\0') {
        return Err("value contains a NUL byte");
    }
    Ok(())
}
