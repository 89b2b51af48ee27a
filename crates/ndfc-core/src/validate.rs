//! Process-wide validation strategy selection.
//!
//! Field constraints are enforced through a single mode chosen once per
//! process, before the first assignment runs. The strict mode (default)
//! rejects out-of-constraint assignments; the disabled mode lets every
//! assignment succeed while leaving key naming, inclusion rules, and path
//! construction untouched. The mode cannot be switched per call.

use std::sync::OnceLock;
use validator::Validate;

use crate::error::{Error, Result};

/// Enforcement strategy for field constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Reject out-of-constraint assignments (default).
    Strict,
    /// Accept every assignment without checking constraints.
    Disabled,
}

static MODE: OnceLock<ValidationMode> = OnceLock::new();

/// Select the validation mode for this process.
///
/// Must be called before the first constrained assignment; the first check
/// locks the mode in.
///
/// # Errors
///
/// Returns [`Error::Config`] if a mode has already been selected.
pub fn set_mode(mode: ValidationMode) -> Result<()> {
    MODE.set(mode).map_err(|_| {
        Error::Config("validation mode already selected for this process".to_string())
    })?;
    if mode == ValidationMode::Disabled {
        tracing::warn!("field validation disabled; constraint checks will be skipped");
    }
    Ok(())
}

/// Returns the selected validation mode, defaulting to [`ValidationMode::Strict`].
#[must_use]
pub fn mode() -> ValidationMode {
    *MODE.get_or_init(|| ValidationMode::Strict)
}

/// Check a value against its declared constraints under the current mode.
///
/// # Errors
///
/// Returns [`Error::Validation`] naming the field and the violated
/// constraint when the mode is strict and the value is out of bounds.
pub fn check<T: Validate>(value: &T) -> Result<()> {
    match mode() {
        ValidationMode::Strict => value.validate().map_err(Error::from),
        ValidationMode::Disabled => Ok(()),
    }
}
