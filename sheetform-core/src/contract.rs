//! Checks on values supplied by integrator-owned collaborators.
//!
//! A failed check is an integration bug, not a runtime condition. It is
//! reported through `tracing` and the caller continues with the value as
//! supplied.

use sheetform_sdk::objects::AllowRedisplay;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error(
        "customer adapter returned allow_redisplay={0}; only `always` or `unspecified` can be used for implicit consent"
    )]
    UnsupportedAllowRedisplay(AllowRedisplay),
}

/// Verify that `value` can be recorded as implicit consent.
pub fn check_implicit_consent_allow_redisplay(
    value: AllowRedisplay,
) -> Result<AllowRedisplay, ContractViolation> {
    if value.is_supported_for_implicit_consent() {
        Ok(value)
    } else {
        Err(ContractViolation::UnsupportedAllowRedisplay(value))
    }
}

/// Report a violation. Loud in debug builds, a warning in release builds.
pub fn report(violation: &ContractViolation) {
    if cfg!(debug_assertions) {
        tracing::error!(error = %violation, "Contract violation");
    } else {
        tracing::warn!(error = %violation, "Contract violation");
    }
}
