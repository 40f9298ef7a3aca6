//! Customer adapter used by the customer sheet flow.

use sheetform_sdk::objects::AllowRedisplay;

/// Supplies customer-specific policy values to the customer sheet.
///
/// Implementations are provided by the integrating application and must be
/// safe to read from any thread.
pub trait CustomerAdapter: Send + Sync {
    /// The redisplay value recorded when a payment method is saved.
    ///
    /// Must be [`AllowRedisplay::Always`] or [`AllowRedisplay::Unspecified`].
    fn payment_method_save_allow_redisplay(&self) -> AllowRedisplay;
}

/// An adapter that always reports the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticCustomerAdapter {
    pub allow_redisplay: AllowRedisplay,
}

impl StaticCustomerAdapter {
    pub fn new(allow_redisplay: AllowRedisplay) -> Self {
        Self { allow_redisplay }
    }
}

impl Default for StaticCustomerAdapter {
    fn default() -> Self {
        Self::new(AllowRedisplay::Unspecified)
    }
}

impl CustomerAdapter for StaticCustomerAdapter {
    fn payment_method_save_allow_redisplay(&self) -> AllowRedisplay {
        self.allow_redisplay
    }
}
