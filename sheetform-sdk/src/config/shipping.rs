//! Lazily evaluated shipping details.

use crate::objects::AddressDetails;
use std::sync::Arc;

/// Produces the current shipping details on demand.
///
/// The value is computed on every call and may change between calls, so the
/// form builder must not cache it.
#[derive(Clone)]
pub struct ShippingDetailsProvider {
    inner: Arc<dyn Fn() -> Option<AddressDetails> + Send + Sync>,
}

impl ShippingDetailsProvider {
    /// A provider that never has shipping details.
    pub fn none() -> Self {
        Self::from_fn(|| None)
    }

    /// A provider that always returns a clone of `details`.
    pub fn fixed(details: AddressDetails) -> Self {
        Self::from_fn(move || Some(details.clone()))
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> Option<AddressDetails> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Evaluate the provider.
    pub fn get(&self) -> Option<AddressDetails> {
        (self.inner)()
    }
}

impl Default for ShippingDetailsProvider {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for ShippingDetailsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ShippingDetailsProvider(..)")
    }
}
