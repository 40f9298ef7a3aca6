//! Billing details collection policy.

use serde::{Deserialize, Serialize};

/// Whether a single billing field is collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMode {
    /// Collected only when the payment method requires it.
    #[default]
    Automatic,
    Never,
    Always,
}

/// Whether the billing address is collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressCollectionMode {
    /// Only the fields the payment method requires, usually country and postal code.
    #[default]
    Automatic,
    Never,
    /// The full billing address.
    Full,
}

/// Which billing details the form collects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingDetailsCollectionConfiguration {
    pub name: CollectionMode,
    pub phone: CollectionMode,
    pub email: CollectionMode,
    pub address: AddressCollectionMode,
    /// Attach the default billing details to the payment method even when
    /// the form does not collect them.
    pub attach_default_billing_details: bool,
}

impl BillingDetailsCollectionConfiguration {
    /// Returns `true` if any field is forced beyond what the payment method needs.
    pub fn collects_beyond_automatic(&self) -> bool {
        self.name == CollectionMode::Always
            || self.phone == CollectionMode::Always
            || self.email == CollectionMode::Always
            || self.address == AddressCollectionMode::Full
    }

    pub fn collects_full_address(&self) -> bool {
        self.address == AddressCollectionMode::Full
    }
}
