//! Postal addresses and contact details.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A postal address where every line is optional.
///
/// Used for billing details, where any subset may be known up front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub city: Option<String>,
    /// Two-letter ISO 3166-1 country code.
    pub country: Option<CompactString>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<CompactString>,
    pub state: Option<String>,
}

impl Address {
    /// Returns `true` if no line of the address is set.
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.country.is_none()
            && self.line1.is_none()
            && self.line2.is_none()
            && self.postal_code.is_none()
            && self.state.is_none()
    }
}

/// Billing details used to prefill the payment form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingDetails {
    pub address: Address,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl BillingDetails {
    /// Returns `true` if nothing is known about the payer.
    pub fn is_empty(&self) -> bool {
        self.address.is_empty() && self.email.is_none() && self.name.is_none() && self.phone.is_none()
    }
}

/// A shipping address. Country and first line are required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub city: Option<String>,
    pub country: CompactString,
    pub line1: String,
    pub line2: Option<String>,
    pub postal_code: Option<CompactString>,
    pub state: Option<String>,
}

/// Shipping details collected by an address form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressDetails {
    pub address: ShippingAddress,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Whether the "billing address is same as shipping" checkbox was selected.
    pub is_checkbox_selected: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_billing_details() {
        assert!(BillingDetails::default().is_empty());

        let details = BillingDetails {
            address: Address {
                country: Some("FR".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(!details.is_empty());
    }

    #[test]
    fn test_billing_details_partial_json() {
        let details: BillingDetails =
            serde_json::from_str(r#"{"name": "Jane Diaz", "address": {"postal_code": "94103"}}"#)
                .unwrap();
        assert_eq!(details.name.as_deref(), Some("Jane Diaz"));
        assert_eq!(details.address.postal_code.as_deref(), Some("94103"));
        assert!(details.email.is_none());
    }
}
