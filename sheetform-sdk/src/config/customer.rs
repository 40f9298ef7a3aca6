//! Customer configuration for the direct payment flow.

use compact_str::CompactString;

/// How the form authenticates on behalf of the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerAccessProvider {
    /// Ephemeral key issued for the customer. Consent checkboxes are not supported.
    LegacyCustomerEphemeralKey { ephemeral_key_secret: String },
    /// Customer session created by the merchant backend.
    CustomerSession {
        client_secret: String,
        /// Hide the save-payment-method consent checkbox.
        opt_out_consent_checkbox: bool,
    },
}

/// The customer a payment is collected for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerConfiguration {
    /// Customer identifier, e.g. `cus_...`.
    pub id: CompactString,
    pub access_provider: CustomerAccessProvider,
}

impl CustomerConfiguration {
    /// Create a customer authenticated with an ephemeral key.
    pub fn legacy(id: impl Into<CompactString>, ephemeral_key_secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            access_provider: CustomerAccessProvider::LegacyCustomerEphemeralKey {
                ephemeral_key_secret: ephemeral_key_secret.into(),
            },
        }
    }

    /// Create a customer authenticated with a customer session.
    pub fn customer_session(
        id: impl Into<CompactString>,
        client_secret: impl Into<String>,
        opt_out_consent_checkbox: bool,
    ) -> Self {
        Self {
            id: id.into(),
            access_provider: CustomerAccessProvider::CustomerSession {
                client_secret: client_secret.into(),
                opt_out_consent_checkbox,
            },
        }
    }
}
