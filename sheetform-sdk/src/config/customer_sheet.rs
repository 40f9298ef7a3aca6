//! Saved payment method management flow configuration.

use super::BillingDetailsCollectionConfiguration;
use crate::objects::{Appearance, BillingDetails, PreferredNetworks};
use compact_str::CompactString;

/// Configuration for the customer sheet, which manages a customer's saved
/// payment methods across sessions.
#[derive(Debug, Clone)]
pub struct CustomerSheetConfiguration {
    /// Business name shown to the customer.
    pub merchant_display_name: CompactString,
    pub billing_details_collection_configuration: BillingDetailsCollectionConfiguration,
    pub appearance: Appearance,
    pub default_billing_details: BillingDetails,
    pub preferred_networks: Option<PreferredNetworks>,
}

impl CustomerSheetConfiguration {
    pub fn new(merchant_display_name: impl Into<CompactString>) -> Self {
        Self {
            merchant_display_name: merchant_display_name.into(),
            billing_details_collection_configuration: BillingDetailsCollectionConfiguration::default(),
            appearance: Appearance::default(),
            default_billing_details: BillingDetails::default(),
            preferred_networks: None,
        }
    }

    pub fn with_billing_details_collection_configuration(
        mut self,
        config: BillingDetailsCollectionConfiguration,
    ) -> Self {
        self.billing_details_collection_configuration = config;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn with_default_billing_details(mut self, details: BillingDetails) -> Self {
        self.default_billing_details = details;
        self
    }

    pub fn with_preferred_networks(mut self, networks: PreferredNetworks) -> Self {
        self.preferred_networks = Some(networks);
        self
    }

    /// Returns `true` if the full billing address is collected.
    ///
    /// Name, phone and email do not count here.
    pub fn is_using_billing_address_collection(&self) -> bool {
        self.billing_details_collection_configuration
            .collects_full_address()
    }
}
