//! Direct payment flow configuration.

use super::{
    BillingDetailsCollectionConfiguration, CustomerAccessProvider, CustomerConfiguration,
    ShippingDetailsProvider,
};
use crate::objects::{
    Appearance, BillingDetails, PreferredNetworks, SavePaymentMethodConsentBehavior,
    SavePaymentMethodOptInBehavior,
};
use compact_str::CompactString;

/// Configuration for a one-off payment collected by the payment sheet.
#[derive(Debug, Clone)]
pub struct PaymentSheetConfiguration {
    /// The customer paying, if known. Enables saving payment methods.
    pub customer: Option<CustomerConfiguration>,
    /// Business name shown to the customer.
    pub merchant_display_name: CompactString,
    /// Restrict the form to Link payment methods.
    pub link_payment_methods_only: bool,
    /// Two-letter country code used instead of the device locale.
    pub user_override_country: Option<CompactString>,
    pub billing_details_collection_configuration: BillingDetailsCollectionConfiguration,
    pub appearance: Appearance,
    pub default_billing_details: BillingDetails,
    pub shipping_details: ShippingDetailsProvider,
    pub save_payment_method_opt_in_behavior: SavePaymentMethodOptInBehavior,
    /// Networks to prefer for co-branded cards, most preferred first.
    pub preferred_networks: Option<PreferredNetworks>,
}

impl PaymentSheetConfiguration {
    /// Create a configuration with defaults for everything but the merchant name.
    pub fn new(merchant_display_name: impl Into<CompactString>) -> Self {
        Self {
            customer: None,
            merchant_display_name: merchant_display_name.into(),
            link_payment_methods_only: false,
            user_override_country: None,
            billing_details_collection_configuration: BillingDetailsCollectionConfiguration::default(),
            appearance: Appearance::default(),
            default_billing_details: BillingDetails::default(),
            shipping_details: ShippingDetailsProvider::none(),
            save_payment_method_opt_in_behavior: SavePaymentMethodOptInBehavior::default(),
            preferred_networks: None,
        }
    }

    pub fn with_customer(mut self, customer: CustomerConfiguration) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_link_payment_methods_only(mut self, link_only: bool) -> Self {
        self.link_payment_methods_only = link_only;
        self
    }

    pub fn with_user_override_country(mut self, country: impl Into<CompactString>) -> Self {
        self.user_override_country = Some(country.into());
        self
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

    pub fn with_shipping_details(mut self, provider: ShippingDetailsProvider) -> Self {
        self.shipping_details = provider;
        self
    }

    pub fn with_save_payment_method_opt_in_behavior(
        mut self,
        behavior: SavePaymentMethodOptInBehavior,
    ) -> Self {
        self.save_payment_method_opt_in_behavior = behavior;
        self
    }

    pub fn with_preferred_networks(mut self, networks: PreferredNetworks) -> Self {
        self.preferred_networks = Some(networks);
        self
    }

    /// Returns `true` if the merchant requires billing details beyond what
    /// the payment method itself needs.
    pub fn requires_billing_detail_collection(&self) -> bool {
        self.billing_details_collection_configuration
            .collects_beyond_automatic()
    }

    /// Resolve how the consent checkbox is displayed.
    ///
    /// Only customer sessions support the consent checkbox. Everything else
    /// falls back to [`SavePaymentMethodConsentBehavior::Legacy`].
    pub fn save_payment_method_consent_behavior(&self) -> SavePaymentMethodConsentBehavior {
        match self.customer.as_ref().map(|c| &c.access_provider) {
            Some(CustomerAccessProvider::CustomerSession {
                opt_out_consent_checkbox: true,
                ..
            }) => SavePaymentMethodConsentBehavior::HideConsentCheckbox,
            Some(CustomerAccessProvider::CustomerSession {
                opt_out_consent_checkbox: false,
                ..
            }) => SavePaymentMethodConsentBehavior::ShowConsentCheckbox,
            Some(CustomerAccessProvider::LegacyCustomerEphemeralKey { .. }) | None => {
                SavePaymentMethodConsentBehavior::Legacy
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AddressCollectionMode, CollectionMode};

    #[test]
    fn test_new_uses_defaults() {
        let config = PaymentSheetConfiguration::new("Example, Inc.");
        assert_eq!(config.merchant_display_name, "Example, Inc.");
        assert!(config.customer.is_none());
        assert!(!config.link_payment_methods_only);
        assert!(config.user_override_country.is_none());
        assert!(config.shipping_details.get().is_none());
        assert_eq!(
            config.save_payment_method_opt_in_behavior,
            SavePaymentMethodOptInBehavior::Automatic
        );
        assert!(config.preferred_networks.is_none());
    }

    #[test]
    fn test_requires_billing_detail_collection() {
        let config = PaymentSheetConfiguration::new("Example, Inc.");
        assert!(!config.requires_billing_detail_collection());

        let config = config.with_billing_details_collection_configuration(
            BillingDetailsCollectionConfiguration {
                phone: CollectionMode::Always,
                ..Default::default()
            },
        );
        assert!(config.requires_billing_detail_collection());

        let config = PaymentSheetConfiguration::new("Example, Inc.")
            .with_billing_details_collection_configuration(BillingDetailsCollectionConfiguration {
                address: AddressCollectionMode::Full,
                ..Default::default()
            });
        assert!(config.requires_billing_detail_collection());
    }

    #[test]
    fn test_consent_behavior_follows_customer_session() {
        let config = PaymentSheetConfiguration::new("Example, Inc.")
            .with_customer(CustomerConfiguration::customer_session("cus_1", "cuss_secret", true));
        assert_eq!(
            config.save_payment_method_consent_behavior(),
            SavePaymentMethodConsentBehavior::HideConsentCheckbox
        );

        let config = PaymentSheetConfiguration::new("Example, Inc.")
            .with_customer(CustomerConfiguration::customer_session("cus_1", "cuss_secret", false));
        assert_eq!(
            config.save_payment_method_consent_behavior(),
            SavePaymentMethodConsentBehavior::ShowConsentCheckbox
        );
    }

    #[test]
    fn test_consent_behavior_legacy_without_customer_session() {
        let config = PaymentSheetConfiguration::new("Example, Inc.");
        assert_eq!(
            config.save_payment_method_consent_behavior(),
            SavePaymentMethodConsentBehavior::Legacy
        );

        let config = config.with_customer(CustomerConfiguration::legacy("cus_1", "ek_test_123"));
        assert_eq!(
            config.save_payment_method_consent_behavior(),
            SavePaymentMethodConsentBehavior::Legacy
        );
    }
}
