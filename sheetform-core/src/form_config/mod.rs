//! Uniform view over the payment sheet and customer sheet configurations.
//!
//! The form builder reads every setting through [`FormFactoryConfig`] so it
//! never has to know which flow it is building for. Every accessor is a pure
//! projection of the wrapped configuration.

mod snapshot;

pub use snapshot::ResolvedFormSettings;

use crate::adapter::CustomerAdapter;
use crate::contract;
use serde::{Deserialize, Serialize};
use sheetform_sdk::config::{
    BillingDetailsCollectionConfiguration, CustomerSheetConfiguration, PaymentSheetConfiguration,
};
use sheetform_sdk::objects::{
    AddressDetails, Appearance, BillingDetails, CardBrand, SavePaymentMethodConsentBehavior,
    SavePaymentMethodOptInBehavior,
};
use std::sync::Arc;

/// The configuration a payment form is built from.
#[derive(Clone)]
pub enum FormFactoryConfig {
    /// One-off payment collection.
    PaymentSheet(PaymentSheetConfiguration),
    /// Management of a customer's saved payment methods.
    CustomerSheet {
        configuration: CustomerSheetConfiguration,
        adapter: Arc<dyn CustomerAdapter>,
    },
}

/// Which flow a [`FormFactoryConfig`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    PaymentSheet,
    CustomerSheet,
}

impl std::fmt::Display for FlowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowKind::PaymentSheet => write!(f, "payment_sheet"),
            FlowKind::CustomerSheet => write!(f, "customer_sheet"),
        }
    }
}

impl FormFactoryConfig {
    pub fn payment_sheet(configuration: PaymentSheetConfiguration) -> Self {
        FormFactoryConfig::PaymentSheet(configuration)
    }

    pub fn customer_sheet(
        configuration: CustomerSheetConfiguration,
        adapter: Arc<dyn CustomerAdapter>,
    ) -> Self {
        FormFactoryConfig::CustomerSheet {
            configuration,
            adapter,
        }
    }

    pub fn flow(&self) -> FlowKind {
        match self {
            FormFactoryConfig::PaymentSheet(_) => FlowKind::PaymentSheet,
            FormFactoryConfig::CustomerSheet { .. } => FlowKind::CustomerSheet,
        }
    }

    /// Whether the form is collecting for a known customer.
    ///
    /// The customer sheet always has one.
    pub fn has_customer(&self) -> bool {
        match self {
            FormFactoryConfig::PaymentSheet(config) => config.customer.is_some(),
            FormFactoryConfig::CustomerSheet { .. } => true,
        }
    }

    pub fn merchant_display_name(&self) -> &str {
        match self {
            FormFactoryConfig::PaymentSheet(config) => config.merchant_display_name.as_str(),
            FormFactoryConfig::CustomerSheet { configuration, .. } => {
                configuration.merchant_display_name.as_str()
            }
        }
    }

    pub fn link_payment_methods_only(&self) -> bool {
        match self {
            FormFactoryConfig::PaymentSheet(config) => config.link_payment_methods_only,
            FormFactoryConfig::CustomerSheet { .. } => false,
        }
    }

    pub fn override_country(&self) -> Option<&str> {
        match self {
            FormFactoryConfig::PaymentSheet(config) => config.user_override_country.as_deref(),
            FormFactoryConfig::CustomerSheet { .. } => None,
        }
    }

    pub fn billing_details_collection_configuration(
        &self,
    ) -> &BillingDetailsCollectionConfiguration {
        match self {
            FormFactoryConfig::PaymentSheet(config) => {
                &config.billing_details_collection_configuration
            }
            FormFactoryConfig::CustomerSheet { configuration, .. } => {
                &configuration.billing_details_collection_configuration
            }
        }
    }

    pub fn appearance(&self) -> &Appearance {
        match self {
            FormFactoryConfig::PaymentSheet(config) => &config.appearance,
            FormFactoryConfig::CustomerSheet { configuration, .. } => &configuration.appearance,
        }
    }

    pub fn default_billing_details(&self) -> &BillingDetails {
        match self {
            FormFactoryConfig::PaymentSheet(config) => &config.default_billing_details,
            FormFactoryConfig::CustomerSheet { configuration, .. } => {
                &configuration.default_billing_details
            }
        }
    }

    /// Current shipping details. Evaluated on every call.
    pub fn shipping_details(&self) -> Option<AddressDetails> {
        match self {
            FormFactoryConfig::PaymentSheet(config) => config.shipping_details.get(),
            FormFactoryConfig::CustomerSheet { .. } => None,
        }
    }

    pub fn save_payment_method_opt_in_behavior(&self) -> SavePaymentMethodOptInBehavior {
        match self {
            FormFactoryConfig::PaymentSheet(config) => config.save_payment_method_opt_in_behavior,
            FormFactoryConfig::CustomerSheet { .. } => SavePaymentMethodOptInBehavior::Automatic,
        }
    }

    pub fn preferred_networks(&self) -> Option<&[CardBrand]> {
        match self {
            FormFactoryConfig::PaymentSheet(config) => config.preferred_networks.as_deref(),
            FormFactoryConfig::CustomerSheet { configuration, .. } => {
                configuration.preferred_networks.as_deref()
            }
        }
    }

    pub fn is_using_billing_address_collection(&self) -> bool {
        match self {
            FormFactoryConfig::PaymentSheet(config) => config.requires_billing_detail_collection(),
            FormFactoryConfig::CustomerSheet { configuration, .. } => {
                configuration.is_using_billing_address_collection()
            }
        }
    }

    /// How the save-payment-method consent control is presented.
    ///
    /// For the customer sheet, consent is implicit and carries the adapter's
    /// allow-redisplay value. A value other than `always` or `unspecified` is
    /// reported as a contract violation and passed through unchanged.
    pub fn save_payment_method_consent_behavior(&self) -> SavePaymentMethodConsentBehavior {
        match self {
            FormFactoryConfig::PaymentSheet(config) => {
                config.save_payment_method_consent_behavior()
            }
            FormFactoryConfig::CustomerSheet { adapter, .. } => {
                let allow_redisplay = adapter.payment_method_save_allow_redisplay();
                if let Err(violation) =
                    contract::check_implicit_consent_allow_redisplay(allow_redisplay)
                {
                    contract::report(&violation);
                }
                SavePaymentMethodConsentBehavior::ImplicitConsent(allow_redisplay)
            }
        }
    }
}

impl From<PaymentSheetConfiguration> for FormFactoryConfig {
    fn from(configuration: PaymentSheetConfiguration) -> Self {
        FormFactoryConfig::payment_sheet(configuration)
    }
}

impl std::fmt::Debug for FormFactoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormFactoryConfig::PaymentSheet(config) => {
                f.debug_tuple("PaymentSheet").field(config).finish()
            }
            FormFactoryConfig::CustomerSheet { configuration, .. } => f
                .debug_struct("CustomerSheet")
                .field("configuration", configuration)
                .finish_non_exhaustive(),
        }
    }
}
