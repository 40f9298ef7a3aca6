//! Serializable snapshot of every resolved form setting.

use super::{FlowKind, FormFactoryConfig};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use sheetform_sdk::config::BillingDetailsCollectionConfiguration;
use sheetform_sdk::objects::{
    AddressDetails, Appearance, BillingDetails, PreferredNetworks,
    SavePaymentMethodConsentBehavior, SavePaymentMethodOptInBehavior,
};

/// All settings the form builder reads, resolved at one point in time.
///
/// Shipping details are evaluated once when the snapshot is taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFormSettings {
    pub flow: FlowKind,
    pub has_customer: bool,
    pub merchant_display_name: CompactString,
    pub link_payment_methods_only: bool,
    pub override_country: Option<CompactString>,
    pub billing_details_collection_configuration: BillingDetailsCollectionConfiguration,
    pub appearance: Appearance,
    pub default_billing_details: BillingDetails,
    pub shipping_details: Option<AddressDetails>,
    pub save_payment_method_opt_in_behavior: SavePaymentMethodOptInBehavior,
    pub preferred_networks: Option<PreferredNetworks>,
    pub is_using_billing_address_collection: bool,
    pub save_payment_method_consent_behavior: SavePaymentMethodConsentBehavior,
}

impl FormFactoryConfig {
    /// Resolve every setting into an owned snapshot.
    pub fn resolve(&self) -> ResolvedFormSettings {
        ResolvedFormSettings {
            flow: self.flow(),
            has_customer: self.has_customer(),
            merchant_display_name: self.merchant_display_name().into(),
            link_payment_methods_only: self.link_payment_methods_only(),
            override_country: self.override_country().map(CompactString::from),
            billing_details_collection_configuration: *self
                .billing_details_collection_configuration(),
            appearance: self.appearance().clone(),
            default_billing_details: self.default_billing_details().clone(),
            shipping_details: self.shipping_details(),
            save_payment_method_opt_in_behavior: self.save_payment_method_opt_in_behavior(),
            preferred_networks: self.preferred_networks().map(PreferredNetworks::from_slice),
            is_using_billing_address_collection: self.is_using_billing_address_collection(),
            save_payment_method_consent_behavior: self.save_payment_method_consent_behavior(),
        }
    }
}
