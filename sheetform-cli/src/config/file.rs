//! TOML file configuration structures.
//!
//! These structs directly map to the `sheetform.toml` file format. Exactly one
//! of `[payment_sheet]` or `[customer_sheet]` is expected.

use serde::{Deserialize, Serialize};
use sheetform_sdk::config::BillingDetailsCollectionConfiguration;
use sheetform_sdk::objects::{
    AddressDetails, AllowRedisplay, Appearance, BillingDetails, CardBrand,
    SavePaymentMethodOptInBehavior,
};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub payment_sheet: Option<PaymentSheetConfig>,
    pub customer_sheet: Option<CustomerSheetConfig>,
}

/// Payment sheet section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSheetConfig {
    pub merchant_display_name: String,
    pub customer: Option<CustomerConfig>,
    #[serde(default)]
    pub link_payment_methods_only: bool,
    pub user_override_country: Option<String>,
    #[serde(default)]
    pub billing_details_collection_configuration: BillingDetailsCollectionConfiguration,
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub default_billing_details: BillingDetails,
    /// Fixed shipping details returned on every read.
    pub shipping_details: Option<AddressDetails>,
    #[serde(default)]
    pub save_payment_method_opt_in_behavior: SavePaymentMethodOptInBehavior,
    pub preferred_networks: Option<Vec<CardBrand>>,
}

/// Customer of the payment sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerConfig {
    pub id: String,
    pub access: CustomerAccessConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomerAccessConfig {
    LegacyEphemeralKey {
        ephemeral_key_secret: String,
    },
    CustomerSession {
        client_secret: String,
        #[serde(default)]
        opt_out_consent_checkbox: bool,
    },
}

/// Customer sheet section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSheetConfig {
    pub merchant_display_name: String,
    #[serde(default)]
    pub billing_details_collection_configuration: BillingDetailsCollectionConfiguration,
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub default_billing_details: BillingDetails,
    pub preferred_networks: Option<Vec<CardBrand>>,
    #[serde(default)]
    pub adapter: AdapterConfig,
}

/// Values reported by the customer adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    #[serde(default = "default_allow_redisplay")]
    pub allow_redisplay: AllowRedisplay,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            allow_redisplay: default_allow_redisplay(),
        }
    }
}

fn default_allow_redisplay() -> AllowRedisplay {
    AllowRedisplay::Unspecified
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetform_sdk::config::AddressCollectionMode;

    #[test]
    fn test_payment_sheet_parsing() {
        let toml_str = r##"
[payment_sheet]
merchant_display_name = "Example, Inc."
user_override_country = "FR"
preferred_networks = ["cartes_bancaires", "visa"]
save_payment_method_opt_in_behavior = "requires_opt_out"

[payment_sheet.customer]
id = "cus_1"

[payment_sheet.customer.access]
type = "customer_session"
client_secret = "cuss_secret"
opt_out_consent_checkbox = true

[payment_sheet.billing_details_collection_configuration]
address = "full"

[payment_sheet.appearance.colors]
primary = "#635BFF"
"##;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.customer_sheet.is_none());

        let payment_sheet = config.payment_sheet.unwrap();
        assert_eq!(payment_sheet.merchant_display_name, "Example, Inc.");
        assert_eq!(payment_sheet.user_override_country.as_deref(), Some("FR"));
        assert_eq!(
            payment_sheet.preferred_networks,
            Some(vec![CardBrand::CartesBancaires, CardBrand::Visa])
        );
        assert_eq!(
            payment_sheet.save_payment_method_opt_in_behavior,
            SavePaymentMethodOptInBehavior::RequiresOptOut
        );
        assert_eq!(
            payment_sheet.billing_details_collection_configuration.address,
            AddressCollectionMode::Full
        );
        assert_eq!(payment_sheet.appearance.colors.primary, "#635BFF");
        assert!(!payment_sheet.link_payment_methods_only);

        let customer = payment_sheet.customer.unwrap();
        assert_eq!(customer.id, "cus_1");
        assert!(matches!(
            customer.access,
            CustomerAccessConfig::CustomerSession {
                opt_out_consent_checkbox: true,
                ..
            }
        ));
    }

    #[test]
    fn test_customer_sheet_adapter_defaults_to_unspecified() {
        let toml_str = r#"
[customer_sheet]
merchant_display_name = "Example, Inc."
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let customer_sheet = config.customer_sheet.unwrap();
        assert_eq!(
            customer_sheet.adapter.allow_redisplay,
            AllowRedisplay::Unspecified
        );
    }

    #[test]
    fn test_unknown_allow_redisplay_is_rejected() {
        let toml_str = r#"
[customer_sheet]
merchant_display_name = "Example, Inc."

[customer_sheet.adapter]
allow_redisplay = "sometimes"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
