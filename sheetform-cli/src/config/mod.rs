//! Configuration module for the sheetform CLI.
//!
//! Loads a TOML file describing one payment form flow and converts it into
//! the runtime [`FormFactoryConfig`].

pub mod file;

use crate::config::file::{
    CustomerAccessConfig, CustomerConfig, CustomerSheetConfig, FileConfig, PaymentSheetConfig,
};
use sheetform_core::{FormFactoryConfig, StaticCustomerAdapter};
use sheetform_sdk::config::{
    CustomerConfiguration, CustomerSheetConfiguration, PaymentSheetConfiguration,
    ShippingDetailsProvider,
};
use sheetform_sdk::objects::{CardBrand, PreferredNetworks};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Configuration loader that reads a flow description from disk.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Read, validate and convert the configuration file.
    pub fn load(&self) -> Result<FormFactoryConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        load_str(&config_content)
    }
}

/// Parse a configuration from a TOML string.
pub fn load_str(content: &str) -> Result<FormFactoryConfig, ConfigError> {
    let file_config: FileConfig = toml::from_str(content)?;
    match (file_config.payment_sheet, file_config.customer_sheet) {
        (Some(payment_sheet), None) => {
            validate_merchant_display_name(&payment_sheet.merchant_display_name)?;
            Ok(FormFactoryConfig::payment_sheet(convert_payment_sheet(
                payment_sheet,
            )))
        }
        (None, Some(customer_sheet)) => {
            validate_merchant_display_name(&customer_sheet.merchant_display_name)?;
            Ok(convert_customer_sheet(customer_sheet))
        }
        (Some(_), Some(_)) => Err(ConfigError::ValidationError(
            "only one of [payment_sheet] or [customer_sheet] may be configured".to_string(),
        )),
        (None, None) => Err(ConfigError::ValidationError(
            "one of [payment_sheet] or [customer_sheet] must be configured".to_string(),
        )),
    }
}

fn validate_merchant_display_name(name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "merchant_display_name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn convert_payment_sheet(p: PaymentSheetConfig) -> PaymentSheetConfiguration {
    let shipping_details = match p.shipping_details {
        Some(details) => ShippingDetailsProvider::fixed(details),
        None => ShippingDetailsProvider::none(),
    };

    PaymentSheetConfiguration {
        customer: p.customer.map(convert_customer),
        merchant_display_name: p.merchant_display_name.into(),
        link_payment_methods_only: p.link_payment_methods_only,
        user_override_country: p.user_override_country.map(Into::into),
        billing_details_collection_configuration: p.billing_details_collection_configuration,
        appearance: p.appearance,
        default_billing_details: p.default_billing_details,
        shipping_details,
        save_payment_method_opt_in_behavior: p.save_payment_method_opt_in_behavior,
        preferred_networks: p.preferred_networks.map(convert_networks),
    }
}

fn convert_customer(c: CustomerConfig) -> CustomerConfiguration {
    match c.access {
        CustomerAccessConfig::LegacyEphemeralKey {
            ephemeral_key_secret,
        } => CustomerConfiguration::legacy(c.id, ephemeral_key_secret),
        CustomerAccessConfig::CustomerSession {
            client_secret,
            opt_out_consent_checkbox,
        } => CustomerConfiguration::customer_session(c.id, client_secret, opt_out_consent_checkbox),
    }
}

fn convert_customer_sheet(c: CustomerSheetConfig) -> FormFactoryConfig {
    let configuration = CustomerSheetConfiguration {
        merchant_display_name: c.merchant_display_name.into(),
        billing_details_collection_configuration: c.billing_details_collection_configuration,
        appearance: c.appearance,
        default_billing_details: c.default_billing_details,
        preferred_networks: c.preferred_networks.map(convert_networks),
    };
    let adapter = StaticCustomerAdapter::new(c.adapter.allow_redisplay);
    FormFactoryConfig::customer_sheet(configuration, Arc::new(adapter))
}

fn convert_networks(networks: Vec<CardBrand>) -> PreferredNetworks {
    PreferredNetworks::from_vec(networks)
}
