//! Save-for-future-use behaviors.
//!
//! [`SavePaymentMethodOptInBehavior`] is chosen by the merchant.
//! [`SavePaymentMethodConsentBehavior`] is derived from the active flow and
//! tells the form builder how to present the consent control.

use serde::{Deserialize, Serialize};

/// Default state of the "save this payment method" checkbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePaymentMethodOptInBehavior {
    /// Opt-in or opt-out is decided from the customer's country.
    #[default]
    Automatic,
    /// Checkbox starts unchecked.
    RequiresOptIn,
    /// Checkbox starts checked.
    RequiresOptOut,
}

impl std::fmt::Display for SavePaymentMethodOptInBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SavePaymentMethodOptInBehavior::Automatic => write!(f, "automatic"),
            SavePaymentMethodOptInBehavior::RequiresOptIn => write!(f, "requires_opt_in"),
            SavePaymentMethodOptInBehavior::RequiresOptOut => write!(f, "requires_opt_out"),
        }
    }
}

/// Whether a saved payment method may be shown to the customer again
/// without asking for consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowRedisplay {
    Unspecified,
    Limited,
    Always,
}

impl AllowRedisplay {
    /// Only `Always` and `Unspecified` can be recorded as implicit consent.
    pub fn is_supported_for_implicit_consent(self) -> bool {
        matches!(self, AllowRedisplay::Always | AllowRedisplay::Unspecified)
    }
}

impl std::fmt::Display for AllowRedisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllowRedisplay::Unspecified => write!(f, "unspecified"),
            AllowRedisplay::Limited => write!(f, "limited"),
            AllowRedisplay::Always => write!(f, "always"),
        }
    }
}

/// How the form should present the save-payment-method consent control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePaymentMethodConsentBehavior {
    /// Display mode used before consent checkboxes existed.
    Legacy,
    ShowConsentCheckbox,
    /// The merchant opted out of collecting consent.
    HideConsentCheckbox,
    /// Consent is assumed. The value records which kind of redisplay was granted.
    ImplicitConsent(AllowRedisplay),
}

impl SavePaymentMethodConsentBehavior {
    pub fn shows_checkbox(&self) -> bool {
        matches!(self, SavePaymentMethodConsentBehavior::ShowConsentCheckbox)
    }

    /// The redisplay value granted without asking, if any.
    pub fn implicit_allow_redisplay(&self) -> Option<AllowRedisplay> {
        match self {
            SavePaymentMethodConsentBehavior::ImplicitConsent(value) => Some(*value),
            _ => None,
        }
    }
}

impl std::fmt::Display for SavePaymentMethodConsentBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SavePaymentMethodConsentBehavior::Legacy => write!(f, "legacy"),
            SavePaymentMethodConsentBehavior::ShowConsentCheckbox => {
                write!(f, "show_consent_checkbox")
            }
            SavePaymentMethodConsentBehavior::HideConsentCheckbox => {
                write!(f, "hide_consent_checkbox")
            }
            SavePaymentMethodConsentBehavior::ImplicitConsent(value) => {
                write!(f, "implicit_consent:{value}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_implicit_consent_values() {
        assert!(AllowRedisplay::Always.is_supported_for_implicit_consent());
        assert!(AllowRedisplay::Unspecified.is_supported_for_implicit_consent());
        assert!(!AllowRedisplay::Limited.is_supported_for_implicit_consent());
    }

    #[test]
    fn test_consent_behavior_display() {
        assert_eq!(SavePaymentMethodConsentBehavior::Legacy.to_string(), "legacy");
        assert_eq!(
            SavePaymentMethodConsentBehavior::ImplicitConsent(AllowRedisplay::Always).to_string(),
            "implicit_consent:always"
        );
    }

    #[test]
    fn test_consent_behavior_json() {
        let json = serde_json::to_string(&SavePaymentMethodConsentBehavior::ImplicitConsent(
            AllowRedisplay::Unspecified,
        ))
        .unwrap();
        assert_eq!(json, r#"{"implicit_consent":"unspecified"}"#);
        assert_eq!(
            serde_json::to_string(&SavePaymentMethodConsentBehavior::HideConsentCheckbox).unwrap(),
            r#""hide_consent_checkbox""#
        );
    }

    #[test]
    fn test_implicit_allow_redisplay() {
        assert_eq!(
            SavePaymentMethodConsentBehavior::ImplicitConsent(AllowRedisplay::Limited)
                .implicit_allow_redisplay(),
            Some(AllowRedisplay::Limited)
        );
        assert!(!SavePaymentMethodConsentBehavior::HideConsentCheckbox.shows_checkbox());
        assert!(SavePaymentMethodConsentBehavior::ShowConsentCheckbox.shows_checkbox());
    }
}
