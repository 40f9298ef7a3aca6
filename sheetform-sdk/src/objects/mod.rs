pub mod address;
pub mod appearance;
pub mod card_brand;
pub mod consent;

pub use address::{Address, AddressDetails, BillingDetails, ShippingAddress};
pub use appearance::{Appearance, Colors, Font};
pub use card_brand::{CardBrand, PreferredNetworks};
pub use consent::{AllowRedisplay, SavePaymentMethodConsentBehavior, SavePaymentMethodOptInBehavior};
