//! Configuration records for the two payment form flows.
//!
//! These types are built by the integrating application and handed, read-only,
//! to the form builder. Loading them from files is handled by the CLI crate.

mod billing;
mod customer;
mod customer_sheet;
mod payment_sheet;
mod shipping;

pub use billing::{AddressCollectionMode, BillingDetailsCollectionConfiguration, CollectionMode};
pub use customer::{CustomerAccessProvider, CustomerConfiguration};
pub use customer_sheet::CustomerSheetConfiguration;
pub use payment_sheet::PaymentSheetConfiguration;
pub use shipping::ShippingDetailsProvider;
