#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod adapter;
pub mod contract;
pub mod form_config;

pub use adapter::{CustomerAdapter, StaticCustomerAdapter};
pub use form_config::{FlowKind, FormFactoryConfig, ResolvedFormSettings};
