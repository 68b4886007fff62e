//! Outbound adapters implementing the domain's driven ports.

pub mod storefront_api;
