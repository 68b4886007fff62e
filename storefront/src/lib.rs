//! Storefront client library modules.
//!
//! Turns marketplace API payloads into the view models a storefront renders:
//! blog cards and articles, category cards, comment threads, and page range
//! labels.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

pub use settings::StorefrontSettings;
