//! Marketplace API adapter for the blog and comment ports.

mod dto;
mod http_client;

pub use http_client::{StorefrontHttpApi, StorefrontHttpIdentity};
