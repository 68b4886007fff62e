//! Product list files for the `categories` command.

use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use serde_json::Value;
use tracing::warn;

use crate::domain::{Error, Product};

/// Read and decode the product list at `path`.
///
/// # Errors
///
/// Returns [`crate::domain::ErrorCode::InvalidRequest`] when the file cannot
/// be opened or read, and [`crate::domain::ErrorCode::MalformedResponse`]
/// when its contents are not a product list.
pub fn load_products(path: &Path) -> Result<Vec<Product>, Error> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        Error::invalid_request(format!("products path '{}' is not a file", path.display()))
    })?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        Error::invalid_request(format!(
            "open products directory '{}': {error}",
            parent.display()
        ))
    })?;
    let bytes = directory.read(Path::new(file_name)).map_err(|error| {
        Error::invalid_request(format!("read products file '{}': {error}", path.display()))
    })?;
    parse_products(&bytes)
}

/// Decode a product list given either as a bare JSON array or wrapped in the
/// API's `{ code, message, result }` envelope.
///
/// An envelope whose `result` is missing or not an array yields an empty list.
///
/// # Errors
///
/// Returns [`crate::domain::ErrorCode::MalformedResponse`] when the input is
/// not JSON, is neither an array nor an object, or holds undecodable items.
pub fn parse_products(bytes: &[u8]) -> Result<Vec<Product>, Error> {
    let document: Value = serde_json::from_slice(bytes)
        .map_err(|error| Error::malformed_response(format!("invalid products JSON: {error}")))?;
    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove("result") {
            Some(Value::Array(items)) => items,
            _ => {
                warn!("products envelope has no result list; treating as empty");
                Vec::new()
            }
        },
        _ => {
            return Err(Error::malformed_response(
                "products must be a JSON array or an envelope object",
            ));
        }
    };
    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<Product>, _>>()
        .map_err(|error| Error::malformed_response(format!("invalid product: {error}")))
}
