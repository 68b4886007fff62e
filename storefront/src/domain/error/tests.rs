//! Tests for domain error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn base_error() -> Error {
    Error::network_failure("status 502")
}

#[rstest]
#[case::invalid(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case::missing(Error::not_found("gone"), ErrorCode::NotFound)]
#[case::network(Error::network_failure("down"), ErrorCode::NetworkFailure)]
#[case::malformed(Error::malformed_response("junk"), ErrorCode::MalformedResponse)]
fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_falls_back_to_the_default_message() {
    let error = Error::new(ErrorCode::NotFound, "");
    assert_eq!(error.message(), ErrorCode::NotFound.default_message());
}

#[rstest]
fn serialises_code_in_snake_case(base_error: Error) {
    let value = serde_json::to_value(base_error.with_details(json!({"status": 502})))
        .expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "network_failure",
            "message": "status 502",
            "details": {"status": 502},
        })
    );
}

#[rstest]
fn omits_absent_details(base_error: Error) {
    let value = serde_json::to_value(base_error).expect("serialise error");
    assert!(value.get("details").is_none());
}

#[rstest]
fn deserialisation_rejects_blank_messages() {
    let result: Result<Error, _> =
        serde_json::from_value(json!({"code": "not_found", "message": " "}));
    assert!(result.is_err());
}

#[rstest]
fn display_uses_the_message(base_error: Error) {
    assert_eq!(base_error.to_string(), "status 502");
}
