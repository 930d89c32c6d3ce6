//! Unit tests for AppError construction

use crate::errors::{AppError, ErrorKind};
use std::error::Error as StdError;
use std::io;

#[test]
fn test_display_is_message() {
    let err = AppError::not_found("test error message");
    assert_eq!(err.to_string(), "test error message");

    let empty = AppError::conflict("");
    assert_eq!(empty.to_string(), "");
}

#[test]
fn test_not_found() {
    let err = AppError::not_found("resource not found");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.message(), "resource not found");
    assert!(err.details().is_none());
}

#[test]
fn test_bad_request_keeps_message() {
    let err = AppError::bad_request("invalid input");
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(err.message(), "invalid input");
}

#[test]
fn test_conflict() {
    let err = AppError::conflict("resource conflict");
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.message(), "resource conflict");
}

#[test]
fn test_unauthorized_with_details() {
    let err = AppError::unauthorized("unauthorized access").with_details("token expired");
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(err.message(), "unauthorized access");
    assert_eq!(err.details().unwrap().to_string(), "token expired");
}

#[test]
fn test_forbidden_with_details() {
    let err = AppError::forbidden("forbidden access").with_details("insufficient permissions");
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert_eq!(err.message(), "forbidden access");
    assert_eq!(err.details().unwrap().to_string(), "insufficient permissions");
}

#[test]
fn test_internal_details_are_the_source() {
    let cause = io::Error::new(io::ErrorKind::ConnectionRefused, "database connection failed");
    let err = AppError::internal("internal server error").with_details(cause);

    assert_eq!(err.kind(), ErrorKind::Internal);
    assert_eq!(err.message(), "internal server error");

    let source = err.source().expect("details exposed as source");
    assert_eq!(source.to_string(), "database connection failed");
    assert!(source.downcast_ref::<io::Error>().is_some());
    // Display never includes the cause
    assert_eq!(err.to_string(), "internal server error");
}

#[test]
fn test_internal_without_details() {
    let err = AppError::internal("oops");
    assert!(err.source().is_none());
}

#[test]
fn test_status_code_follows_kind() {
    for kind in ErrorKind::ALL {
        let err = AppError::new(kind, "x");
        assert_eq!(err.status_code(), kind.status_code());
    }
}
