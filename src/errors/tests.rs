//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidPattern {
            message: "unclosed group".to_string(),
        },
        "broken",
    );

    assert_eq!(error.get_error_name(), "InvalidPattern");
    assert_eq!(error.get_rule(), "broken");
}

#[test]
fn test_empty_match_error() {
    let error = Error::new(
        ErrorImpl::EmptyMatch {
            pattern: "a*".to_string(),
        },
        "stars",
    );

    assert_eq!(error.get_error_name(), "EmptyMatch");
    assert!(error.get_tip().to_string().contains("a*"));
}

#[test]
fn test_duplicate_rule_error() {
    let error = Error::new(ErrorImpl::DuplicateRule, "number");

    assert_eq!(error.get_error_name(), "DuplicateRule");
    assert!(error.get_tip().to_string().contains("number"));
}

#[test]
fn test_reserved_rule_name_error() {
    let error = Error::new(ErrorImpl::ReservedRuleName, "undefined");

    assert_eq!(error.get_error_name(), "ReservedRuleName");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::InvalidPattern {
            message: "x".to_string(),
        },
        "broken",
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::EmptyMatch {
            pattern: "x?".to_string(),
        },
        "maybe_x",
    );

    assert_eq!(
        error.to_string(),
        "rule \"maybe_x\": pattern \"x?\" matches the empty string"
    );
}
