//! Unit tests for error handling.
//!
//! This module contains tests for error and warning types and their reporting.

use crate::errors::errors::{
    describe_lookahead, Error, ErrorImpl, ErrorTip, Report, Warning, WarningImpl,
};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::LoneAt {
            token: "@".to_string(),
        },
        Position::new(3, 10),
    );

    assert_eq!(error.get_error_name(), "LoneAt");
    assert_eq!(error.get_severity(), "Error");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::ExpectedHash {
            marker: '@',
            found: describe_lookahead(Some('x')),
        },
        Position::new(7, 42),
    );

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.line(), 7);
    assert_eq!(error.offset(), 42);
}

#[test]
fn test_error_display_prefixes_line() {
    let error = Error::new(
        ErrorImpl::ExpectedHash {
            marker: '?',
            found: describe_lookahead(None),
        },
        Position::new(12, 0),
    );

    assert_eq!(error.to_string(), "line 12: Unknown token here, expected '#'");
}

#[test]
fn test_expected_hash_tip() {
    let error = Error::new(
        ErrorImpl::ExpectedHash {
            marker: '?',
            found: describe_lookahead(None),
        },
        Position::new(1, 0),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "`#?` must be followed by `#` to form `#?#`, found end of input"
    );
}

#[test]
fn test_warning_display() {
    let warning = Warning::new(
        WarningImpl::UnexpectedCharacter { character: '%' },
        Position::new(4, 9),
    );

    assert_eq!(warning.to_string(), "line 4: Unexpected character %");
    assert_eq!(warning.get_error_name(), "UnexpectedCharacter");
    assert_eq!(warning.get_severity(), "Warning");
}

#[test]
fn test_unknown_hash_sequence_warning() {
    let warning = Warning::new(
        WarningImpl::UnknownHashSequence {
            found: describe_lookahead(Some('x')),
        },
        Position::new(1, 0),
    );

    assert_eq!(
        warning.to_string(),
        "line 1: '#' followed by 'x' does not start a CSS separator"
    );
    assert!(matches!(warning.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_error_tip_none() {
    let warning = Warning::new(
        WarningImpl::UnexpectedCharacter { character: 'a' },
        Position::new(1, 0),
    );

    assert!(matches!(warning.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(Error::new(
        ErrorImpl::LoneAt {
            token: "@".to_string(),
        },
        Position::new(2, 5),
    ));

    assert_eq!(
        error.to_string(),
        "line 2: The token @ is not recognized as a single token"
    );
}
