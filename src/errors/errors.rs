use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Anything that can be rendered against its source with
/// [`render_diagnostic`](crate::render_diagnostic).
pub trait Report {
    fn get_position(&self) -> &Position;
    fn get_error_name(&self) -> &str;
    fn get_tip(&self) -> ErrorTip;
    fn get_severity(&self) -> &str;
}

/// Fatal lexical error. Scanning stops at the first one.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {}: {internal_error}", .position.line)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }
}

impl Report for Error {
    fn get_position(&self) -> &Position {
        &self.position
    }

    fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::LoneAt { .. } => "LoneAt",
            ErrorImpl::ExpectedHash { .. } => "ExpectedHash",
        }
    }

    fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::LoneAt { token } => ErrorTip::Suggestion(format!(
                "`{}` must be doubled (`@@`) to mark an exemption rule",
                token
            )),
            ErrorImpl::ExpectedHash { marker, found } => ErrorTip::Suggestion(format!(
                "`#{}` must be followed by `#` to form `#{}#`, found {}",
                marker, marker, found
            )),
        }
    }

    fn get_severity(&self) -> &str {
        "Error"
    }
}

/// Recoverable lexical diagnostic. Scanning continues after one is recorded.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {}: {internal_warning}", .position.line)]
pub struct Warning {
    internal_warning: WarningImpl,
    position: Position,
}

impl Warning {
    pub fn new(warning_impl: WarningImpl, position: Position) -> Self {
        Warning {
            internal_warning: warning_impl,
            position,
        }
    }

    pub fn kind(&self) -> &WarningImpl {
        &self.internal_warning
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }
}

impl Report for Warning {
    fn get_position(&self) -> &Position {
        &self.position
    }

    fn get_error_name(&self) -> &str {
        match &self.internal_warning {
            WarningImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            WarningImpl::UnknownHashSequence { .. } => "UnknownHashSequence",
        }
    }

    fn get_tip(&self) -> ErrorTip {
        match &self.internal_warning {
            WarningImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            WarningImpl::UnknownHashSequence { .. } => ErrorTip::Suggestion(String::from(
                "CSS rules start with `##`, `#@#` or `#?#`",
            )),
        }
    }

    fn get_severity(&self) -> &str {
        "Warning"
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("The token {token} is not recognized as a single token")]
    LoneAt { token: String },
    #[error("Unknown token here, expected '#'")]
    ExpectedHash { marker: char, found: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WarningImpl {
    #[error("Unexpected character {character}")]
    UnexpectedCharacter { character: char },
    #[error("'#' followed by {found} does not start a CSS separator")]
    UnknownHashSequence { found: String },
}

/// Describes the character a lookahead saw, for messages.
pub fn describe_lookahead(c: Option<char>) -> String {
    match c {
        Some(c) => format!("{:?}", c),
        None => String::from("end of input"),
    }
}
