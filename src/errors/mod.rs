//! Error types and error handling for the scanner.
//!
//! This module defines the two tiers of lexical problems:
//!
//! - Fatal errors that abort a scan, with their source position
//! - Recoverable warnings that are recorded while scanning continues
//! - Error formatting and helpful suggestions

pub mod errors;

#[cfg(test)]
mod tests;
