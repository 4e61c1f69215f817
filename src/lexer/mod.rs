//! Lexical analysis for filter-list source text.
//!
//! This module contains the scanner that converts filter-list rules into a
//! flat stream of punctuation tokens for parsing. It handles:
//!
//! - Single and multi-character markers (`^`, `|`/`||`, `@@`, `##`, `#@#`, `#?#`, ...)
//! - `!` line comments
//! - Line tracking for error reporting
//! - Recoverable warnings for characters that are not tokens

pub mod scanner;
pub mod tokens;
