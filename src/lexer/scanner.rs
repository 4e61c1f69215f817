use tracing::{debug, warn};

use crate::{
    config::ScannerOptions,
    errors::errors::{describe_lookahead, Error, ErrorImpl, Warning, WarningImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenType, SINGLE_CHAR_LOOKUP};

/// Cursor over a complete filter-list source.
///
/// `start` and `current` are byte offsets that always sit on char
/// boundaries, with `start <= current <= source.len()`.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: String,
    tokens: Vec<Token>,
    warnings: Vec<Warning>,
    suppressed_warnings: usize,
    options: ScannerOptions,
    start: usize,
    current: usize,
    line: u32,
}

impl Scanner {
    pub fn new(source: &str) -> Scanner {
        Scanner::with_options(source, ScannerOptions::default())
    }

    pub fn with_options(source: &str, options: ScannerOptions) -> Scanner {
        Scanner {
            source: source.to_string(),
            tokens: vec![],
            warnings: vec![],
            suppressed_warnings: 0,
            options,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source and returns every token, terminated by a
    /// single `EOF`.
    ///
    /// Meant to be called once per scanner. A second call appends another
    /// `EOF` to the tokens already produced.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>, Error> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        self.start = self.current;
        self.tokens
            .push(MK_TOKEN!(TokenType::EOF, String::new(), self.line));

        debug!(
            tokens = self.tokens.len(),
            warnings = self.warnings.len() + self.suppressed_warnings,
            lines = self.line,
            "scanned filter source"
        );

        Ok(self.tokens.clone())
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Warnings dropped because `max_warnings` was reached.
    pub fn suppressed_warnings(&self) -> usize {
        self.suppressed_warnings
    }

    fn scan_token(&mut self) -> Result<(), Error> {
        let Some(c) = self.advance() else {
            return Ok(());
        };

        if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&c) {
            self.add_token(*kind);
            return Ok(());
        }

        match c {
            '|' => {
                let kind = if self.match_char('|') {
                    TokenType::DomainAnchor
                } else {
                    TokenType::Anchor
                };
                self.add_token(kind);
            }
            '@' => {
                if self.match_char('@') {
                    self.add_token(TokenType::Exemption);
                } else {
                    return Err(self.error(ErrorImpl::LoneAt {
                        token: self.lexeme().to_string(),
                    }));
                }
            }
            '!' => {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
            }
            '#' => self.css_separator()?,
            '\n' => {
                self.whitespace(c);
                self.line += 1;
            }
            ' ' | '\t' | '\r' => self.whitespace(c),
            _ => self.warn(WarningImpl::UnexpectedCharacter { character: c }),
        }

        Ok(())
    }

    // Called with the leading '#' already consumed.
    fn css_separator(&mut self) -> Result<(), Error> {
        if self.match_char('#') {
            self.add_token(TokenType::CssSeparator);
            return Ok(());
        }

        for (marker, kind) in [
            ('@', TokenType::ExemptCssSeparator),
            ('?', TokenType::HidingCssSeparator),
        ] {
            if self.match_char(marker) {
                if self.match_char('#') {
                    self.add_token(kind);
                    return Ok(());
                }

                return Err(self.error(ErrorImpl::ExpectedHash {
                    marker,
                    found: describe_lookahead(self.peek()),
                }));
            }
        }

        if self.options.warn_unknown_hash_sequence {
            self.warn(WarningImpl::UnknownHashSequence {
                found: describe_lookahead(self.peek()),
            });
        }

        // The character after '#' is dropped along with it.
        if self.advance() == Some('\n') {
            self.line += 1;
        }

        Ok(())
    }

    fn whitespace(&mut self, c: char) {
        if !self.options.skip_whitespace {
            self.warn(WarningImpl::UnexpectedCharacter { character: c });
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }

        self.current += expected.len_utf8();
        true
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn add_token(&mut self, kind: TokenType) {
        let lexeme = self.lexeme().to_string();
        self.tokens.push(MK_TOKEN!(kind, lexeme, self.line));
    }

    fn lexeme(&self) -> &str {
        &self.source[self.start..self.current]
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.start)
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.position())
    }

    fn warn(&mut self, warning_impl: WarningImpl) {
        warn!(line = self.line, offset = self.start, "{}", warning_impl);

        let warning = Warning::new(warning_impl, self.position());
        match self.options.max_warnings {
            Some(max) if self.warnings.len() >= max => self.suppressed_warnings += 1,
            _ => self.warnings.push(warning),
        }
    }
}

/// Scans `source` with default options.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Scanner::new(source).scan_tokens()
}

/// Scans `source` and hands back the recoverable warnings alongside the tokens.
///
/// Warnings dropped by `max_warnings` are not counted here; use
/// [`Scanner::suppressed_warnings`] when that number matters.
pub fn tokenize_with_warnings(
    source: &str,
    options: ScannerOptions,
) -> Result<(Vec<Token>, Vec<Warning>), Error> {
    let mut scanner = Scanner::with_options(source, options);
    let tokens = scanner.scan_tokens()?;

    Ok((tokens, scanner.warnings))
}
