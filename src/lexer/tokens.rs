use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Characters that always form a token on their own.
    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenType> = {
        let mut map = HashMap::new();
        map.insert('^', TokenType::Separator);
        map.insert('$', TokenType::OptionSeparator);
        map.insert(',', TokenType::Comma);
        map.insert('=', TokenType::Equals);
        map.insert('~', TokenType::Exclude);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    EOF,

    Separator,       // ^
    Anchor,          // |
    DomainAnchor,    // ||
    OptionSeparator, // $
    Comma,           // ,
    Equals,          // =
    Exemption,       // @@
    Exclude,         // ~

    CssSeparator,         // ##
    ExemptCssSeparator,   // #@#
    HidingCssSeparator,   // #?#
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Value attached to a token. Nothing in the scanner produces one yet; the
/// slot exists for later literal-bearing tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenType,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} @{}", self.kind, self.lexeme, self.line)
    }
}

impl Token {
    pub fn is_one_of(&self, kinds: &[TokenType]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_css_separator(&self) -> bool {
        self.is_one_of(&[
            TokenType::CssSeparator,
            TokenType::ExemptCssSeparator,
            TokenType::HidingCssSeparator,
        ])
    }
}
