//! MySpell affix rule engine.
//!
//! This crate holds the in-memory model of a MySpell dictionary's affix
//! definitions and the algorithm that expands a base word into every
//! surface form its rule sets can produce. File access, charset handling and
//! the consumers of the generated forms live in `myspell-dict`.
//!
//! # Architecture
//!
//! - [`syntax`] -- Line-level syntax of `.aff`/`.dic` files (tags, comments, tokens)
//! - [`rule`] -- A single prefix or suffix rule with its anchored condition
//! - [`rule_set`] -- Symbol-addressed groups of rules and their header lines
//! - [`table`] -- The symbol to rule-set mapping shared by every expansion
//! - [`pattern`] -- Word patterns from the word list and form expansion

pub mod pattern;
pub mod rule;
pub mod rule_set;
pub mod syntax;
pub mod table;

pub use pattern::WordPattern;
pub use rule::AffixRule;
pub use rule_set::AffixRuleSet;
pub use syntax::AffixKind;
pub use table::RuleTable;

/// Error type for malformed dictionary content.
///
/// Raised while parsing affix and word files, and during expansion when a
/// word references a rule set the table does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("syntax error at line {line}: \"{text}\" - {kind}")]
    Line {
        line: usize,
        text: String,
        kind: LineErrorKind,
    },
    #[error("cannot find charset definition (SET line) in the affix file")]
    MissingCharset,
    #[error("cannot find rule set having symbol: {0}")]
    UnknownSymbol(char),
}

impl FormatError {
    /// Build a line-level error carrying the 1-based line number and raw text.
    pub fn at_line(line: usize, text: &str, kind: LineErrorKind) -> Self {
        FormatError::Line {
            line,
            text: text.to_string(),
            kind,
        }
    }

    /// The offending line number, when the error is tied to one.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            FormatError::Line { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The specific line problem, when the error is tied to a line.
    pub fn kind(&self) -> Option<&LineErrorKind> {
        match self {
            FormatError::Line { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// What exactly is wrong with a rejected line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineErrorKind {
    #[error("invalid number of tokens: {expected} required, {found} found")]
    TokenCount { expected: usize, found: usize },
    #[error("invalid first token, suffix or prefix declaration is required")]
    InvalidSide,
    #[error("a rule set symbol has to be a single character")]
    InvalidSymbol,
    #[error("'Y' or 'N' is required as third token")]
    InvalidCombineFlag,
    #[error("invalid number of rules")]
    InvalidRuleCount,
    #[error("wrong symbol '{found}', '{expected}' was expected")]
    SymbolMismatch { expected: char, found: String },
    #[error("invalid condition: {0}")]
    InvalidCondition(String),
    #[error("invalid number of words")]
    InvalidWordCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_error_message_cites_line_and_text() {
        let err = FormatError::at_line(7, "SFX A X 1", LineErrorKind::InvalidCombineFlag);
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("\"SFX A X 1\""));
        assert!(msg.contains("'Y' or 'N'"));
        assert_eq!(err.line_number(), Some(7));
        assert_eq!(err.kind(), Some(&LineErrorKind::InvalidCombineFlag));
    }

    #[test]
    fn unknown_symbol_has_no_line() {
        let err = FormatError::UnknownSymbol('Z');
        assert_eq!(err.line_number(), None);
        assert!(err.kind().is_none());
        assert!(err.to_string().ends_with(": Z"));
    }
}
