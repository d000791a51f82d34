// A single affix rule: one PFX/SFX transformation line of an .aff file.
// Origin: AffixRule.java

use std::fmt;
use std::hash::{Hash, Hasher};

use regex::Regex;

use crate::syntax::{self, AffixKind, RULE_TOKEN_COUNT};
use crate::{FormatError, LineErrorKind};

/// Position of the rule-set symbol in a rule line.
const SYMBOL_POSITION: usize = 1;
/// Position of the text to strip.
const STRIP_POSITION: usize = 2;
/// Position of the text to add.
const ADD_POSITION: usize = 3;
/// Position of the condition.
const CONDITION_POSITION: usize = 4;

/// One strip/add transformation applied at one end of a word.
///
/// A rule line in an `.aff` file has five tokens: the side tag, the symbol
/// of the owning rule set, the affix to strip, the text added in its place
/// and a condition (a regular expression fragment). The placeholder `0` in
/// the last three positions stands for the empty string.
///
/// The condition is spliced unchanged into `^cond.*$` for prefixes and
/// `^.*cond$` for suffixes, and the whole base form must match that
/// pattern. A top-level alternation in the condition therefore splits the
/// pattern itself (`^a|b.*$`). It is compiled once when the rule is built.
///
/// Equality and hashing look only at the side and the three texts, so rule
/// sets deduplicate rules by value.
#[derive(Debug, Clone)]
pub struct AffixRule {
    kind: AffixKind,
    strip: String,
    add: String,
    condition: String,
    /// Length of `strip` in characters.
    strip_chars: usize,
    /// Anchored condition; `None` when the condition is empty.
    matcher: Option<Regex>,
}

impl AffixRule {
    /// Build a rule from its parts. `0` in any text position means empty.
    ///
    /// Fails when the condition is not a valid regular expression.
    pub fn new(
        kind: AffixKind,
        strip: &str,
        add: &str,
        condition: &str,
    ) -> Result<Self, regex::Error> {
        let strip = syntax::placeholder(strip).to_string();
        let add = syntax::placeholder(add).to_string();
        let condition = syntax::placeholder(condition).to_string();
        let matcher = if condition.is_empty() {
            None
        } else {
            // Whole-form match of the spliced pattern.
            let pattern = match kind {
                AffixKind::Prefix => format!("^{condition}.*$"),
                AffixKind::Suffix => format!("^.*{condition}$"),
            };
            let anchored = format!("^(?:{pattern})$");
            Some(Regex::new(&anchored)?)
        };
        Ok(Self {
            kind,
            strip_chars: strip.chars().count(),
            strip,
            add,
            condition,
            matcher,
        })
    }

    /// Parse a rule line belonging to the rule set `symbol`.
    ///
    /// The side is supplied by the caller (the owning set), not taken from
    /// the line's first token. `line_number` is 1-based and only used for
    /// error reporting.
    pub fn parse(
        kind: AffixKind,
        symbol: char,
        line: &str,
        line_number: usize,
    ) -> Result<Self, FormatError> {
        let tokens = syntax::tokens(line);
        if tokens.len() != RULE_TOKEN_COUNT {
            return Err(FormatError::at_line(
                line_number,
                line,
                LineErrorKind::TokenCount {
                    expected: RULE_TOKEN_COUNT,
                    found: tokens.len(),
                },
            ));
        }

        let found = tokens[SYMBOL_POSITION];
        let mut symbol_chars = found.chars();
        if symbol_chars.next() != Some(symbol) || symbol_chars.next().is_some() {
            return Err(FormatError::at_line(
                line_number,
                line,
                LineErrorKind::SymbolMismatch {
                    expected: symbol,
                    found: found.to_string(),
                },
            ));
        }

        Self::new(
            kind,
            tokens[STRIP_POSITION],
            tokens[ADD_POSITION],
            tokens[CONDITION_POSITION],
        )
        .map_err(|e| {
            FormatError::at_line(
                line_number,
                line,
                LineErrorKind::InvalidCondition(e.to_string()),
            )
        })
    }

    pub fn kind(&self) -> AffixKind {
        self.kind
    }

    pub fn is_prefix(&self) -> bool {
        self.kind.is_prefix()
    }

    /// The affix removed from the base form (empty: nothing is removed).
    pub fn strip(&self) -> &str {
        &self.strip
    }

    /// The text put in place of the stripped affix (empty: nothing is added).
    pub fn add(&self) -> &str {
        &self.add
    }

    /// The raw condition fragment (empty: no extra condition).
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Check whether this rule applies to `base_form`.
    ///
    /// The base form must carry the strip text at the rule's end and, when a
    /// condition is present, match it anchored at that end.
    pub fn matches(&self, base_form: &str) -> bool {
        let has_affix = match self.kind {
            AffixKind::Prefix => base_form.starts_with(self.strip.as_str()),
            AffixKind::Suffix => base_form.ends_with(self.strip.as_str()),
        };
        has_affix
            && self
                .matcher
                .as_ref()
                .is_none_or(|re| re.is_match(base_form))
    }

    /// Produce the derived form: strip the affix and attach the addition.
    ///
    /// **Precondition**: `matches(base_form)` returned `true`, or at least the
    /// base form is no shorter than the strip text. A shorter form loses all
    /// of its characters instead of panicking; see [`checked_apply`].
    ///
    /// [`checked_apply`]: AffixRule::checked_apply
    pub fn apply(&self, base_form: &str) -> String {
        let mut form = String::with_capacity(base_form.len() + self.add.len());
        match self.kind {
            AffixKind::Prefix => {
                form.push_str(&self.add);
                form.push_str(&base_form[prefix_end(base_form, self.strip_chars)..]);
            }
            AffixKind::Suffix => {
                form.push_str(&base_form[..suffix_start(base_form, self.strip_chars)]);
                form.push_str(&self.add);
            }
        }
        form
    }

    /// Like [`apply`](AffixRule::apply), but `None` when the base form is
    /// shorter than the strip text.
    pub fn checked_apply(&self, base_form: &str) -> Option<String> {
        if base_form.chars().count() < self.strip_chars {
            return None;
        }
        Some(self.apply(base_form))
    }
}

/// Byte offset just after the first `n` characters (clamped to the end).
fn prefix_end(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Byte offset of the last `n` characters (clamped to the start).
fn suffix_start(s: &str, n: usize) -> usize {
    if n == 0 {
        return s.len();
    }
    s.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i)
}

impl PartialEq for AffixRule {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.strip == other.strip
            && self.add == other.add
            && self.condition == other.condition
    }
}

impl Eq for AffixRule {}

impl Hash for AffixRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.strip.hash(state);
        self.add.hash(state);
        self.condition.hash(state);
    }
}

impl fmt::Display for AffixRule {
    /// Formats the rule the way it is written in an affix file, without the
    /// symbol: `SFX sc slem asc`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_zero = |s: &str| -> String {
            if s.is_empty() {
                syntax::EMPTY_PLACEHOLDER.to_string()
            } else {
                s.to_string()
            }
        };
        write!(
            f,
            "{} {} {} {}",
            self.kind.tag(),
            or_zero(&self.strip),
            or_zero(&self.add),
            or_zero(&self.condition)
        )
    }
}
