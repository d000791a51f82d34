// Rule sets: symbol-addressed groups of affix rules and their header lines.
// Origin: AffixRulesSet.java

use hashbrown::HashSet;

use crate::rule::AffixRule;
use crate::syntax::{self, AffixKind, HEADER_TOKEN_COUNT, NO_TAG, YES_TAG};
use crate::{FormatError, LineErrorKind};

const SIDE_POSITION: usize = 0;
const SYMBOL_POSITION: usize = 1;
const COMBINE_POSITION: usize = 2;
const COUNT_POSITION: usize = 3;

/// A group of affix rules sharing one symbol and one side of the word.
///
/// A rule set is declared in the `.aff` file by a header line of four
/// tokens: `PFX`/`SFX`, the symbol (a single character), `Y`/`N` telling
/// whether the set may be combined with rules of the opposite side, and the
/// number of rule lines that follow. Words in the `.dic` file refer to rule
/// sets by symbol.
///
/// Only the suffix side's combinability is consulted during expansion: a
/// combinable suffix set's rules are also applied on top of every prefixed
/// form.
#[derive(Debug, Clone)]
pub struct AffixRuleSet {
    symbol: char,
    kind: AffixKind,
    combinable: bool,
    /// Declared by the header, then kept equal to `rules.len()` once rules
    /// are added.
    rule_count: usize,
    rules: HashSet<AffixRule>,
}

impl AffixRuleSet {
    /// Create an empty rule set.
    pub fn new(symbol: char, kind: AffixKind, combinable: bool, declared_count: usize) -> Self {
        Self {
            symbol,
            kind,
            combinable,
            rule_count: declared_count,
            rules: HashSet::new(),
        }
    }

    /// Parse a rule-set header line such as `SFX A Y 10`.
    ///
    /// `line_number` is 1-based and only used for error reporting.
    pub fn parse_header(line: &str, line_number: usize) -> Result<Self, FormatError> {
        let fail = |kind| FormatError::at_line(line_number, line, kind);

        let tokens = syntax::tokens(line);
        if tokens.len() != HEADER_TOKEN_COUNT {
            return Err(fail(LineErrorKind::TokenCount {
                expected: HEADER_TOKEN_COUNT,
                found: tokens.len(),
            }));
        }

        let kind = AffixKind::from_tag(tokens[SIDE_POSITION])
            .ok_or_else(|| fail(LineErrorKind::InvalidSide))?;

        let combinable = match tokens[COMBINE_POSITION] {
            YES_TAG => true,
            NO_TAG => false,
            _ => return Err(fail(LineErrorKind::InvalidCombineFlag)),
        };

        let mut symbol_chars = tokens[SYMBOL_POSITION].chars();
        let symbol = match (symbol_chars.next(), symbol_chars.next()) {
            (Some(c), None) => c,
            _ => return Err(fail(LineErrorKind::InvalidSymbol)),
        };

        let declared_count = tokens[COUNT_POSITION]
            .parse::<usize>()
            .map_err(|_| fail(LineErrorKind::InvalidRuleCount))?;

        Ok(Self::new(symbol, kind, combinable, declared_count))
    }

    /// Parse a rule line belonging to this set.
    ///
    /// The rule takes this set's side; the line's own side tag is not
    /// re-examined. The line's symbol must equal this set's symbol.
    pub fn parse_rule(&self, line: &str, line_number: usize) -> Result<AffixRule, FormatError> {
        AffixRule::parse(self.kind, self.symbol, line, line_number)
    }

    /// Add a rule. Adding a rule equal to one already present is a no-op.
    ///
    /// Returns `true` if the rule was new. Either way the reported rule count
    /// becomes the set's current size.
    pub fn add_rule(&mut self, rule: AffixRule) -> bool {
        let added = self.rules.insert(rule);
        self.rule_count = self.rules.len();
        added
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn kind(&self) -> AffixKind {
        self.kind
    }

    pub fn is_prefix(&self) -> bool {
        self.kind.is_prefix()
    }

    pub fn is_suffix(&self) -> bool {
        self.kind.is_suffix()
    }

    /// Whether rules of this set may be layered on top of opposite-side rules.
    pub fn combines_with_opposite_side(&self) -> bool {
        self.combinable
    }

    /// The declared rule count until the first rule is added, the actual
    /// number of distinct rules afterwards.
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    pub fn rules(&self) -> impl Iterator<Item = &AffixRule> {
        self.rules.iter()
    }

    pub fn contains(&self, rule: &AffixRule) -> bool {
        self.rules.contains(rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(line: &str) -> AffixRuleSet {
        AffixRuleSet::parse_header(line, 1).unwrap()
    }

    fn header_error(line: &str) -> LineErrorKind {
        AffixRuleSet::parse_header(line, 4)
            .unwrap_err()
            .kind()
            .cloned()
            .unwrap()
    }

    #[test]
    fn parse_suffix_header() {
        let set = header("SFX A Y 10");
        assert_eq!(set.symbol(), 'A');
        assert!(set.is_suffix());
        assert!(!set.is_prefix());
        assert!(set.combines_with_opposite_side());
        assert_eq!(set.rule_count(), 10);
        assert!(set.is_empty());
    }

    #[test]
    fn parse_prefix_header() {
        let set = header("PFX b N 3");
        assert_eq!(set.symbol(), 'b');
        assert!(set.is_prefix());
        assert!(!set.is_suffix());
        assert!(!set.combines_with_opposite_side());
        assert_eq!(set.rule_count(), 3);
    }

    #[test]
    fn header_tolerates_repeated_whitespace() {
        let set = header("SFX\tA   Y  2");
        assert_eq!(set.rule_count(), 2);
    }

    #[test]
    fn header_with_non_ascii_symbol() {
        let set = header("SFX ą N 1");
        assert_eq!(set.symbol(), 'ą');
    }

    #[test]
    fn header_errors() {
        assert_eq!(
            header_error("SFX A Y"),
            LineErrorKind::TokenCount {
                expected: 4,
                found: 3
            }
        );
        assert_eq!(header_error("XFX A Y 1"), LineErrorKind::InvalidSide);
        assert_eq!(header_error("SFX A y 1"), LineErrorKind::InvalidCombineFlag);
        assert_eq!(header_error("SFX AB Y 1"), LineErrorKind::InvalidSymbol);
        assert_eq!(header_error("SFX A Y x"), LineErrorKind::InvalidRuleCount);
        assert_eq!(header_error("SFX A Y -1"), LineErrorKind::InvalidRuleCount);
    }

    #[test]
    fn header_error_cites_line() {
        let err = AffixRuleSet::parse_header("SFX A Q 1", 17).unwrap_err();
        assert_eq!(err.line_number(), Some(17));
        assert!(err.to_string().contains("SFX A Q 1"));
    }

    #[test]
    fn add_rule_has_set_semantics() {
        let mut set = header("SFX A Y 10");
        assert_eq!(set.rule_count(), 10);
        let r1 = set.parse_rule("SFX A abc ab ^w", 2).unwrap();
        let r2 = set.parse_rule("SFX A abcd ab ^w", 3).unwrap();

        assert!(set.add_rule(r1.clone()));
        assert!(set.contains(&r1));
        assert_eq!(set.rule_count(), 1);
        assert_eq!(set.len(), 1);

        assert!(!set.add_rule(r1.clone()));
        assert_eq!(set.rule_count(), 1);
        assert_eq!(set.len(), 1);

        assert!(set.add_rule(r2.clone()));
        assert!(set.contains(&r1));
        assert!(set.contains(&r2));
        assert_eq!(set.rule_count(), 2);
        assert_eq!(set.rules().count(), 2);
    }

    #[test]
    fn parse_rule_inherits_side_and_checks_symbol() {
        let set = header("PFX B Y 1");
        let rule = set.parse_rule("SFX B nie 0 0", 2).unwrap();
        assert!(rule.is_prefix());

        let err = set.parse_rule("PFX C nie 0 0", 5).unwrap_err();
        assert_eq!(err.line_number(), Some(5));
        assert!(matches!(
            err.kind(),
            Some(LineErrorKind::SymbolMismatch { expected: 'B', .. })
        ));
    }
}
