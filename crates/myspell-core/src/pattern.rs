// Word patterns from the .dic file and surface-form expansion.
// Origin: WordPattern.java

use hashbrown::HashSet;

use crate::FormatError;
use crate::rule::AffixRule;
use crate::syntax::SYMBOLS_SEPARATOR;
use crate::table::RuleTable;

/// A base form and the symbols of the rule sets that inflect it.
///
/// Written in the word list as `base[/symbols]`, e.g. `krasc/AB`. A word
/// without symbols is invariable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPattern {
    base_form: String,
    rule_symbols: Vec<char>,
}

impl WordPattern {
    pub fn new(base_form: impl Into<String>, rule_symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            base_form: base_form.into(),
            rule_symbols: rule_symbols.into_iter().collect(),
        }
    }

    /// Parse a cleaned word-list line.
    ///
    /// The line is split at the first `/`. A `/` in the very first position
    /// is part of the base form, not a separator.
    pub fn parse(line: &str) -> Self {
        match line.find(SYMBOLS_SEPARATOR) {
            Some(pos) if pos > 0 => Self::new(&line[..pos], line[pos + 1..].chars()),
            _ => Self::new(line, []),
        }
    }

    pub fn base_form(&self) -> &str {
        &self.base_form
    }

    pub fn rule_symbols(&self) -> &[char] {
        &self.rule_symbols
    }

    /// Whether the word has no rule sets and therefore no derived forms.
    pub fn is_invariable(&self) -> bool {
        self.rule_symbols.is_empty()
    }

    /// Produce every surface form of this word.
    ///
    /// The first element is always the base form. It is followed by the
    /// distinct derived forms in ascending code-point order. A rule that
    /// leaves the word unchanged yields the base form a second time.
    ///
    /// Derived forms come from:
    /// - every matching prefix rule applied to the base form;
    /// - every matching suffix rule of a combinable set applied on top of
    ///   each prefixed form (its condition is checked against the base form
    ///   only);
    /// - every matching suffix rule applied to the base form.
    ///
    /// Fails when a symbol has no rule set in `table`.
    pub fn expand(&self, table: &RuleTable) -> Result<Vec<String>, FormatError> {
        let mut forms = vec![self.base_form.clone()];
        if self.rule_symbols.is_empty() {
            return Ok(forms);
        }

        let mut prefix_rules: HashSet<&AffixRule> = HashSet::new();
        let mut suffix_rules: HashSet<&AffixRule> = HashSet::new();
        let mut combinable_suffix_rules: HashSet<&AffixRule> = HashSet::new();

        for &symbol in &self.rule_symbols {
            let set = table.resolve(symbol)?;
            for rule in set.rules().filter(|r| r.matches(&self.base_form)) {
                if rule.is_prefix() {
                    prefix_rules.insert(rule);
                } else {
                    suffix_rules.insert(rule);
                    if set.combines_with_opposite_side() {
                        combinable_suffix_rules.insert(rule);
                    }
                }
            }
        }

        let mut derived: HashSet<String> = HashSet::new();
        for prefix_rule in &prefix_rules {
            let prefixed = prefix_rule.apply(&self.base_form);
            for suffix_rule in &combinable_suffix_rules {
                derived.insert(suffix_rule.apply(&prefixed));
            }
            derived.insert(prefixed);
        }
        for suffix_rule in &suffix_rules {
            derived.insert(suffix_rule.apply(&self.base_form));
        }

        let mut derived: Vec<String> = derived.into_iter().collect();
        derived.sort_unstable();
        forms.extend(derived);
        Ok(forms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_set::AffixRuleSet;

    /// Build a table from header + rule lines, one set per slice.
    fn table(sets: &[&[&str]]) -> RuleTable {
        sets.iter()
            .map(|lines| {
                let mut set = AffixRuleSet::parse_header(lines[0], 1).unwrap();
                for (i, line) in lines[1..].iter().enumerate() {
                    let rule = set.parse_rule(line, i + 2).unwrap();
                    set.add_rule(rule);
                }
                set
            })
            .collect()
    }

    #[test]
    fn parse_with_symbols() {
        let wp = WordPattern::parse("krasc/AB");
        assert_eq!(wp.base_form(), "krasc");
        assert_eq!(wp.rule_symbols(), &['A', 'B']);
        assert!(!wp.is_invariable());
    }

    #[test]
    fn parse_without_symbols() {
        let wp = WordPattern::parse("lub");
        assert_eq!(wp.base_form(), "lub");
        assert!(wp.is_invariable());

        let wp = WordPattern::parse("lub/");
        assert_eq!(wp.base_form(), "lub");
        assert!(wp.is_invariable());
    }

    #[test]
    fn parse_splits_at_first_slash_only() {
        let wp = WordPattern::parse("km/h/A");
        assert_eq!(wp.base_form(), "km");
        assert_eq!(wp.rule_symbols(), &['h', '/', 'A']);
    }

    #[test]
    fn parse_leading_slash_belongs_to_base() {
        let wp = WordPattern::parse("/AB");
        assert_eq!(wp.base_form(), "/AB");
        assert!(wp.is_invariable());
    }

    #[test]
    fn invariable_word_expands_to_itself() {
        let wp = WordPattern::new("i", []);
        assert_eq!(wp.expand(&RuleTable::new()).unwrap(), vec!["i"]);
    }

    #[test]
    fn suffix_expansion() {
        let t = table(&[&["SFX A Y 1", "SFX A sc slem asc"]]);
        let forms = WordPattern::parse("krasc/A").expand(&t).unwrap();
        assert_eq!(forms, vec!["krasc", "kraslem"]);
    }

    #[test]
    fn non_matching_rules_are_skipped() {
        let t = table(&[&["SFX A Y 2", "SFX A sc slem [^w]asc", "SFX A 0 y [^c]"]]);
        let forms = WordPattern::parse("wasc/A").expand(&t).unwrap();
        assert_eq!(forms, vec!["wasc"]);
    }

    #[test]
    fn prefix_and_combinable_suffix_cross_product() {
        let t = table(&[
            &["PFX A Y 1", "PFX A 0 x 0"],
            &["SFX B Y 1", "SFX B 0 Y 0"],
        ]);
        let forms = WordPattern::parse("slon/AB").expand(&t).unwrap();
        assert_eq!(forms, vec!["slon", "slonY", "xslon", "xslonY"]);
    }

    #[test]
    fn non_combinable_suffix_is_not_crossed() {
        let t = table(&[
            &["PFX A Y 1", "PFX A 0 x 0"],
            &["SFX B N 1", "SFX B 0 Y 0"],
        ]);
        let forms = WordPattern::parse("slon/AB").expand(&t).unwrap();
        assert_eq!(forms, vec!["slon", "slonY", "xslon"]);
    }

    #[test]
    fn combined_suffix_is_not_rechecked_on_prefixed_form() {
        // The suffix condition holds for "ab" but not for the prefixed "zab".
        let t = table(&[
            &["PFX P Y 1", "PFX P 0 z 0"],
            &["SFX S Y 1", "SFX S 0 c ^ab"],
        ]);
        let suffix_rule = t.resolve('S').unwrap().rules().next().unwrap();
        assert!(suffix_rule.matches("ab"));
        assert!(!suffix_rule.matches("zab"));
        let forms = WordPattern::parse("ab/PS").expand(&t).unwrap();
        assert_eq!(forms, vec!["ab", "abc", "zab", "zabc"]);

        let t = table(&[
            &["PFX P Y 1", "PFX P 0 z 0"],
            &["SFX S Y 1", "SFX S b c b"],
        ]);
        // The stripped suffix is removed from the prefixed form as well.
        let forms = WordPattern::parse("ab/PS").expand(&t).unwrap();
        assert_eq!(forms, vec!["ab", "ac", "zab", "zac"]);
    }

    #[test]
    fn output_is_deduplicated_and_sorted_after_base() {
        let t = table(&[
            &["SFX A N 3", "SFX A 0 a 0", "SFX A 0 b 0", "SFX A 0 c 0"],
            &["SFX B N 2", "SFX B 0 a 0", "SFX B 0 0 0"],
        ]);
        let forms = WordPattern::parse("z/BA").expand(&t).unwrap();
        // The empty rule derives "z" again; it is listed after the base form.
        assert_eq!(forms, vec!["z", "z", "za", "zb", "zc"]);
    }

    #[test]
    fn sort_is_by_code_point() {
        let t = table(&[&["SFX A N 3", "SFX A 0 ą 0", "SFX A 0 b 0", "SFX A 0 B 0"]]);
        let forms = WordPattern::parse("k/A").expand(&t).unwrap();
        assert_eq!(forms, vec!["k", "kB", "kb", "ką"]);
    }

    #[test]
    fn unknown_symbol_fails() {
        let t = table(&[&["SFX A Y 1", "SFX A 0 y 0"]]);
        let err = WordPattern::parse("kot/AZ").expand(&t).unwrap_err();
        assert_eq!(err, FormatError::UnknownSymbol('Z'));
    }

    #[test]
    fn repeated_symbol_is_harmless() {
        let t = table(&[&["SFX A Y 1", "SFX A 0 y 0"]]);
        let forms = WordPattern::parse("kot/AA").expand(&t).unwrap();
        assert_eq!(forms, vec!["kot", "koty"]);
    }

    #[test]
    fn expansion_is_idempotent() {
        let t = table(&[
            &["PFX N Y 2", "PFX N 0 nie 0", "PFX N 0 naj 0"],
            &["SFX A Y 3", "SFX A y a y", "SFX A y e y", "SFX A y ego y"],
        ]);
        let wp = WordPattern::parse("duzy/NA");
        let first = wp.expand(&t).unwrap();
        let second = wp.expand(&t).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1 + 3 + 2 + 2 * 3);
        assert_eq!(first[0], "duzy");
    }
}
