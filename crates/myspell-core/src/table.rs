// Symbol to rule-set mapping.
// Origin: MySpellDictionary.java (affixRulesMap)

use hashbrown::HashMap;

use crate::FormatError;
use crate::rule_set::AffixRuleSet;

/// All rule sets of a dictionary, keyed by symbol.
///
/// Built once while the affix file is read and never changed afterwards;
/// every word expansion reads it concurrently.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    sets: HashMap<char, AffixRuleSet>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule set under its symbol.
    ///
    /// A later declaration of the same symbol replaces the earlier one, which
    /// is returned.
    pub fn insert(&mut self, set: AffixRuleSet) -> Option<AffixRuleSet> {
        let previous = self.sets.insert(set.symbol(), set);
        if let Some(prev) = &previous {
            log::warn!("rule set '{}' declared more than once", prev.symbol());
        }
        previous
    }

    pub fn get(&self, symbol: char) -> Option<&AffixRuleSet> {
        self.sets.get(&symbol)
    }

    /// Look up a rule set a word refers to; unknown symbols are format errors.
    pub fn resolve(&self, symbol: char) -> Result<&AffixRuleSet, FormatError> {
        self.get(symbol).ok_or(FormatError::UnknownSymbol(symbol))
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.sets.contains_key(&symbol)
    }

    /// All declared symbols in ascending order.
    pub fn symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = self.sets.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = &AffixRuleSet> {
        self.sets.values()
    }

    /// Total number of distinct rules across all sets.
    pub fn rule_count(&self) -> usize {
        self.sets.values().map(AffixRuleSet::len).sum()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl FromIterator<AffixRuleSet> for RuleTable {
    fn from_iter<I: IntoIterator<Item = AffixRuleSet>>(iter: I) -> Self {
        let mut table = RuleTable::new();
        for set in iter {
            table.insert(set);
        }
        table
    }
}

impl Extend<AffixRuleSet> for RuleTable {
    fn extend<I: IntoIterator<Item = AffixRuleSet>>(&mut self, iter: I) {
        for set in iter {
            self.insert(set);
        }
    }
}
