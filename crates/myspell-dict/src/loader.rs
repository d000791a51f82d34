// Streaming readers for the affix file and the word list.
// Origin: MySpellDictionary.java (loadAffixes, loadWords)

use std::io::{self, BufRead};

use encoding_rs::Encoding;
use myspell_core::syntax;
use myspell_core::{AffixRuleSet, FormatError, LineErrorKind, RuleTable, WordPattern};

use crate::DictionaryError;
use crate::charset::DecodedLines;

/// Lines between two progress messages.
const PROGRESS_INTERVAL: usize = 1000;

/// A rule set whose rule lines are still being read.
struct OpenSet {
    set: AffixRuleSet,
    remaining: usize,
}

/// Build the rule table from decoded affix-file lines.
///
/// A `PFX`/`SFX` line opens a rule set when none is open; while a set is open
/// every such line is one of its rules, and the set is closed once its
/// declared number of rules has been read. Comments, blank lines and any
/// other directive (`SET`, `TRY`, `REP`...) are skipped.
pub fn read_rule_table<I>(lines: I) -> Result<RuleTable, DictionaryError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut table = RuleTable::new();
    let mut open: Option<OpenSet> = None;

    for (index, raw) in lines.into_iter().enumerate() {
        let raw = raw?;
        let line_number = index + 1;
        if line_number % PROGRESS_INTERVAL == 0 {
            log::debug!("affix file: {line_number} lines read");
        }

        let line = syntax::clean_line(&raw);
        if line.is_empty() || syntax::line_kind(line).is_none() {
            continue;
        }

        open = match open.take() {
            None => {
                let set = AffixRuleSet::parse_header(line, line_number)?;
                let remaining = set.rule_count();
                if remaining == 0 {
                    table.insert(set);
                    None
                } else {
                    Some(OpenSet { set, remaining })
                }
            }
            Some(OpenSet { mut set, remaining }) => {
                let rule = set.parse_rule(line, line_number)?;
                set.add_rule(rule);
                if remaining == 1 {
                    table.insert(set);
                    None
                } else {
                    Some(OpenSet {
                        set,
                        remaining: remaining - 1,
                    })
                }
            }
        };
    }

    if let Some(OpenSet { set, remaining }) = open {
        log::warn!(
            "rule set '{}' ends with {remaining} rule(s) missing",
            set.symbol()
        );
        table.insert(set);
    }

    log::debug!(
        "read {} rule sets with {} rules",
        table.len(),
        table.rule_count()
    );
    Ok(table)
}

/// Word-list contents: the declared word count and the patterns in file order.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    pub declared_count: Option<usize>,
    pub patterns: Vec<WordPattern>,
}

/// Read decoded word-list lines.
///
/// The first non-blank line is the declared word count; it must be a
/// non-negative integer but is not checked against the actual number of
/// words.
pub fn read_word_list<I>(lines: I) -> Result<WordList, DictionaryError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut list = WordList::default();
    let mut count_seen = false;

    for (index, raw) in lines.into_iter().enumerate() {
        let raw = raw?;
        let line_number = index + 1;
        if line_number % PROGRESS_INTERVAL == 0 {
            log::debug!("word file: {line_number} lines read");
        }

        let line = syntax::clean_line(&raw);
        if line.is_empty() {
            continue;
        }

        if !count_seen {
            let count = line.parse::<usize>().map_err(|_| {
                FormatError::at_line(line_number, &raw, LineErrorKind::InvalidWordCount)
            })?;
            list.declared_count = Some(count);
            count_seen = true;
            continue;
        }

        list.patterns.push(WordPattern::parse(line));
    }

    match list.declared_count {
        Some(declared) if declared != list.patterns.len() => log::debug!(
            "word file declares {declared} words but holds {}",
            list.patterns.len()
        ),
        _ => {}
    }
    Ok(list)
}

/// Read an affix file already known to be in `encoding`.
pub fn load_affixes<R: BufRead>(
    reader: R,
    encoding: &'static Encoding,
) -> Result<RuleTable, DictionaryError> {
    read_rule_table(DecodedLines::new(reader, encoding))
}

/// Read a word list in `encoding`.
pub fn load_words<R: BufRead>(
    reader: R,
    encoding: &'static Encoding,
) -> Result<WordList, DictionaryError> {
    read_word_list(DecodedLines::new(reader, encoding))
}
