// Dictionary: a loaded .aff/.dic pair and the entry points that expand it.
// Origin: MySpellDictionary.java

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use myspell_core::{RuleTable, WordPattern};

use crate::DictionaryError;
use crate::charset::{detect_charset, resolve_encoding};
use crate::consumer::WordFormsConsumer;
use crate::driver::{self, ProcessOptions, ProcessReport, ProcessingError};
use crate::loader::{self, WordList};
#[cfg(feature = "trie")]
use crate::trie::{TrieBuilder, TrieOptions};
use crate::writer::{FullDictionaryWriter, WriterOptions};

/// Extension of the affix rule file.
pub const AFFIX_EXTENSION: &str = "aff";

/// Extension of the word list file.
pub const WORDS_EXTENSION: &str = "dic";

/// Extension of the generated full dictionary.
pub const FULL_DICTIONARY_EXTENSION: &str = "all";

/// A MySpell dictionary: its rule table, its word patterns in file order and
/// the charset both files are written in.
///
/// Read-only once loaded; expansion borrows it immutably and may run on
/// several threads.
#[derive(Debug)]
pub struct Dictionary {
    rules: RuleTable,
    words: Vec<WordPattern>,
    charset: String,
    encoding: &'static Encoding,
    declared_word_count: Option<usize>,
}

impl Dictionary {
    /// Load `<dir>/<symbol>.aff` and `<dir>/<symbol>.dic`.
    pub fn load(dir: impl AsRef<Path>, symbol: &str) -> Result<Self, DictionaryError> {
        let dir = dir.as_ref();
        log::info!(
            "loading MySpell dictionary '{symbol}' from {}",
            dir.display()
        );
        Self::from_files(
            dictionary_file(dir, symbol, AFFIX_EXTENSION),
            dictionary_file(dir, symbol, WORDS_EXTENSION),
        )
    }

    /// Load an explicit affix file and word list.
    ///
    /// The affix file is read twice: once to find its `SET` line and once
    /// decoded with that charset.
    pub fn from_files(
        affix_path: impl AsRef<Path>,
        words_path: impl AsRef<Path>,
    ) -> Result<Self, DictionaryError> {
        let affix_path = affix_path.as_ref();
        let words_path = words_path.as_ref();

        let charset = detect_charset(open(affix_path)?).map_err(with_path(affix_path))?;
        let encoding = resolve_encoding(&charset)?;

        log::info!("reading affix rules from {}", affix_path.display());
        let rules =
            loader::load_affixes(open(affix_path)?, encoding).map_err(with_path(affix_path))?;
        log::info!("reading word list from {}", words_path.display());
        let words =
            loader::load_words(open(words_path)?, encoding).map_err(with_path(words_path))?;

        Ok(Self::assemble(rules, words, charset, encoding))
    }

    /// Load a dictionary held in memory.
    pub fn from_bytes(affix_data: &[u8], words_data: &[u8]) -> Result<Self, DictionaryError> {
        let charset = detect_charset(affix_data)?;
        let encoding = resolve_encoding(&charset)?;
        let rules = loader::load_affixes(affix_data, encoding)?;
        let words = loader::load_words(words_data, encoding)?;
        Ok(Self::assemble(rules, words, charset, encoding))
    }

    fn assemble(
        rules: RuleTable,
        words: WordList,
        charset: String,
        encoding: &'static Encoding,
    ) -> Self {
        log::info!(
            "dictionary loaded: {} rule sets, {} word patterns, charset {charset}",
            rules.len(),
            words.patterns.len()
        );
        Self {
            rules,
            words: words.patterns,
            charset,
            encoding,
            declared_word_count: words.declared_count,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Word patterns in word-list order.
    pub fn words(&self) -> &[WordPattern] {
        &self.words
    }

    /// Charset name exactly as written on the `SET` line.
    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Decoder used for both files.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Word count declared on the first line of the word list.
    pub fn declared_word_count(&self) -> Option<usize> {
        self.declared_word_count
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// Expand a single word pattern against this dictionary's rules.
    pub fn expand(&self, pattern: &WordPattern) -> Result<Vec<String>, DictionaryError> {
        Ok(pattern.expand(&self.rules)?)
    }

    /// Expand every word in order and pass the forms to `consumer`.
    pub fn process_all_forms<C>(
        &self,
        consumer: &mut C,
        options: &ProcessOptions,
    ) -> Result<ProcessReport, ProcessingError>
    where
        C: WordFormsConsumer + ?Sized,
    {
        driver::process_all_forms(&self.rules, &self.words, consumer, options)
    }

    /// Write every word's forms to `path`, one comma-separated line per
    /// word, encoded in the dictionary's own charset.
    pub fn write_full_dictionary(
        &self,
        path: impl AsRef<Path>,
        options: &ProcessOptions,
    ) -> Result<ProcessReport, DictionaryError> {
        let path = path.as_ref();
        log::info!("writing full dictionary to {}", path.display());
        log::info!("  output charset: {}", self.encoding.name());

        let file = File::create(path).map_err(|source| DictionaryError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        let writer_options = WriterOptions {
            encoding: Some(self.encoding),
            ..WriterOptions::default()
        };
        let mut writer = FullDictionaryWriter::with_options(BufWriter::new(file), &writer_options);
        let report = self.process_all_forms(&mut writer, options)?;
        writer
            .into_inner()
            .map_err(|source| DictionaryError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!(
            "full dictionary generated: {} words, {} skipped",
            report.processed,
            report.skipped()
        );
        Ok(report)
    }

    /// Build a character trie from every word's forms.
    #[cfg(feature = "trie")]
    pub fn build_trie(
        &self,
        trie_options: TrieOptions,
        options: &ProcessOptions,
    ) -> Result<(TrieBuilder, ProcessReport), ProcessingError> {
        let mut trie = TrieBuilder::new(trie_options);
        let report = self.process_all_forms(&mut trie, options)?;
        log::info!(
            "trie built: {} words, {} nodes",
            trie.word_count(),
            trie.node_count()
        );
        Ok((trie, report))
    }
}

/// Load `<dir>/<symbol>.aff` + `.dic` and write `<dir>/<symbol>.all`.
///
/// Returns the output path and the processing report.
pub fn generate_full_dictionary(
    dir: impl AsRef<Path>,
    symbol: &str,
    options: &ProcessOptions,
) -> Result<(PathBuf, ProcessReport), DictionaryError> {
    let dir = dir.as_ref();
    let dictionary = Dictionary::load(dir, symbol)?;
    let out_path = dictionary_file(dir, symbol, FULL_DICTIONARY_EXTENSION);
    let report = dictionary.write_full_dictionary(&out_path, options)?;
    Ok((out_path, report))
}

/// `<dir>/<symbol>.<extension>`
pub fn dictionary_file(dir: &Path, symbol: &str, extension: &str) -> PathBuf {
    dir.join(format!("{symbol}.{extension}"))
}

fn open(path: &Path) -> Result<BufReader<File>, DictionaryError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Attach the file path to a stream read failure.
fn with_path(path: &Path) -> impl Fn(DictionaryError) -> DictionaryError + '_ {
    move |err| match err {
        DictionaryError::Read(source) => DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}
