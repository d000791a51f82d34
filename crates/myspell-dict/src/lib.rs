//! MySpell dictionary loading and word-form generation.
//!
//! Reads an affix file (`*.aff`) and a word list (`*.dic`) into a
//! [`Dictionary`], then expands every word into all of its surface forms and
//! hands each form list to a [`WordFormsConsumer`].
//!
//! # Architecture
//!
//! - [`charset`] -- `SET` line detection and per-line decoding
//! - [`loader`] -- Streaming parsers for the affix file and the word list
//! - [`dictionary`] -- The loaded, read-only dictionary and its entry points
//! - [`driver`] -- Per-word expansion loop with error isolation
//! - [`consumer`] -- The capability that receives each word's forms
//! - [`writer`] -- Full dictionary writer (one comma-separated line per word)
//! - [`trie`] -- Character trie built from the generated forms

pub mod charset;
pub mod consumer;
pub mod dictionary;
pub mod driver;
pub mod loader;
#[cfg(feature = "trie")]
pub mod trie;
pub mod writer;

use std::io;
use std::path::PathBuf;

pub use consumer::{ConsumerError, WordFormsConsumer};
pub use dictionary::{Dictionary, generate_full_dictionary};
pub use driver::{ProcessOptions, ProcessReport, ProcessingError};
pub use myspell_core::{AffixRule, AffixRuleSet, FormatError, RuleTable, WordPattern};
#[cfg(feature = "trie")]
pub use trie::{TrieBuilder, TrieOptions};
pub use writer::{FullDictionaryWriter, WriterOptions};

/// Error type for loading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Malformed affix or word file content.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A dictionary file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// Reading from a caller-supplied stream failed. File reads report
    /// [`DictionaryError::Io`] with the path instead.
    #[error("read error: {0}")]
    Read(#[from] io::Error),

    /// The `SET` line names a charset with no known decoder.
    #[error("unsupported charset: {0}")]
    UnsupportedCharset(String),

    /// An output file could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Word processing was aborted.
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}
