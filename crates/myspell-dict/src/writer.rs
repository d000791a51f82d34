// Full dictionary output: one line of comma-separated forms per word.
// Origin: FullDictionaryWriter.java

use std::io::{self, BufRead, Write};

use encoding_rs::{Encoding, UTF_8};
use hashbrown::HashSet;
use myspell_core::syntax;

use crate::consumer::{ConsumerError, WordFormsConsumer};

/// Output settings for [`FullDictionaryWriter`].
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Character placed between the forms of one word.
    pub separator: char,
    /// Output encoding. UTF-8 when `None`.
    pub encoding: Option<&'static Encoding>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            encoding: None,
        }
    }
}

/// Consumer writing every word as `base,form1,form2,...` on its own line.
///
/// Forms are trimmed before writing. Words whose base form is in the ignore
/// set are left out. Characters the output encoding cannot represent are
/// written as numeric character references.
pub struct FullDictionaryWriter<W: Write> {
    out: W,
    encoding: &'static Encoding,
    separator: char,
    ignored: HashSet<String>,
    written: usize,
    line: String,
}

impl<W: Write> FullDictionaryWriter<W> {
    /// Create a writer with default options (UTF-8, comma separated).
    pub fn new(out: W) -> Self {
        Self::with_options(out, &WriterOptions::default())
    }

    pub fn with_options(out: W, options: &WriterOptions) -> Self {
        Self {
            out,
            encoding: options.encoding.unwrap_or(UTF_8),
            separator: options.separator,
            ignored: HashSet::new(),
            written: 0,
            line: String::new(),
        }
    }

    /// Skip words whose (trimmed) base form is in `ignored`.
    pub fn with_ignored<I, S>(mut self, ignored: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(ignored.into_iter().map(Into::into));
        self
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Number of lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> WordFormsConsumer for FullDictionaryWriter<W> {
    fn consume(&mut self, forms: &[String]) -> Result<(), ConsumerError> {
        let Some(base) = forms.first() else {
            return Ok(());
        };
        if self.ignored.contains(base.trim()) {
            return Ok(());
        }

        self.line.clear();
        for (i, form) in forms.iter().enumerate() {
            if i > 0 {
                self.line.push(self.separator);
            }
            self.line.push_str(form.trim());
        }
        self.line.push('\n');

        let (bytes, _, unmappable) = self.encoding.encode(&self.line);
        if unmappable {
            log::warn!(
                "word '{}' has characters not representable in {}",
                base.trim(),
                self.encoding.name()
            );
        }
        self.out.write_all(&bytes)?;
        self.written += 1;
        Ok(())
    }
}

/// Read a list of base forms to leave out of the full dictionary.
///
/// One word per line; comments and blank lines are skipped.
pub fn read_ignore_list<R: BufRead>(reader: R) -> io::Result<HashSet<String>> {
    let mut ignored = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let word = syntax::clean_line(&line);
        if !word.is_empty() {
            ignored.insert(word.to_string());
        }
    }
    Ok(ignored)
}
