// Charset detection from the affix file's SET line, and line decoding.
// Origin: MySpellDictionary.java (detectCharset)

use std::io::{self, BufRead};

use encoding_rs::{Encoding, WINDOWS_1252};
use myspell_core::{FormatError, syntax};

use crate::DictionaryError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Scan an affix file for its `SET <charset>` declaration.
///
/// Lines are read as bytes and interpreted as Latin-1 until the
/// declaration is found, so the scan works whatever the real charset is.
/// A file without a declaration is a [`FormatError::MissingCharset`].
pub fn detect_charset<R: BufRead>(mut reader: R) -> Result<String, DictionaryError> {
    let mut buf = Vec::new();
    let mut first = true;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(FormatError::MissingCharset.into());
        }
        let mut bytes = buf.as_slice();
        if std::mem::take(&mut first) {
            bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        }
        let (line, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
        if let Some(name) = syntax::charset_declaration(&line) {
            log::debug!("detected charset name: {name}");
            return Ok(name.to_string());
        }
    }
}

/// Find a decoder for a charset name as written in MySpell files.
///
/// WHATWG labels are accepted as-is; the `microsoft-cpNNNN` spelling used by
/// some MySpell dictionaries maps to `windows-NNNN`.
pub fn resolve_encoding(name: &str) -> Result<&'static Encoding, DictionaryError> {
    let label = name.trim().to_ascii_lowercase();
    Encoding::for_label(label.as_bytes())
        .or_else(|| {
            let code_page = label.strip_prefix("microsoft-cp")?;
            Encoding::for_label(format!("windows-{code_page}").as_bytes())
        })
        .ok_or_else(|| DictionaryError::UnsupportedCharset(name.to_string()))
}

/// Iterator over the lines of a byte stream, decoded with a fixed encoding.
///
/// Line terminators (`\n`, `\r\n`) are removed. A byte-order mark on the
/// first line is dropped. Malformed sequences decode to U+FFFD.
pub struct DecodedLines<R> {
    reader: R,
    encoding: &'static Encoding,
    buf: Vec<u8>,
    first: bool,
    line_number: usize,
}

impl<R: BufRead> DecodedLines<R> {
    pub fn new(reader: R, encoding: &'static Encoding) -> Self {
        Self {
            reader,
            encoding,
            buf: Vec::new(),
            first: true,
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for DecodedLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(e)),
        }
        self.line_number += 1;

        let mut bytes = self.buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }

        let (line, malformed) = if std::mem::take(&mut self.first) {
            self.encoding.decode_with_bom_removal(bytes)
        } else {
            self.encoding.decode_without_bom_handling(bytes)
        };
        if malformed {
            log::warn!(
                "line {} is not valid {}; replaced malformed bytes",
                self.line_number,
                self.encoding.name()
            );
        }
        Some(Ok(line.into_owned()))
    }
}
