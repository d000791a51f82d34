// Line-level syntax shared by .aff and .dic files: tags, comments, tokens.
// Origin: MySpellDictionary.java, MySpellSyntaxException.java

/// Tag opening a rule set or rule that operates on word endings.
pub const SUFFIX_TAG: &str = "SFX";

/// Tag opening a rule set or rule that operates on word beginnings.
pub const PREFIX_TAG: &str = "PFX";

/// Combinability flag: the set may be combined with opposite-side rules.
pub const YES_TAG: &str = "Y";

/// Combinability flag: the set is used on its own.
pub const NO_TAG: &str = "N";

/// Marker of the charset declaration line (`SET ISO8859-2`).
pub const CHARSET_MARKER: &str = "SET ";

/// Placeholder meaning "empty" in the strip, add and condition positions.
pub const EMPTY_PLACEHOLDER: &str = "0";

/// Everything from this character to the end of the line is a comment.
pub const COMMENT_CHAR: char = '#';

/// Separates the base form from the rule-set symbols in a word line.
pub const SYMBOLS_SEPARATOR: char = '/';

/// Token count of a rule-set header: side, symbol, combinability, count.
pub const HEADER_TOKEN_COUNT: usize = 4;

/// Token count of a rule line: side, symbol, strip, add, condition.
pub const RULE_TOKEN_COUNT: usize = 5;

/// Which end of a word an affix rule operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

impl AffixKind {
    /// Map a side tag (`PFX`/`SFX`) to its kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            PREFIX_TAG => Some(AffixKind::Prefix),
            SUFFIX_TAG => Some(AffixKind::Suffix),
            _ => None,
        }
    }

    /// The side tag used in affix files.
    pub fn tag(self) -> &'static str {
        match self {
            AffixKind::Prefix => PREFIX_TAG,
            AffixKind::Suffix => SUFFIX_TAG,
        }
    }

    pub fn is_prefix(self) -> bool {
        self == AffixKind::Prefix
    }

    pub fn is_suffix(self) -> bool {
        self == AffixKind::Suffix
    }
}

/// Cut a line at its first comment character.
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_CHAR) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Strip the comment and surrounding whitespace. Blank results mean "skip".
pub fn clean_line(line: &str) -> &str {
    strip_comment(line).trim()
}

/// Split a line into tokens, collapsing runs of whitespace.
pub fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Normalize the `0` placeholder to the empty string.
pub fn placeholder(token: &str) -> &str {
    if token == EMPTY_PLACEHOLDER { "" } else { token }
}

/// The side of a cleaned affix line, judged by its first token.
pub fn line_kind(line: &str) -> Option<AffixKind> {
    line.split_whitespace().next().and_then(AffixKind::from_tag)
}

/// Extract the charset name from a `SET <name>` line.
///
/// The comment is removed first; a line that does not begin with the
/// marker, or declares an empty name, yields `None`.
pub fn charset_declaration(line: &str) -> Option<&str> {
    let name = strip_comment(line).strip_prefix(CHARSET_MARKER)?.trim();
    if name.is_empty() { None } else { Some(name) }
}
