use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // ASCII only, matching how identifiers are usually written
    static ref CASE_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    static ref DELIMITER_RUN: Regex = Regex::new(r"[\s_-]+").unwrap();
    static ref NON_ALPHANUMERIC_RUN: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
    static ref NON_IDENTIFIER_CHAR: Regex = Regex::new(r"[^A-Za-z0-9_\s-]").unwrap();
}

/// What to do with characters that are neither ASCII alphanumerics nor
/// delimiters (whitespace, `_`, `-`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuation {
    /// Leave them inside the surrounding token
    Keep,
    /// Treat them as separators
    Split,
    /// Delete them without splitting
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizeOptions {
    pub split_on_case_boundary: bool,
    pub strip_diacritics: bool,
    pub punctuation: Punctuation,
}

impl TokenizeOptions {
    /// Plain delimiter splitting on whitespace, underscores and hyphens
    pub const DELIMITED: Self = Self {
        split_on_case_boundary: false,
        strip_diacritics: false,
        punctuation: Punctuation::Keep,
    };

    /// Full normalization: diacritics, camelCase boundaries, punctuation as separators
    pub const NORMALIZED: Self = Self {
        split_on_case_boundary: true,
        strip_diacritics: true,
        punctuation: Punctuation::Split,
    };

    pub fn with_case_boundary(mut self, split: bool) -> Self {
        self.split_on_case_boundary = split;
        self
    }

    pub fn with_diacritics_stripped(mut self, strip: bool) -> Self {
        self.strip_diacritics = strip;
        self
    }

    pub fn with_punctuation(mut self, punctuation: Punctuation) -> Self {
        self.punctuation = punctuation;
        self
    }
}

/// Split raw text into word tokens. Tokens keep their original casing; the
/// notation decides how to case them when joining.
pub fn tokenize(input: &str, options: &TokenizeOptions) -> Vec<String> {
    let mut text = Cow::Borrowed(input);

    if options.strip_diacritics {
        text = Cow::Owned(strip_diacritics(&text));
    }

    if options.split_on_case_boundary {
        text = Cow::Owned(CASE_BOUNDARY.replace_all(&text, "${1} ${2}").into_owned());
    }

    let separators: &Regex = match options.punctuation {
        Punctuation::Keep => &DELIMITER_RUN,
        Punctuation::Split => &NON_ALPHANUMERIC_RUN,
        Punctuation::Drop => {
            text = Cow::Owned(NON_IDENTIFIER_CHAR.replace_all(&text, "").into_owned());
            &DELIMITER_RUN
        }
    };

    separators
        .split(&text)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decompose (NFKD) and remove combining diacritical marks U+0300..=U+036F
pub fn strip_diacritics(input: &str) -> String {
    input
        .nfkd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}
