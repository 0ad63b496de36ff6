pub mod diagnostics;
pub mod notation;
pub mod tokenizer;

pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, NullSink};
pub use notation::Notation;
pub use tokenizer::{tokenize, Punctuation, TokenizeOptions};

use crate::error::{CaseError, EmptyInput};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the supported conversions. `Camel` and `CamelNormalized` share a
/// notation but differ in how they tokenize and validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Conversion {
    Kebab,
    Camel,
    Dot,
    Snake,
    CamelNormalized,
}

impl Conversion {
    pub const ALL: [Conversion; 5] = [
        Conversion::Kebab,
        Conversion::Camel,
        Conversion::Dot,
        Conversion::Snake,
        Conversion::CamelNormalized,
    ];

    pub fn notation(&self) -> Notation {
        match self {
            Conversion::Kebab => Notation::Kebab,
            Conversion::Camel | Conversion::CamelNormalized => Notation::Camel,
            Conversion::Dot => Notation::Dot,
            Conversion::Snake => Notation::Snake,
        }
    }

    pub fn policy(&self, options: &ConverterOptions) -> Policy {
        let normalized =
            TokenizeOptions::NORMALIZED.with_diacritics_stripped(options.strip_diacritics);

        match self {
            Conversion::Kebab => Policy {
                tokenize: TokenizeOptions::DELIMITED,
                validation: Validation::RequireLetter,
                leading_digit: if options.warn_leading_digit {
                    LeadingDigit::Warn
                } else {
                    LeadingDigit::Ignore
                },
            },
            Conversion::Camel => Policy {
                tokenize: TokenizeOptions::DELIMITED,
                validation: Validation::RequireContent,
                leading_digit: LeadingDigit::Reject,
            },
            Conversion::Dot => Policy {
                tokenize: TokenizeOptions::DELIMITED.with_case_boundary(true),
                validation: Validation::RequireContent,
                leading_digit: LeadingDigit::Ignore,
            },
            Conversion::Snake => Policy {
                tokenize: normalized.with_punctuation(Punctuation::Drop),
                validation: Validation::Lenient,
                leading_digit: LeadingDigit::Ignore,
            },
            Conversion::CamelNormalized => Policy {
                tokenize: normalized,
                validation: Validation::Lenient,
                leading_digit: LeadingDigit::Ignore,
            },
        }
    }
}

impl FromStr for Conversion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['_', '.', ' '], "-");
        match key.as_str() {
            "kebab" | "kebab-case" => Ok(Conversion::Kebab),
            "camel" | "camelcase" | "camel-case" => Ok(Conversion::Camel),
            "dot" | "dot-case" => Ok(Conversion::Dot),
            "snake" | "snake-case" => Ok(Conversion::Snake),
            "camel-normalized" | "normalized-camel" | "loose-camel" => {
                Ok(Conversion::CamelNormalized)
            }
            _ => Err(format!("Unknown conversion: {}", s)),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Kebab => write!(f, "kebab"),
            Conversion::Camel => write!(f, "camel"),
            Conversion::Dot => write!(f, "dot"),
            Conversion::Snake => write!(f, "snake"),
            Conversion::CamelNormalized => write!(f, "camel-normalized"),
        }
    }
}

/// Input checks run before tokenizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Reject `""` and input without any ASCII letter
    RequireLetter,
    /// Reject blank input and input that yields no tokens
    RequireContent,
    /// Never reject; degenerate input produces an empty string
    Lenient,
}

impl Validation {
    fn check(&self, input: &str, notation: Notation) -> Result<(), CaseError> {
        match self {
            Validation::RequireLetter => {
                if input.is_empty() {
                    return Err(EmptyInput::Empty.into());
                }
                if !input.chars().any(|c| c.is_ascii_alphabetic()) {
                    return Err(EmptyInput::NoLetters.into());
                }
            }
            Validation::RequireContent => {
                if input.trim().is_empty() {
                    return Err(EmptyInput::Blank(notation).into());
                }
            }
            Validation::Lenient => {}
        }
        Ok(())
    }
}

/// What happens when the output starts with a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingDigit {
    Ignore,
    Warn,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub tokenize: TokenizeOptions,
    pub validation: Validation,
    pub leading_digit: LeadingDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Applies to the normalizing conversions only
    pub strip_diacritics: bool,
    /// Emit a diagnostic when kebab-case output starts with a digit
    pub warn_leading_digit: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            strip_diacritics: true,
            warn_leading_digit: true,
        }
    }
}

pub struct CaseConverter<S = LogSink> {
    options: ConverterOptions,
    sink: S,
}

impl CaseConverter<LogSink> {
    pub fn new(options: ConverterOptions) -> Self {
        Self::with_sink(options, LogSink)
    }
}

impl Default for CaseConverter<LogSink> {
    fn default() -> Self {
        Self::new(ConverterOptions::default())
    }
}

impl<S: DiagnosticSink> CaseConverter<S> {
    pub fn with_sink(options: ConverterOptions, sink: S) -> Self {
        Self { options, sink }
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Tokenize `input` and join it in the conversion's notation
    pub fn convert(&mut self, input: &str, conversion: Conversion) -> Result<String, CaseError> {
        let notation = conversion.notation();
        let policy = conversion.policy(&self.options);

        policy.validation.check(input, notation)?;

        let tokens = tokenize(input, &policy.tokenize);
        debug!("{} tokens for {:?}: {:?}", conversion, input, tokens);

        if tokens.is_empty() {
            if policy.validation == Validation::Lenient {
                return Ok(String::new());
            }
            return Err(EmptyInput::NoTokens.into());
        }

        let output = notation.join(&tokens);

        if output.starts_with(|c: char| c.is_ascii_digit()) {
            match policy.leading_digit {
                LeadingDigit::Ignore => {}
                LeadingDigit::Warn => self.sink.emit(Diagnostic::LeadingDigit {
                    output: output.clone(),
                }),
                LeadingDigit::Reject => return Err(CaseError::InvalidIdentifier(output)),
            }
        }

        Ok(output)
    }

    pub fn kebab_case(&mut self, input: &str) -> Result<String, CaseError> {
        self.convert(input, Conversion::Kebab)
    }

    pub fn camel_case(&mut self, input: &str) -> Result<String, CaseError> {
        self.convert(input, Conversion::Camel)
    }

    pub fn dot_case(&mut self, input: &str) -> Result<String, CaseError> {
        self.convert(input, Conversion::Dot)
    }

    pub fn camel_case_normalized(&mut self, input: Option<&str>) -> String {
        self.convert_normalizing(input, Conversion::CamelNormalized)
    }

    pub fn snake_case(&mut self, input: Option<&str>) -> String {
        self.convert_normalizing(input, Conversion::Snake)
    }

    fn convert_normalizing(&mut self, input: Option<&str>, conversion: Conversion) -> String {
        match input {
            Some(text) => self.convert(text, conversion).unwrap_or_default(),
            None => String::new(),
        }
    }
}

/// Convert to kebab-case, logging the leading-digit warning
pub fn to_kebab_case(input: &str) -> Result<String, CaseError> {
    CaseConverter::<LogSink>::default().kebab_case(input)
}

/// Convert to kebab-case, sending diagnostics to `sink`
pub fn to_kebab_case_with<S: DiagnosticSink>(input: &str, sink: S) -> Result<String, CaseError> {
    CaseConverter::with_sink(ConverterOptions::default(), sink).kebab_case(input)
}

pub fn to_camel_case(input: &str) -> Result<String, CaseError> {
    CaseConverter::<LogSink>::default().camel_case(input)
}

pub fn to_dot_case(input: &str) -> Result<String, CaseError> {
    CaseConverter::<LogSink>::default().dot_case(input)
}

/// camelCase over fully normalized tokens. Never fails; `None` gives `""`.
pub fn to_camel_case_normalized(input: Option<&str>) -> String {
    CaseConverter::<LogSink>::default().camel_case_normalized(input)
}

/// snake_case over fully normalized tokens. Never fails; `None` gives `""`.
pub fn to_snake_case(input: Option<&str>) -> String {
    CaseConverter::<LogSink>::default().snake_case(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collecting() -> CaseConverter<Vec<Diagnostic>> {
        CaseConverter::with_sink(ConverterOptions::default(), Vec::new())
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("first name").unwrap(), "first-name");
        assert_eq!(to_kebab_case("user_id").unwrap(), "user-id");
        assert_eq!(to_kebab_case("SCREEN_NAME").unwrap(), "screen-name");
        assert_eq!(to_kebab_case("  hello__World - x ").unwrap(), "hello-world-x");
        assert_eq!(to_kebab_case("myVariableName").unwrap(), "myvariablename");
        assert_eq!(to_kebab_case("foo.bar baz").unwrap(), "foo.bar-baz");
    }

    #[test]
    fn test_kebab_case_rejections() {
        assert_eq!(
            to_kebab_case(""),
            Err(CaseError::EmptyInput(EmptyInput::Empty))
        );
        assert_eq!(
            to_kebab_case("123 456"),
            Err(CaseError::EmptyInput(EmptyInput::NoLetters))
        );
        assert_eq!(
            to_kebab_case("   ").unwrap_err().to_string(),
            "Input must contain at least one letter character."
        );
    }

    #[test]
    fn test_kebab_case_leading_digit_warns() {
        let mut converter = collecting();
        assert_eq!(converter.kebab_case("1st place").unwrap(), "1st-place");
        assert_eq!(
            converter.into_sink(),
            vec![Diagnostic::LeadingDigit {
                output: "1st-place".to_string()
            }]
        );

        let mut converter = collecting();
        converter.kebab_case("first place").unwrap();
        assert!(converter.into_sink().is_empty());
    }

    #[test]
    fn test_kebab_case_with_caller_sink() {
        let mut collected: Vec<Diagnostic> = Vec::new();
        assert_eq!(to_kebab_case_with("9 lives", &mut collected).unwrap(), "9-lives");
        assert_eq!(
            collected,
            vec![Diagnostic::LeadingDigit {
                output: "9-lives".to_string()
            }]
        );

        let mut collected: Vec<Diagnostic> = Vec::new();
        assert_eq!(to_kebab_case_with("nine lives", &mut collected).unwrap(), "nine-lives");
        assert!(collected.is_empty());
    }

    #[test]
    fn test_kebab_case_warning_can_be_disabled() {
        let options = ConverterOptions {
            warn_leading_digit: false,
            ..Default::default()
        };
        let mut converter = CaseConverter::with_sink(options, Vec::<Diagnostic>::new());
        converter.kebab_case("2fa code").unwrap();
        assert!(converter.into_sink().is_empty());
    }

    #[test]
    fn test_kebab_case_output_shape() {
        let inputs = [
            "Hello World",
            "  __Leading and trailing__  ",
            "MIXED_case-With   spaces",
            "tab\tand\nnewline",
            "a---b___c",
            "x",
        ];
        for input in inputs {
            let out = to_kebab_case(input).unwrap();
            assert!(!out.chars().any(|c| c.is_uppercase()), "{out}");
            assert!(!out.chars().any(char::is_whitespace), "{out}");
            assert!(!out.contains("--"), "{out}");
            assert!(!out.starts_with('-') && !out.ends_with('-'), "{out}");
        }
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("first name").unwrap(), "firstName");
        assert_eq!(to_camel_case("user_id").unwrap(), "userId");
        assert_eq!(to_camel_case("SCREEN_NAME").unwrap(), "screenName");
        assert_eq!(to_camel_case("mobile-number").unwrap(), "mobileNumber");
        assert_eq!(to_camel_case("page 2nd").unwrap(), "page2nd");
    }

    #[test]
    fn test_camel_case_does_not_split_case_boundaries() {
        assert_eq!(to_camel_case("myVariableName").unwrap(), "myvariablename");
        assert_eq!(to_camel_case("helloWorld").unwrap(), "helloworld");
        assert_eq!(to_camel_case("iPhone case").unwrap(), "iphoneCase");
    }

    #[test]
    fn test_camel_case_rejections() {
        assert_eq!(
            to_camel_case(""),
            Err(CaseError::EmptyInput(EmptyInput::Blank(Notation::Camel)))
        );
        assert_eq!(
            to_camel_case(" \t ").unwrap_err().to_string(),
            "Cannot convert empty string to camelCase."
        );
        assert_eq!(
            to_camel_case("___"),
            Err(CaseError::EmptyInput(EmptyInput::NoTokens))
        );
        assert_eq!(
            to_camel_case("123variable"),
            Err(CaseError::InvalidIdentifier("123variable".to_string()))
        );
    }

    #[test]
    fn test_dot_case() {
        assert_eq!(to_dot_case("first name").unwrap(), "first.name");
        assert_eq!(to_dot_case("user_id").unwrap(), "user.id");
        assert_eq!(to_dot_case("SCREEN_NAME").unwrap(), "screen.name");
        assert_eq!(to_dot_case("mobile-number").unwrap(), "mobile.number");
        assert_eq!(to_dot_case("myVariableName").unwrap(), "my.variable.name");
        assert_eq!(to_dot_case("2nd place").unwrap(), "2nd.place");
    }

    #[test]
    fn test_dot_case_rejections() {
        assert_eq!(
            to_dot_case("").unwrap_err().to_string(),
            "Cannot convert empty string to dot.case."
        );
        assert_eq!(
            to_dot_case("-_-"),
            Err(CaseError::EmptyInput(EmptyInput::NoTokens))
        );
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case(Some("myVariableName")), "my_variable_name");
        assert_eq!(to_snake_case(Some("Crème brûlée")), "creme_brulee");
        assert_eq!(to_snake_case(Some("  --Hello  World-- ")), "hello_world");
        assert_eq!(to_snake_case(Some("don't stop")), "dont_stop");
        assert_eq!(to_snake_case(Some("2024 Plan")), "2024_plan");
        assert_eq!(to_snake_case(Some("HTTPServer")), "httpserver");
    }

    #[test]
    fn test_snake_case_degrades() {
        assert_eq!(to_snake_case(None), "");
        assert_eq!(to_snake_case(Some("")), "");
        assert_eq!(to_snake_case(Some("!!! ???")), "");
    }

    #[test]
    fn test_camel_case_normalized() {
        assert_eq!(to_camel_case_normalized(Some("first name")), "firstName");
        assert_eq!(to_camel_case_normalized(Some("myVariableName")), "myVariableName");
        assert_eq!(to_camel_case_normalized(Some("Crème brûlée")), "cremeBrulee");
        assert_eq!(to_camel_case_normalized(Some("foo.bar-baz")), "fooBarBaz");
        assert_eq!(to_camel_case_normalized(Some("123 abc")), "123Abc");
    }

    #[test]
    fn test_camel_case_normalized_degrades() {
        assert_eq!(to_camel_case_normalized(None), "");
        assert_eq!(to_camel_case_normalized(Some("   ")), "");
        assert_eq!(to_camel_case_normalized(Some("--__--")), "");
    }

    #[test]
    fn test_diacritics_can_be_kept() {
        let options = ConverterOptions {
            strip_diacritics: false,
            ..Default::default()
        };
        let mut converter = CaseConverter::with_sink(options, NullSink);
        assert_eq!(converter.snake_case(Some("na\u{ef}ve user")), "nave_user");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "first name",
            "SCREEN_NAME",
            "myVariableName",
            "mobile-number",
            "Crème brûlée recipe",
            "user id 42",
        ];
        let mut converter = CaseConverter::with_sink(ConverterOptions::default(), NullSink);
        for input in inputs {
            // delimiter camelCase lowercases whole words, so "firstName" -> "firstname"
            for conversion in Conversion::ALL
                .into_iter()
                .filter(|c| *c != Conversion::Camel)
            {
                let once = converter.convert(input, conversion).unwrap();
                let twice = converter.convert(&once, conversion).unwrap();
                assert_eq!(once, twice, "{conversion} on {input:?}");
            }
        }
    }

    #[test]
    fn test_conversion_from_str() {
        assert_eq!("kebab".parse::<Conversion>().unwrap(), Conversion::Kebab);
        assert_eq!("snake_case".parse::<Conversion>().unwrap(), Conversion::Snake);
        assert_eq!("dot.case".parse::<Conversion>().unwrap(), Conversion::Dot);
        assert_eq!("camelCase".parse::<Conversion>().unwrap(), Conversion::Camel);
        assert_eq!(
            "camel-normalized".parse::<Conversion>().unwrap(),
            Conversion::CamelNormalized
        );
        assert!("title".parse::<Conversion>().is_err());

        for conversion in Conversion::ALL {
            assert_eq!(conversion.to_string().parse::<Conversion>().unwrap(), conversion);
        }
    }
}
