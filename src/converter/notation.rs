use serde::{Deserialize, Serialize};
use std::fmt;

/// Target notation: how a token sequence is joined back into one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    Kebab,
    Camel,
    Dot,
    Snake,
}

impl Notation {
    pub fn separator(&self) -> &'static str {
        match self {
            Notation::Kebab => "-",
            Notation::Camel => "",
            Notation::Dot => ".",
            Notation::Snake => "_",
        }
    }

    /// Join tokens according to this notation's separator and capitalization rule
    pub fn join<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        match self {
            Notation::Camel => {
                let mut out = String::new();
                for (i, token) in tokens.iter().enumerate() {
                    let lower = token.as_ref().to_lowercase();
                    if i == 0 {
                        out.push_str(&lower);
                    } else {
                        out.push_str(&capitalize(&lower));
                    }
                }
                out
            }
            _ => tokens
                .iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect::<Vec<_>>()
                .join(self.separator()),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Kebab => write!(f, "kebab-case"),
            Notation::Camel => write!(f, "camelCase"),
            Notation::Dot => write!(f, "dot.case"),
            Notation::Snake => write!(f, "snake_case"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_join() {
        assert_eq!(Notation::Camel.join(&["SCREEN", "NAME"]), "screenName");
        assert_eq!(Notation::Camel.join(&["user", "id", "42"]), "userId42");
    }

    #[test]
    fn test_separated_join() {
        let tokens = ["My", "Variable", "Name"];
        assert_eq!(Notation::Kebab.join(&tokens), "my-variable-name");
        assert_eq!(Notation::Dot.join(&tokens), "my.variable.name");
        assert_eq!(Notation::Snake.join(&tokens), "my_variable_name");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Notation::Camel.to_string(), "camelCase");
        assert_eq!(Notation::Dot.to_string(), "dot.case");
    }
}
