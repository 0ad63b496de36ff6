pub mod cli;
pub mod config;
pub mod converter;
pub mod error;

pub use config::Config;
pub use converter::{
    to_camel_case, to_camel_case_normalized, to_dot_case, to_kebab_case, to_kebab_case_with,
    to_snake_case, CaseConverter, Conversion, ConverterOptions, Diagnostic, DiagnosticSink,
    Notation,
};
pub use error::{CaseError, EmptyInput};
