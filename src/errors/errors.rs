use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    rule: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, rule: impl Into<String>) -> Self {
        Error {
            internal_error: error_impl,
            rule: rule.into(),
        }
    }

    pub fn get_rule(&self) -> &str {
        &self.rule
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::EmptyMatch { .. } => "EmptyMatch",
            ErrorImpl::DuplicateRule => "DuplicateRule",
            ErrorImpl::ReservedRuleName => "ReservedRuleName",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { .. } => ErrorTip::None,
            ErrorImpl::EmptyMatch { pattern } => ErrorTip::Suggestion(format!(
                "Pattern `{}` of rule `{}` accepts an empty lexeme, require at least one character",
                pattern, self.rule
            )),
            ErrorImpl::DuplicateRule => ErrorTip::Suggestion(format!(
                "Rule `{}` is declared twice, merge the patterns into one alternation",
                self.rule
            )),
            ErrorImpl::ReservedRuleName => ErrorTip::Suggestion(String::from(
                "`undefined` is reserved for unrecognised fragments, pick another rule name",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rule {:?}: {}", self.rule, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid pattern: {message}")]
    InvalidPattern { message: String },
    #[error("pattern {pattern:?} matches the empty string")]
    EmptyMatch { pattern: String },
    #[error("rule declared more than once")]
    DuplicateRule,
    #[error("rule name is reserved")]
    ReservedRuleName,
}
