//! 插值错误类型

use strum_macros::{AsRefStr, Display, EnumDiscriminants};
use thiserror::Error;

use crate::options::OptionsBuilderError;

/// 插值标准返回类型
pub type Result<T> = std::result::Result<T, Error>;

/// 插值标准错误类型
///
/// 通过 [`Error::kind`] 获取不含上下文的错误种类.
#[derive(Debug, Error, EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(Hash, Display, AsRefStr))]
pub enum Error {
    #[error("Empty string")]
    EmptyInput,

    #[error("Variable count mismatch: found {found} placeholders, got {expected} variables")]
    CountMismatch { found: usize, expected: usize },

    #[error("Variable '{0}' not found")]
    VariableNotFound(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Pattern must have exactly one capture group: pattern={pattern}, groups={groups}")]
    CaptureGroups { pattern: String, groups: usize },

    #[error("Options config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Options builder error: {0}")]
    Builder(#[from] OptionsBuilderError),
}

impl Error {
    /// 错误种类
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from(self)
    }
}

#[test]
#[cfg(test)]
fn test_error_kind() {
    assert_eq!(Error::EmptyInput.kind(), ErrorKind::EmptyInput);
    assert_eq!(
        Error::VariableNotFound("world".into()).kind().to_string(),
        "VariableNotFound"
    );
    assert_eq!(
        Error::CountMismatch {
            found: 1,
            expected: 2
        }
        .kind()
        .as_ref(),
        "CountMismatch"
    );
}

#[test]
#[cfg(test)]
fn test_error_message() {
    assert_eq!(Error::EmptyInput.to_string(), "Empty string");
    assert_eq!(
        Error::VariableNotFound("world".into()).to_string(),
        "Variable 'world' not found"
    );
    assert_eq!(
        Error::CountMismatch {
            found: 1,
            expected: 2
        }
        .to_string(),
        "Variable count mismatch: found 1 placeholders, got 2 variables"
    );
}
