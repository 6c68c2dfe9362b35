//! 插值选项

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{error::*, pattern::Pattern};

/// 插值选项
///
/// 所有字段均有默认值, 配置对象可只给出部分字段:
///
/// ```json
/// { "pattern": "%\\{([^}]+)\\}", "raw": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Deserialize, Serialize)]
#[builder(default)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// 占位符模式, 默认匹配 `{{name}}`
    pub pattern: Pattern,
    /// 校验模板与变量表的对应关系
    pub sanity: bool,
    /// 即使可以拼接也返回片段
    pub raw: bool,
}

impl Options {
    /// 从 JSON 配置解析
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            sanity: true,
            raw: false,
        }
    }
}

#[test]
#[cfg(test)]
fn test_options_builder() {
    let options = OptionsBuilder::default().raw(true).build().unwrap();
    assert_eq!(
        options,
        Options {
            raw: true,
            ..Default::default()
        }
    );
    assert!(options.sanity);

    let pattern = Pattern::new(r"%\{([^}]+)\}").unwrap();
    let options = OptionsBuilder::default()
        .pattern(pattern.clone())
        .sanity(false)
        .build()
        .unwrap();
    assert_eq!(options.pattern, pattern);
    assert!(!options.sanity);
    assert!(!options.raw);
}

#[test]
#[cfg(test)]
fn test_options_from_json() {
    assert_eq!(Options::from_json("{}").unwrap(), Options::default());

    let options = Options::from_json(r#"{ "pattern": "%\\{([^}]+)\\}", "raw": true }"#).unwrap();
    assert_eq!(options.pattern.as_str(), r"%\{([^}]+)\}");
    assert!(options.sanity);
    assert!(options.raw);

    let err = Options::from_json(r#"{ "pattern": "%\\{[^}]+\\}" }"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    let err = Options::from_json(r#"{ "sanitize": false }"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
#[cfg(test)]
fn test_options_serialize() {
    let json = serde_json::to_value(Options::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "pattern": crate::pattern::DEFAULT_PATTERN,
            "sanity": true,
            "raw": false,
        })
    );
}
