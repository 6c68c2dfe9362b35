//! 占位符匹配模式

use std::{fmt, ops::Range, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::*;

/// 默认占位符模式, 匹配 `{{name}}` (name 不含 `{`)
pub const DEFAULT_PATTERN: &str = r"\{\{([^{]+)\}\}";

static DEFAULT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_PATTERN).expect("default pattern is a valid regex"));

/// 占位符匹配模式
///
/// 包装一个恰含一个捕获组的正则, 捕获组即变量名.
/// 序列化为正则源串, 反序列化时重新编译并校验.
#[derive(Debug, Clone, SerializeDisplay, DeserializeFromStr)]
pub struct Pattern(Regex);

impl Pattern {
    /// 编译模式串
    pub fn new(pattern: &str) -> Result<Self> {
        Self::try_from(Regex::new(pattern)?)
    }

    /// 模式源串
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.0
    }

    /// 从左到右扫描模板, 返回所有不重叠的占位符
    ///
    /// 捕获组未参与匹配时, 变量名为空串.
    pub fn placeholders<'t>(&self, template: &'t str) -> Vec<Placeholder<'t>> {
        self.0
            .captures_iter(template)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(Placeholder {
                    range: whole.range(),
                    text: whole.as_str(),
                    name: caps.get(1).map_or("", |m| m.as_str()),
                })
            })
            .collect()
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self(DEFAULT_REGEX.clone())
    }
}

impl TryFrom<Regex> for Pattern {
    type Error = Error;

    fn try_from(regex: Regex) -> Result<Self> {
        // captures_len 包含整体匹配
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(Error::CaptureGroups {
                pattern: regex.as_str().to_string(),
                groups,
            });
        }
        Ok(Self(regex))
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

/// 模板中的一个占位符
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder<'t> {
    /// 整体匹配在模板中的字节范围
    pub range: Range<usize>,
    /// 整体匹配文本, 如 `{{name}}`
    pub text: &'t str,
    /// 捕获的变量名
    pub name: &'t str,
}

#[test]
#[cfg(test)]
fn test_default_placeholders() {
    let found = Pattern::default().placeholders("Hello {{world}} and {{0}}!");
    assert_eq!(
        found,
        vec![
            Placeholder {
                range: 6..15,
                text: "{{world}}",
                name: "world",
            },
            Placeholder {
                range: 20..25,
                text: "{{0}}",
                name: "0",
            },
        ]
    );

    assert!(Pattern::default().placeholders("no {placeholder} {{}}").is_empty());
}

#[test]
#[cfg(test)]
fn test_default_pattern_edges() {
    let pattern = Pattern::default();

    // 名字不能含 `{`, 匹配从最后一个 `{{` 开始
    let found = pattern.placeholders("{{{a}}");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].range, 1..6);
    assert_eq!(found[0].name, "a");

    // 名字可以含 `}`
    let found = pattern.placeholders("{{a}}}}");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "a}}");
}

#[test]
#[cfg(test)]
fn test_optional_group() {
    let found = Pattern::new(r"<(\w+)?>").unwrap().placeholders("<> <x>");
    assert_eq!(found[0].name, "");
    assert_eq!(found[0].text, "<>");
    assert_eq!(found[1].name, "x");
}

#[test]
#[cfg(test)]
fn test_capture_groups() {
    let err = Pattern::new(r"%\{\w+\}").unwrap_err();
    assert!(matches!(err, Error::CaptureGroups { groups: 0, .. }));

    let err = Pattern::new(r"(\w)(\w)").unwrap_err();
    assert!(matches!(err, Error::CaptureGroups { groups: 2, .. }));

    assert!(matches!(Pattern::new("(").unwrap_err(), Error::Regex(_)));
    assert!(Pattern::new(r"%\{([^}]+)\}").is_ok());
}

#[test]
#[cfg(test)]
fn test_pattern_serde() {
    let pattern: Pattern = serde_json::from_value(serde_json::json!(r"%\{(\w+)\}")).unwrap();
    assert_eq!(pattern, r"%\{(\w+)\}".parse().unwrap());
    assert_eq!(
        serde_json::to_value(&pattern).unwrap(),
        serde_json::json!(r"%\{(\w+)\}")
    );

    assert!(serde_json::from_value::<Pattern>(serde_json::json!(r"%\{\w+\}")).is_err());
    assert_eq!(Pattern::default().to_string(), DEFAULT_PATTERN);
}
