//! 模板插值

use std::borrow::Cow;

use crate::{
    error::*, options::Options, pattern::Placeholder, value::Variable, variables::Variables,
};

/// 插值片段
#[derive(Debug, PartialEq)]
pub enum Segment<'a, V> {
    /// 模板原文
    Literal(&'a str),
    /// 变量表中的值, 原样引用
    Value(&'a V),
    /// 变量表中没有的变量名 (仅在关闭校验或变量名为空时出现)
    Missing(&'a str),
}

impl<V> Clone for Segment<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Segment<'_, V> {}

impl<'a, V> Segment<'a, V> {
    pub fn value(&self) -> Option<&'a V> {
        match *self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl<'a, V: Variable> Segment<'a, V> {
    /// 片段可拼接时的文本
    pub fn text(&self) -> Option<Cow<'a, str>> {
        match *self {
            Self::Literal(s) => Some(Cow::Borrowed(s)),
            Self::Value(v) => v.text(),
            Self::Missing(_) => None,
        }
    }
}

/// 插值结果
#[derive(Debug, PartialEq)]
pub enum Interpolation<'a, V> {
    /// 拼接后的字符串 (模板无占位符时借用原模板)
    Text(Cow<'a, str>),
    /// 原文与变量值交错的片段
    Segments(Vec<Segment<'a, V>>),
}

impl<'a, V> Interpolation<'a, V> {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_ref()),
            Self::Segments(_) => None,
        }
    }

    pub fn into_text(self) -> Option<Cow<'a, str>> {
        match self {
            Self::Text(t) => Some(t),
            Self::Segments(_) => None,
        }
    }

    pub fn segments(&self) -> Option<&[Segment<'a, V>]> {
        match self {
            Self::Text(_) => None,
            Self::Segments(s) => Some(s.as_slice()),
        }
    }

    pub fn into_segments(self) -> Option<Vec<Segment<'a, V>>> {
        match self {
            Self::Text(_) => None,
            Self::Segments(s) => Some(s),
        }
    }
}

impl<'a, V: Variable> Interpolation<'a, V> {
    /// 拼接为字符串, 含不可拼接的片段时返回 None
    pub fn try_join(&self) -> Option<Cow<'a, str>> {
        match self {
            Self::Text(t) => Some(t.clone()),
            Self::Segments(s) => join(s).map(Cow::Owned),
        }
    }
}

/// 模板插值器
///
/// 持有编译好的占位符模式, 可对多个模板重复使用.
#[derive(Debug, Clone, Default)]
pub struct Interpolator {
    options: Options,
}

impl Interpolator {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// 以当前选项插值
    pub fn interpolate<'a, M>(
        &self,
        template: &'a str,
        variables: &'a M,
    ) -> Result<Interpolation<'a, M::Value>>
    where
        M: Variables + ?Sized,
    {
        interpolate_with(template, variables, &self.options)
    }
}

/// 以默认选项插值
///
/// 默认匹配 `{{name}}`, 开启校验, 可拼接时返回字符串.
pub fn interpolate<'a, M>(template: &'a str, variables: &'a M) -> Result<Interpolation<'a, M::Value>>
where
    M: Variables + ?Sized,
{
    interpolate_with(template, variables, &Options::default())
}

/// 以给定选项插值
///
/// 开启校验时:
/// - 模板为空返回 [`Error::EmptyInput`]
/// - 占位符个数 (重名占位符分别计数) 与变量个数不等返回 [`Error::CountMismatch`]
/// - 非空变量名不在变量表中返回 [`Error::VariableNotFound`]
///
/// 模板中没有占位符时, 无论选项如何都原样返回模板.
pub fn interpolate_with<'a, M>(
    template: &'a str,
    variables: &'a M,
    options: &Options,
) -> Result<Interpolation<'a, M::Value>>
where
    M: Variables + ?Sized,
{
    let Options {
        pattern,
        sanity,
        raw,
    } = options;

    if template.is_empty() && *sanity {
        return Err(Error::EmptyInput);
    }

    let placeholders = pattern.placeholders(template);
    if placeholders.is_empty() {
        tracing::trace!(pattern = pattern.as_str(), "no placeholder in template");
        return Ok(Interpolation::Text(Cow::Borrowed(template)));
    }

    tracing::debug!(
        placeholders = placeholders.len(),
        variables = variables.len(),
        sanity = *sanity,
        raw = *raw,
        "placeholders scanned"
    );

    if *sanity {
        check(&placeholders, variables)?;
    }

    let segments = split(template, &placeholders, variables);
    if !*raw {
        if let Some(text) = join(&segments) {
            return Ok(Interpolation::Text(Cow::Owned(text)));
        }
    }

    tracing::debug!(segments = segments.len(), "returning raw segments");
    Ok(Interpolation::Segments(segments))
}

/// 校验占位符与变量表一一对应
fn check<M>(placeholders: &[Placeholder<'_>], variables: &M) -> Result<()>
where
    M: Variables + ?Sized,
{
    if placeholders.len() != variables.len() {
        return Err(Error::CountMismatch {
            found: placeholders.len(),
            expected: variables.len(),
        });
    }

    match placeholders
        .iter()
        .find(|p| !p.name.is_empty() && !variables.contains(p.name))
    {
        Some(p) => Err(Error::VariableNotFound(p.name.to_string())),
        None => Ok(()),
    }
}

/// 按占位符位置切分模板, 生成片段
///
/// 只替换模式实际匹配到的位置, 不会按变量名再次搜索原文.
fn split<'a, M>(
    template: &'a str,
    placeholders: &[Placeholder<'a>],
    variables: &'a M,
) -> Vec<Segment<'a, M::Value>>
where
    M: Variables + ?Sized,
{
    let mut segments = Vec::with_capacity(placeholders.len() * 2 + 1);
    let mut last = 0;

    for placeholder in placeholders {
        if placeholder.range.start > last {
            segments.push(Segment::Literal(&template[last..placeholder.range.start]));
        }
        segments.push(match variables.get(placeholder.name) {
            Some(value) => Segment::Value(value),
            None => Segment::Missing(placeholder.name),
        });
        last = placeholder.range.end;
    }

    if last < template.len() {
        segments.push(Segment::Literal(&template[last..]));
    }

    segments
}

/// 所有片段可拼接时拼接为字符串
fn join<V: Variable>(segments: &[Segment<'_, V>]) -> Option<String> {
    segments.iter().map(Segment::text).collect()
}

#[test]
#[cfg(test)]
fn test_split_accounts_for_template() {
    let template = "a{{x}}{{y}}b{{x}}";
    let placeholders = crate::pattern::Pattern::default().placeholders(template);
    let variables = crate::variables! { "x" => "1", "y" => "2" };

    let segments = split(template, &placeholders, &variables);
    assert_eq!(
        segments,
        vec![
            Segment::Literal("a"),
            Segment::Value(&"1"),
            Segment::Value(&"2"),
            Segment::Literal("b"),
            Segment::Value(&"1"),
        ]
    );

    // 原文片段与占位符文本依序还原模板
    let mut rebuilt = String::new();
    let mut matched = placeholders.iter();
    for segment in &segments {
        match segment {
            Segment::Literal(s) => rebuilt.push_str(s),
            _ => rebuilt.push_str(matched.next().unwrap().text),
        }
    }
    assert_eq!(rebuilt, template);
}

#[test]
#[cfg(test)]
fn test_split_missing() {
    let template = "{{gone}} tail";
    let placeholders = crate::pattern::Pattern::default().placeholders(template);
    let variables = crate::variables! {};

    let segments = split(template, &placeholders, &variables);
    assert_eq!(segments, vec![Segment::Missing("gone"), Segment::Literal(" tail")]);
    assert_eq!(join(&segments), None);
}
