//! 测试字符串插值

use std::borrow::Cow;
use std::collections::HashMap;

use pretty_assertions::assert_eq;
use serde_json::{Map, Value, json};
use string_interpolation::*;

fn object(value: &Value) -> &Map<String, Value> {
    value.as_object().unwrap()
}

fn raw() -> Options {
    OptionsBuilder::default().raw(true).build().unwrap()
}

fn unchecked() -> Options {
    OptionsBuilder::default().sanity(false).build().unwrap()
}

fn test_compare<M>(template: &str, expect: &str, variables: &M, options: &Options)
where
    M: Variables + ?Sized,
    M::Value: std::fmt::Debug,
{
    let result = interpolate_with(template, variables, options).unwrap();
    assert_eq!(result.as_text(), Some(expect), "{result:?}");
}

fn error_kind<M>(template: &str, variables: &M) -> ErrorKind
where
    M: Variables + ?Sized,
    M::Value: std::fmt::Debug,
{
    interpolate(template, variables).unwrap_err().kind()
}

/// 可渲染的节点, 函数值不可拼接
#[derive(Debug)]
enum Node {
    Text(&'static str),
    Render(fn() -> String),
}

impl Variable for Node {
    fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(t) => Some(Cow::Borrowed(t)),
            Self::Render(_) => None,
        }
    }
}

//////////////// test ////////////////

#[test]
fn test_non_replace() {
    let variables = variables! { "unused" => "x" };
    let all_options = [
        Options::default(),
        raw(),
        unchecked(),
        OptionsBuilder::default()
            .sanity(false)
            .raw(true)
            .build()
            .unwrap(),
    ];

    for options in &all_options {
        for template in ["common template", "{{}}", "{ {x} }", "{{{{", "}}world{{"] {
            let result = interpolate_with(template, &variables, options).unwrap();
            assert!(matches!(result, Interpolation::Text(Cow::Borrowed(t)) if t == template));
        }
    }
}

#[test]
fn test_common_replace() {
    let options = Options::default();

    test_compare(
        "Hello {{world}}",
        "Hello world",
        &variables! { "world" => "world" },
        &options,
    );

    test_compare(
        "Hello {{world}} and {{anotherVariable}}",
        "Hello world with variable and another variable",
        &variables! {
            "world" => "world with variable",
            "anotherVariable" => "another variable",
        },
        &options,
    );

    test_compare(
        "hello {{one}} {{two}}",
        "hello one 2",
        object(&json!({ "one": "one", "two": 2 })),
        &options,
    );

    test_compare(
        "You have {{n}} messages",
        "You have 3 messages",
        &variables! { "n" => 3 },
        &options,
    );

    test_compare(
        "héllo {{wörld}}!",
        "héllo 世界!",
        &variables! { "wörld" => "世界" },
        &options,
    );
}

#[test]
fn test_plain_text_not_replaced() {
    test_compare(
        "foo{{foo}}",
        "foobar",
        &variables! { "foo" => "bar" },
        &Options::default(),
    );

    test_compare(
        "world {{world}} world",
        "world earth world",
        &variables! { "world" => "earth" },
        &Options::default(),
    );
}

#[test]
fn test_falsy_values() {
    test_compare(
        "Zero: {{v0}}, Empty: '{{v1}}'",
        "Zero: 0, Empty: ''",
        object(&json!({ "v0": 0, "v1": "" })),
        &Options::default(),
    );
}

#[test]
fn test_numeric_keys() {
    test_compare(
        "{{0}} and {{1}}",
        "zero and 1",
        object(&json!({ "0": "zero", "1": 1 })),
        &Options::default(),
    );

    test_compare(
        "{{0}} {{1}}",
        "Anon Tokyo",
        &vec!["Anon", "Tokyo"],
        &Options::default(),
    );

    test_compare("{{1}} < {{0}}", "2.5 < 10", &[10.0, 2.5], &Options::default());
}

#[test]
fn test_custom_pattern() {
    let options = OptionsBuilder::default()
        .pattern(Pattern::new(r"%\{([^}]+)\}").unwrap())
        .build()
        .unwrap();

    test_compare("Hi %{name}", "Hi John", &variables! { "name" => "John" }, &options);

    // 默认语法在自定义模式下只是原文
    test_compare(
        "{{name}} %{name}",
        "{{name}} John",
        &variables! { "name" => "John" },
        &options,
    );
}

#[test]
fn test_raw_output() {
    let variables = variables! { "world" => "w" };
    let result = interpolate_with("Hello {{world}}", &variables, &raw()).unwrap();

    assert_eq!(
        result,
        Interpolation::Segments(vec![Segment::Literal("Hello "), Segment::Value(&"w")])
    );
    assert_eq!(result.try_join().as_deref(), Some("Hello w"));
}

#[test]
fn test_raw_keeps_value_types() {
    let json = json!({ "a": "A", "b": 2 });
    let variables = object(&json);

    let result = interpolate_with("a {{a}} b {{b}}", variables, &raw()).unwrap();
    assert_eq!(
        result.segments().unwrap(),
        &[
            Segment::Literal("a "),
            Segment::Value(&json!("A")),
            Segment::Literal(" b "),
            Segment::Value(&json!(2)),
        ]
    );

    let joined = interpolate("a {{a}} b {{b}}", variables).unwrap();
    assert_eq!(result.try_join(), joined.try_join());
    assert_eq!(joined.as_text(), Some("a A b 2"));
}

#[test]
fn test_function_value() {
    let variables = HashMap::from([
        ("world", Node::Text("world with variable")),
        ("anotherVariable", Node::Render(|| "another variable".to_string())),
    ]);

    let result = interpolate("Hello {{world}} and {{anotherVariable}}", &variables).unwrap();
    assert!(!result.is_text());
    assert_eq!(result.try_join(), None);

    let segments = result.into_segments().unwrap();
    assert_eq!(segments.len(), 4);
    assert!(matches!(segments[0], Segment::Literal("Hello ")));
    assert!(matches!(
        segments[1].value(),
        Some(Node::Text("world with variable"))
    ));
    assert!(matches!(segments[2], Segment::Literal(" and ")));
    match segments[3].value() {
        Some(Node::Render(render)) => assert_eq!(render(), "another variable"),
        other => panic!("unexpected segment value: {other:?}"),
    }
}

#[test]
fn test_object_value() {
    let json = json!({
        "one": "one",
        "two": 2,
        "three": { "type": "span", "props": { "className": "bold", "children": "one" } },
    });

    let result = interpolate("hello {{one}} {{two}} {{three}}", object(&json)).unwrap();
    let segments = result.segments().unwrap();
    assert_eq!(segments.len(), 6);
    assert_eq!(segments[5], Segment::Value(&json["three"]));
    assert!(segments[0].is_literal());

    let json = json!({ "flag": false });
    let result = interpolate("flag: {{flag}}", object(&json)).unwrap();
    assert_eq!(
        result,
        Interpolation::Segments(vec![
            Segment::Literal("flag: "),
            Segment::Value(&json!(false)),
        ])
    );
}

#[test]
fn test_errors() {
    assert_eq!(
        error_kind("", &variables! { "world" => "world" }),
        ErrorKind::EmptyInput
    );

    assert_eq!(
        error_kind(
            "Hello {{world}}",
            &variables! {
                "world" => "world with variable",
                "extraVariable" => "this is unnecessary",
            }
        ),
        ErrorKind::CountMismatch
    );

    let err = interpolate("Hello {{world}}", &variables! { "wrongVariable" => "world" })
        .unwrap_err();
    assert!(matches!(&err, Error::VariableNotFound(name) if name == "world"));
    assert_eq!(err.to_string(), "Variable 'world' not found");
}

#[test]
fn test_repeated_placeholder() {
    let err = interpolate("{{a}} and {{a}}", &variables! { "a" => "x" }).unwrap_err();
    assert!(matches!(
        err,
        Error::CountMismatch {
            found: 2,
            expected: 1
        }
    ));

    // 关闭校验时重名占位符取同一个值
    test_compare(
        "{{a}} and {{a}}",
        "x and x",
        &variables! { "a" => "x" },
        &unchecked(),
    );
}

#[test]
fn test_sanity_disabled() {
    let options = unchecked();

    let variables = variables! { "world" => "w", "extra" => "x" };
    test_compare("Hello {{world}}", "Hello w", &variables, &options);

    let result = interpolate_with("", &variables, &options).unwrap();
    assert_eq!(result.as_text(), Some(""));

    let variables = variables! { "wrong" => "w" };
    let result = interpolate_with("Hello {{world}}!", &variables, &options).unwrap();
    assert_eq!(
        result,
        Interpolation::Segments(vec![
            Segment::Literal("Hello "),
            Segment::Missing("world"),
            Segment::Literal("!"),
        ])
    );
    assert_eq!(result.try_join(), None);
}

#[test]
fn test_interpolator_reuse() {
    let options = Options::from_json(r#"{ "pattern": "\\$\\{(\\w+)\\}", "raw": true }"#).unwrap();
    let interpolator = Interpolator::new(options);
    assert!(interpolator.options().raw);

    let variables = variables! { "first" => "Anon", "second" => "Tokyo" };
    let result = interpolator
        .interpolate("${first} ${second}", &variables)
        .unwrap();
    assert_eq!(
        result.segments().unwrap(),
        &[
            Segment::Value(&"Anon"),
            Segment::Literal(" "),
            Segment::Value(&"Tokyo"),
        ]
    );

    let variables = variables! { "first" => "Soyo" };
    let result = interpolator.interpolate("${first}", &variables).unwrap();
    assert_eq!(result.try_join().as_deref(), Some("Soyo"));

    let result = Interpolator::default()
        .interpolate("{{first}}!", &variables)
        .unwrap();
    assert_eq!(result.into_text().as_deref(), Some("Soyo!"));
}
