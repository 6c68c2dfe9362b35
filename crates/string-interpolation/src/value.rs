//! 变量值
//!
//! 插值结果能否拼接为字符串由变量值的运行时类型决定:
//! 只有字符串和数字可以拼接, 其余值 (函数, 对象, 布尔等) 原样保留在片段中.

use std::{borrow::Cow, rc::Rc, sync::Arc};

/// 可参与插值的变量值
pub trait Variable {
    /// 值为字符串或数字时, 返回其文本形式; 否则返回 None
    fn text(&self) -> Option<Cow<'_, str>>;

    fn is_joinable(&self) -> bool {
        self.text().is_some()
    }
}

impl Variable for str {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Variable for String {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Variable for Cow<'_, str> {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Variable for char {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }
}

impl Variable for bool {
    fn text(&self) -> Option<Cow<'_, str>> {
        None
    }
}

macro_rules! impl_variable_for_integer {
    ($($t:ty)*) => {
        $(
            impl Variable for $t {
                fn text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

impl_variable_for_integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

/// 浮点数按 JavaScript Number#toString 的常见行为输出
///
/// 整数值不带小数部分, -0 输出为 0, 非有限值输出 NaN / Infinity / -Infinity.
macro_rules! impl_variable_for_float {
    ($($t:ty)*) => {
        $(
            impl Variable for $t {
                fn text(&self) -> Option<Cow<'_, str>> {
                    let text = if self.is_nan() {
                        Cow::Borrowed("NaN")
                    } else if self.is_infinite() {
                        Cow::Borrowed(if self.is_sign_positive() { "Infinity" } else { "-Infinity" })
                    } else if *self == 0.0 {
                        Cow::Borrowed("0")
                    } else {
                        Cow::Owned(self.to_string())
                    };
                    Some(text)
                }
            }
        )*
    };
}

impl_variable_for_float!(f32 f64);

impl<T: Variable> Variable for Option<T> {
    fn text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(Variable::text)
    }
}

macro_rules! impl_variable_for_pointer {
    ($($p:ident)*) => {
        $(
            impl<T: Variable + ?Sized> Variable for $p<T> {
                fn text(&self) -> Option<Cow<'_, str>> {
                    (**self).text()
                }
            }
        )*
    };
}

impl_variable_for_pointer!(Box Rc Arc);

impl<T: Variable + ?Sized> Variable for &T {
    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }
}

impl Variable for serde_json::Value {
    fn text(&self) -> Option<Cow<'_, str>> {
        use serde_json::Value;

        match self {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Number(n) if n.is_f64() => n
                .as_f64()
                .and_then(|f| f.text().map(|t| Cow::Owned(t.into_owned()))),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

#[test]
#[cfg(test)]
fn test_joinable_primitives() {
    assert_eq!("text".text().as_deref(), Some("text"));
    assert_eq!(String::new().text().as_deref(), Some(""));
    assert_eq!('x'.text().as_deref(), Some("x"));
    assert_eq!(0u8.text().as_deref(), Some("0"));
    assert_eq!((-42i64).text().as_deref(), Some("-42"));

    assert!(!true.is_joinable());
    assert!(!None::<&str>.is_joinable());
    assert_eq!(Some("v").text().as_deref(), Some("v"));
    assert_eq!(Arc::new(7u32).text().as_deref(), Some("7"));
}

#[test]
#[cfg(test)]
fn test_float_text() {
    assert_eq!(1.0f64.text().as_deref(), Some("1"));
    assert_eq!(0.5f64.text().as_deref(), Some("0.5"));
    assert_eq!((-0.0f64).text().as_deref(), Some("0"));
    assert_eq!(f64::NAN.text().as_deref(), Some("NaN"));
    assert_eq!(f64::INFINITY.text().as_deref(), Some("Infinity"));
    assert_eq!(f32::NEG_INFINITY.text().as_deref(), Some("-Infinity"));
    assert_eq!(2.5f32.text().as_deref(), Some("2.5"));
}

#[test]
#[cfg(test)]
fn test_json_value_text() {
    use serde_json::json;

    assert_eq!(json!("s").text().as_deref(), Some("s"));
    assert_eq!(json!(3).text().as_deref(), Some("3"));
    assert_eq!(json!(u64::MAX).text().as_deref(), Some("18446744073709551615"));
    assert_eq!(json!(1.0).text().as_deref(), Some("1"));
    assert_eq!(json!(0.25).text().as_deref(), Some("0.25"));

    assert!(!json!(null).is_joinable());
    assert!(!json!(false).is_joinable());
    assert!(!json!([1, 2]).is_joinable());
    assert!(!json!({ "id": 1 }).is_joinable());
}
