//! 字符串插值
//!
//! 提供 [`interpolate`] / [`Interpolator`] 将模板串中的占位符替换为变量值.
//!
//! 所有变量值均为字符串或数字时, 结果为拼接后的字符串;
//! 否则 (或开启 `raw` 选项时) 为原文与变量值交错的片段序列, 变量值保持原类型.
//!
//! ```
//! use string_interpolation::{interpolate, variables};
//!
//! let vars = variables! { "n" => 3 };
//! let result = interpolate("You have {{n}} messages", &vars).unwrap();
//! assert_eq!(result.as_text(), Some("You have 3 messages"));
//! ```

mod error;
mod interpolator;
mod options;
mod pattern;
mod value;
mod variables;

pub use error::*;
pub use interpolator::{Interpolation, Interpolator, Segment, interpolate, interpolate_with};
pub use options::{Options, OptionsBuilder, OptionsBuilderError};
pub use pattern::{DEFAULT_PATTERN, Pattern, Placeholder};
pub use value::Variable;
pub use variables::Variables;
