/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use serde_json::Value;

use crate::ColorState;

/// Every kind of value that the render pipeline knows how to print. Use [LogArg::from]
/// (or the [crate::log!] family of macros, which do it for you) to turn plain Rust
/// values into log arguments.
///
/// | Rust value                   | variant                  |
/// |------------------------------|--------------------------|
/// | `&str`, `String`             | [LogArg::Text]           |
/// | `bool`                       | [LogArg::Bool]           |
/// | integers up to 64 bits, floats | [LogArg::Number]       |
/// | `i128`                       | [LogArg::BigInt]         |
/// | `None`                       | [LogArg::Null]           |
/// | `()`                         | [LogArg::Undefined]      |
/// | [serde_json::Value]          | [LogArg::Structured]     |
/// | [ColorState]                 | [LogArg::Color]          |
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    /// A parsed (or hand built) color directive.
    Color(ColorState),
    /// Printed verbatim. Short strings that start w/ `!` are color directives.
    Text(String),
    /// A value that is absent.
    Undefined,
    /// A value that is explicitly empty.
    Null,
    /// A unique token, holding its description.
    Symbol(String),
    Bool(bool),
    Number(f64),
    /// Printed w/ a trailing `n`.
    BigInt(i128),
    /// Handed to the [crate::Inspect] pretty printer.
    Structured(Value),
    /// Handed to the [crate::Inspect] pretty printer, holding the callable's name.
    Callable(String),
    /// A value that has no printable representation. Rendering it reports a diagnostic
    /// and moves on to the next argument.
    Unsupported { type_name: &'static str },
}

mod log_arg_impl {
    use super::*;

    impl LogArg {
        pub fn symbol(description: impl Into<String>) -> Self {
            LogArg::Symbol(description.into())
        }

        pub fn callable(name: impl Into<String>) -> Self { LogArg::Callable(name.into()) }

        pub fn big_int(value: impl Into<i128>) -> Self { LogArg::BigInt(value.into()) }

        pub fn unsupported<T: ?Sized>() -> Self {
            LogArg::Unsupported {
                type_name: std::any::type_name::<T>(),
            }
        }

        /// The name of the variant, used in diagnostics.
        pub fn type_name(&self) -> &'static str {
            match self {
                LogArg::Color(_) => "color",
                LogArg::Text(_) => "string",
                LogArg::Undefined => "undefined",
                LogArg::Null => "null",
                LogArg::Symbol(_) => "symbol",
                LogArg::Bool(_) => "boolean",
                LogArg::Number(_) => "number",
                LogArg::BigInt(_) => "bigint",
                LogArg::Structured(_) => "object",
                LogArg::Callable(_) => "function",
                LogArg::Unsupported { type_name } => type_name,
            }
        }
    }
}

mod convert_into_log_arg {
    use super::*;

    impl From<&str> for LogArg {
        fn from(value: &str) -> Self { LogArg::Text(value.to_string()) }
    }

    impl From<String> for LogArg {
        fn from(value: String) -> Self { LogArg::Text(value) }
    }

    impl From<&String> for LogArg {
        fn from(value: &String) -> Self { LogArg::Text(value.clone()) }
    }

    impl From<bool> for LogArg {
        fn from(value: bool) -> Self { LogArg::Bool(value) }
    }

    impl From<i128> for LogArg {
        fn from(value: i128) -> Self { LogArg::BigInt(value) }
    }

    impl From<Value> for LogArg {
        fn from(value: Value) -> Self { LogArg::Structured(value) }
    }

    impl From<ColorState> for LogArg {
        fn from(value: ColorState) -> Self { LogArg::Color(value) }
    }

    impl From<()> for LogArg {
        fn from((): ()) -> Self { LogArg::Undefined }
    }

    impl<T: Into<LogArg>> From<Option<T>> for LogArg {
        fn from(value: Option<T>) -> Self {
            match value {
                Some(it) => it.into(),
                None => LogArg::Null,
            }
        }
    }

    macro_rules! impl_from_number {
        ($($ty:ty),*) => {
            $(
                impl From<$ty> for LogArg {
                    #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                    fn from(value: $ty) -> Self { LogArg::Number(value as f64) }
                }
            )*
        };
    }

    impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
}

/// Number text, following the number to string conversion of JavaScript, except that
/// negative zero prints as `-0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.into();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        // Rust prints `1e21` and `1.5e-7`, JavaScript wants `1e+21` and `1.5e-7`.
        let it = format!("{value:e}");
        return match it.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => it,
        };
    }

    format!("{value}")
}

/// Big integer text, w/ the `n` suffix.
pub fn format_big_int(value: i128) -> String { format!("{value}n") }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    use super::*;

    #[test_case(0.0, "0")]
    #[test_case(-0.0, "-0")]
    #[test_case(42.0, "42")]
    #[test_case(-7.0, "-7")]
    #[test_case(1.5, "1.5")]
    #[test_case(0.1 + 0.2, "0.30000000000000004")]
    #[test_case(f64::NAN, "NaN")]
    #[test_case(f64::INFINITY, "Infinity")]
    #[test_case(f64::NEG_INFINITY, "-Infinity")]
    #[test_case(1e21, "1e+21")]
    #[test_case(-2.5e22, "-2.5e+22")]
    #[test_case(1.5e-7, "1.5e-7")]
    #[test_case(0.000_001, "0.000001")]
    #[test_case(123_456_789_012_345_680_000.0, "123456789012345680000")]
    fn number_text(value: f64, expected: &str) {
        assert_eq!(format_number(value), expected);
    }

    #[test]
    fn big_int_text() {
        assert_eq!(format_big_int(i128::MAX), "170141183460469231731687303715884105727n");
        assert_eq!(format_big_int(-5), "-5n");
    }

    #[test]
    fn conversions() {
        assert_eq!(LogArg::from("hi"), LogArg::Text("hi".into()));
        assert_eq!(LogArg::from(true), LogArg::Bool(true));
        assert_eq!(LogArg::from(3_u8), LogArg::Number(3.0));
        assert_eq!(LogArg::from(-0.0_f64), LogArg::Number(-0.0));
        assert_eq!(LogArg::from(9_i128), LogArg::BigInt(9));
        assert_eq!(LogArg::from(None::<i32>), LogArg::Null);
        assert_eq!(LogArg::from(Some("x")), LogArg::Text("x".into()));
        assert_eq!(LogArg::from(()), LogArg::Undefined);
        assert_eq!(LogArg::from(json!({"a": 1})), LogArg::Structured(json!({"a": 1})));
        assert_eq!(LogArg::big_int(7_u64), LogArg::BigInt(7));
    }

    #[test]
    fn type_names() {
        assert_eq!(LogArg::symbol("id").type_name(), "symbol");
        assert_eq!(LogArg::callable("main").type_name(), "function");
        assert_eq!(
            LogArg::unsupported::<std::fs::File>().type_name(),
            "std::fs::File"
        );
    }
}
