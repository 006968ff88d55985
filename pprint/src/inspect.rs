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

//! Pretty printing for the values that aren't primitives: [LogArg::Structured] and
//! [LogArg::Callable]. The render pipeline only knows the [Inspect] trait, so a
//! [crate::Printer] can be handed any implementation. [NodeStyleInspector] is the
//! default.
//!
//! [LogArg::Structured]: crate::LogArg::Structured
//! [LogArg::Callable]: crate::LogArg::Callable

use serde_json::{Map, Value};

use crate::{Palette, RESET, format_number};

/// How deep nested objects and arrays are expanded, unless configured otherwise.
pub const DEFAULT_INSPECT_DEPTH: usize = 8;

/// Containers whose single line form is longer than this are broken over multiple lines.
pub const BREAK_LENGTH: usize = 72;

/// Arrays longer than this only show their first items.
pub const MAX_ARRAY_LENGTH: usize = 100;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectOptions {
    /// Containers nested deeper than this are elided.
    pub depth: usize,
    /// Whether the output may contain its own escape sequences. This is off when the
    /// caller has an active color, so that colors aren't doubled up.
    pub colors: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_INSPECT_DEPTH,
            colors: true,
        }
    }
}

/// What the render pipeline hands to an [Inspect] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inspectable<'a> {
    Structured(&'a Value),
    Callable(&'a str),
}

pub trait Inspect {
    fn inspect(&self, target: Inspectable<'_>, options: InspectOptions) -> String;
}

/// Prints `{ key: 'value', list: [ 1, 2 ] }` style output, w/ the colors taken from the
/// [Palette] escape namespace.
#[derive(Debug, Clone, Copy)]
pub struct NodeStyleInspector {
    pub palette: &'static Palette,
}

impl Default for NodeStyleInspector {
    fn default() -> Self {
        Self {
            palette: Palette::global(),
        }
    }
}

impl Inspect for NodeStyleInspector {
    fn inspect(&self, target: Inspectable<'_>, options: InspectOptions) -> String {
        match target {
            Inspectable::Structured(value) => self.fmt_value(value, 0, options),
            Inspectable::Callable(name) => self.fmt_callable(name, options),
        }
    }
}

mod node_style_inspector_impl {
    use super::*;

    /// Which escape from the palette paints each kind of token.
    #[derive(Debug, Clone, Copy)]
    enum Token {
        Number,
        Text,
        Null,
        Special,
    }

    impl Token {
        fn escape_name(self) -> &'static str {
            match self {
                Token::Number => "yellow",
                Token::Text => "green",
                Token::Null => "bold",
                Token::Special => "cyan",
            }
        }
    }

    impl NodeStyleInspector {
        pub(super) fn fmt_callable(&self, name: &str, options: InspectOptions) -> String {
            let text = if name.is_empty() {
                "[Function (anonymous)]".to_string()
            } else {
                format!("[Function: {name}]")
            };
            self.paint(Token::Special, &text, options)
        }

        pub(super) fn fmt_value(&self, value: &Value, level: usize, options: InspectOptions) -> String {
            match value {
                Value::Null => self.paint(Token::Null, "null", options),
                Value::Bool(it) => self.paint(Token::Number, &it.to_string(), options),
                Value::Number(number) => {
                    let text = match (number.as_i64(), number.as_u64(), number.as_f64()) {
                        (Some(it), _, _) => it.to_string(),
                        (None, Some(it), _) => it.to_string(),
                        (None, None, Some(it)) => format_number(it),
                        (None, None, None) => number.to_string(),
                    };
                    self.paint(Token::Number, &text, options)
                }
                Value::String(text) => self.paint(Token::Text, &quote(text), options),
                Value::Array(items) => self.fmt_array(items, level, options),
                Value::Object(map) => self.fmt_object(map, level, options),
            }
        }

        fn fmt_array(&self, items: &[Value], level: usize, options: InspectOptions) -> String {
            if items.is_empty() {
                return "[]".into();
            }
            if level > options.depth {
                return self.paint(Token::Special, "[Array]", options);
            }

            let mut entries = items
                .iter()
                .take(MAX_ARRAY_LENGTH)
                .map(|item| self.fmt_value(item, level + 1, options))
                .collect::<Vec<_>>();
            if items.len() > MAX_ARRAY_LENGTH {
                let more = items.len() - MAX_ARRAY_LENGTH;
                let suffix = if more == 1 { "" } else { "s" };
                entries.push(format!("... {more} more item{suffix}"));
            }

            join_entries('[', ']', &entries)
        }

        fn fmt_object(&self, map: &Map<String, Value>, level: usize, options: InspectOptions) -> String {
            if map.is_empty() {
                return "{}".into();
            }
            if level > options.depth {
                return self.paint(Token::Special, "[Object]", options);
            }

            let entries = map
                .iter()
                .map(|(key, value)| {
                    format!("{}: {}", fmt_key(key), self.fmt_value(value, level + 1, options))
                })
                .collect::<Vec<_>>();

            join_entries('{', '}', &entries)
        }

        fn paint(&self, token: Token, text: &str, options: InspectOptions) -> String {
            if !options.colors {
                return text.to_string();
            }
            let escape = self.palette.escape(token.escape_name()).unwrap_or_default();
            format!("{escape}{text}{RESET}")
        }
    }

    /// `{ a: 1 }` on one line if it fits in [BREAK_LENGTH], otherwise one entry per line,
    /// indented.
    fn join_entries(open: char, close: char, entries: &[String]) -> String {
        let single_line_len = entries.iter().map(String::as_str).map(visible_len).sum::<usize>()
            + entries.len().saturating_sub(1) * 2
            + 4;
        let fits = single_line_len <= BREAK_LENGTH && !entries.iter().any(|it| it.contains('\n'));

        if fits {
            return format!("{open} {} {close}", entries.join(", "));
        }

        let body = entries
            .iter()
            .map(String::as_str)
            .map(indent)
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{open}\n{body}\n{close}")
    }

    fn indent(entry: &str) -> String {
        entry
            .lines()
            .map(|line| format!("{INDENT}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn fmt_key(key: &str) -> String {
        if is_identifier(key) { key.to_string() } else { quote(key) }
    }

    fn is_identifier(key: &str) -> bool {
        let mut chars = key.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
                chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
            }
            _ => false,
        }
    }

    fn quote(text: &str) -> String {
        let mut acc = String::with_capacity(text.len() + 2);
        acc.push('\'');
        for ch in text.chars() {
            match ch {
                '\'' => acc.push_str("\\'"),
                '\\' => acc.push_str("\\\\"),
                '\n' => acc.push_str("\\n"),
                '\t' => acc.push_str("\\t"),
                _ => acc.push(ch),
            }
        }
        acc.push('\'');
        acc
    }

    /// Length in chars, not counting SGR escape sequences.
    pub(super) fn visible_len(text: &str) -> usize {
        let mut count = 0;
        let mut in_escape = false;
        for ch in text.chars() {
            match (in_escape, ch) {
                (false, '\x1b') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, _) => count += 1,
            }
        }
        count
    }
}
