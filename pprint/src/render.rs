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

//! The render pipeline is a fold over the parsed arguments. [step] takes the current
//! [Cursor] and one argument, and returns the next cursor along w/ the text to print.
//! It has no side effects, so the open / close / reopen transitions can be tested w/out
//! any output device. [render] drives the fold and writes each step to the sinks as soon
//! as it is produced.
//!
//! ```text
//! "!R"   → (no active)         print "\x1b[91m"          → active = R, skip sep
//! "fail" → (active = R)        print "\x1b[91m" "fail"   → active = R
//! "!"    → (active = R)        print RESET RESET         → active = none, skip sep
//! "ok"   → (no active)         print "ok"
//! end                          print RESET "\n"
//! ```

use std::io::Write;

use crate::{ColorState, Inspect, InspectOptions, Inspectable, LogArg, Palette, PprintError,
            RESET, SinkKind, format_big_int, format_number};

/// Transient state for one render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// The color that was opened by the last directive, and not yet closed.
    pub active: Option<ColorState>,
    /// Don't print a space before the next argument.
    pub skip_separator: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            active: None,
            skip_separator: true,
        }
    }
}

/// Everything [step] needs besides the cursor and the argument.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub palette: &'a Palette,
    pub inspector: &'a dyn Inspect,
    pub depth: usize,
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// The result of folding one argument into the cursor.
#[derive(Debug)]
pub struct Step {
    pub cursor: Cursor,
    pub output: String,
    pub diagnostic: Option<PprintError>,
}

/// Fold one (already parsed) argument into the cursor.
pub fn step(cursor: Cursor, arg: &LogArg, context: RenderContext<'_>) -> Step {
    let Cursor {
        mut active,
        mut skip_separator,
    } = cursor;
    let mut output = String::new();
    let mut diagnostic = None;

    let is_color = matches!(arg, LogArg::Color(_));

    // A new directive closes the color that is currently open.
    if is_color {
        if active.is_some() {
            output.push_str(RESET);
        }
        skip_separator = true;
    }

    if !skip_separator {
        output.push(' ');
    }
    skip_separator = false;

    if !is_color && let Some(color_state) = &active {
        output.push_str(&color_state.build());
    }

    match arg {
        LogArg::Color(color_state) => {
            output.push_str(&color_state.build());
            active = if color_state.is_end() {
                None
            } else {
                Some(color_state.clone())
            };
            skip_separator = true;
        }
        LogArg::Text(text) => output.push_str(text),
        LogArg::Null => push_primitive(&mut output, active.as_ref(), context, "bold", "null"),
        LogArg::Undefined => {
            push_primitive(&mut output, active.as_ref(), context, "dark", "undefined");
        }
        LogArg::Symbol(description) => {
            let text = format!("Symbol({description})");
            push_primitive(&mut output, active.as_ref(), context, "green", &text);
        }
        LogArg::Bool(value) => {
            let text = if *value { "true" } else { "false" };
            push_primitive(&mut output, active.as_ref(), context, "yellow", text);
        }
        LogArg::Number(value) => {
            let text = format_number(*value);
            push_primitive(&mut output, active.as_ref(), context, "yellow", &text);
        }
        LogArg::BigInt(value) => {
            let text = format_big_int(*value);
            push_primitive(&mut output, active.as_ref(), context, "yellow", &text);
        }
        LogArg::Structured(value) => {
            let options = inspect_options(active.as_ref(), context);
            output.push_str(&context.inspector.inspect(Inspectable::Structured(value), options));
        }
        LogArg::Callable(name) => {
            let options = inspect_options(active.as_ref(), context);
            output.push_str(&context.inspector.inspect(Inspectable::Callable(name), options));
        }
        LogArg::Unsupported { type_name } => {
            diagnostic = Some(PprintError::UnsupportedArgType {
                type_name: (*type_name).to_string(),
            });
        }
    }

    Step {
        cursor: Cursor {
            active,
            skip_separator,
        },
        output,
        diagnostic,
    }
}

/// The active color if there is one, otherwise the named escape from the palette. Then
/// the text, then a full reset.
fn push_primitive(
    output: &mut String,
    active: Option<&ColorState>,
    context: RenderContext<'_>,
    fallback_escape: &str,
    text: &str,
) {
    match active {
        Some(color_state) => output.push_str(&color_state.build()),
        None => output.push_str(context.palette.escape(fallback_escape).unwrap_or_default()),
    }
    output.push_str(text);
    output.push_str(RESET);
}

/// Let the inspector colorize only when there is no explicit color open.
fn inspect_options(active: Option<&ColorState>, context: RenderContext<'_>) -> InspectOptions {
    InspectOptions {
        depth: context.depth,
        colors: active.is_none(),
    }
}

/// What every render call ends w/, regardless of its arguments.
pub const RENDER_SUFFIX: &str = "\x1b[0m\n";

/// Fold the (already parsed) arguments, writing each step to `out` in order. Diagnostics
/// go to `diagnostics` and to [tracing], and never stop the remaining arguments from
/// rendering. The call always ends w/ [RENDER_SUFFIX].
pub fn render(
    args: &[LogArg],
    context: RenderContext<'_>,
    out: &mut impl Write,
    diagnostics: &mut impl Write,
) -> miette::Result<()> {
    fold_into(args, context, out, |error| {
        write_to(&mut *diagnostics, SinkKind::Diagnostics, &format!("{error}\n"))
    })?;
    Ok(())
}

/// Same as [render], but into a [String]. Diagnostics are returned instead of written.
pub fn render_to_string(args: &[LogArg], context: RenderContext<'_>) -> (String, Vec<PprintError>) {
    let mut out = Vec::<u8>::new();
    let mut diagnostics = vec![];

    let result = fold_into(args, context, &mut out, |error| {
        diagnostics.push(error);
        Ok(())
    });
    if let Err(error) = result {
        diagnostics.push(error);
    }

    (String::from_utf8_lossy(&out).into_owned(), diagnostics)
}

/// Drive [step] over `args`, writing each step's output to `out` as soon as it is
/// produced, and handing every diagnostic to `on_diagnostic`.
fn fold_into(
    args: &[LogArg],
    context: RenderContext<'_>,
    out: &mut impl Write,
    mut on_diagnostic: impl FnMut(PprintError) -> Result<(), PprintError>,
) -> Result<(), PprintError> {
    let mut cursor = Cursor::default();

    for arg in args {
        let Step {
            cursor: next,
            output,
            diagnostic,
        } = step(cursor, arg, context);
        cursor = next;

        write_to(out, SinkKind::Output, &output)?;

        if let Some(error) = diagnostic {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Unsupported log argument",
                error = %error,
            );
            on_diagnostic(error)?;
        }
    }

    write_to(out, SinkKind::Output, RENDER_SUFFIX)?;
    out.flush().map_err(|source| PprintError::Write {
        sink: SinkKind::Output,
        source,
    })
}

fn write_to(sink: &mut impl Write, sink_kind: SinkKind, text: &str) -> Result<(), PprintError> {
    if text.is_empty() {
        return Ok(());
    }
    sink.write_all(text.as_bytes())
        .map_err(|source| PprintError::Write {
            sink: sink_kind,
            source,
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{NodeStyleInspector, PaletteKind, parse};

    const R: &str = "\x1b[91m";
    const E: &str = "\x1b[0m";

    fn red() -> ColorState {
        let mut it = ColorState::new();
        it.set(PaletteKind::Foreground, 91);
        it
    }

    fn with_context<T>(depth: usize, f: impl FnOnce(RenderContext<'_>) -> T) -> T {
        let inspector = NodeStyleInspector::default();
        f(RenderContext {
            palette: Palette::global(),
            inspector: &inspector,
            depth,
        })
    }

    fn render_args(args: Vec<LogArg>) -> (String, Vec<PprintError>) {
        with_context(8, |context| {
            let parsed = parse(args, context.palette);
            render_to_string(&parsed, context)
        })
    }

    #[test]
    fn step_opens_color_w_o_reset_when_nothing_is_active() {
        with_context(8, |context| {
            let it = step(Cursor::default(), &LogArg::Color(red()), context);
            assert_eq!(it.output, R);
            assert_eq!(it.cursor.active, Some(red()));
            assert!(it.cursor.skip_separator);
        });
    }

    #[test]
    fn step_closes_active_color_before_a_new_directive() {
        with_context(8, |context| {
            let cursor = Cursor {
                active: Some(red()),
                skip_separator: false,
            };
            let it = step(cursor, &LogArg::Color(ColorState::new_end("")), context);
            assert_eq!(it.output, format!("{E}{E}"));
            assert_eq!(it.cursor, Cursor::default());
        });
    }

    #[test]
    fn step_reopens_active_color_before_each_value() {
        with_context(8, |context| {
            let cursor = Cursor {
                active: Some(red()),
                skip_separator: false,
            };
            let it = step(cursor, &LogArg::from("x"), context);
            assert_eq!(it.output, format!(" {R}x"));
            assert_eq!(it.cursor.active, Some(red()));
            assert!(!it.cursor.skip_separator);
        });
    }

    #[test]
    fn red_then_reset() {
        let (it, _) = render_args(vec!["!R".into(), "fail".into(), "!".into(), "ok".into()]);
        assert_eq!(it, format!("{R}{R}fail{E}{E}ok{E}\n"));
        // Nothing red after the reset.
        let after_reset = it.split("fail").nth(1).unwrap();
        assert!(!after_reset.contains(R));
    }

    #[test]
    fn no_args_is_reset_and_newline() {
        let (it, diagnostics) = render_args(vec![]);
        assert_eq!(it, "\x1b[0m\n");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn values_are_separated_by_spaces() {
        let (it, _) = render_args(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(it, format!("a b c{E}\n"));
    }

    #[test]
    fn directive_swallows_separators_on_both_sides() {
        let (it, _) = render_args(vec!["a".into(), "!G".into(), "b".into()]);
        assert_eq!(it, format!("a\x1b[92m\x1b[92mb{E}\n"));
    }

    #[test]
    fn padded_reset_separator() {
        let (it, _) = render_args(vec!["!R".into(), "a".into(), "!  ".into(), "b".into()]);
        assert_eq!(it, format!("{R}{R}a{E}{E}  b{E}\n"));
    }

    #[test]
    fn negative_zero() {
        let (it, _) = render_args(vec![LogArg::from(-0.0)]);
        assert_eq!(it, format!("\x1b[33m-0{E}{E}\n"));
        let (it, _) = render_args(vec![LogArg::from(0.0)]);
        assert_eq!(it, format!("\x1b[33m0{E}{E}\n"));
    }

    #[test]
    fn primitive_fallback_colors() {
        let (it, _) = render_args(vec![
            LogArg::Null,
            LogArg::Undefined,
            LogArg::symbol("id"),
            true.into(),
            LogArg::big_int(12),
        ]);
        assert_eq!(
            it,
            format!(
                "\x1b[1mnull{E} \x1b[30mundefined{E} \x1b[32mSymbol(id){E} \x1b[33mtrue{E} \x1b[33m12n{E}{E}\n"
            )
        );
    }

    #[test]
    fn primitives_take_the_active_color() {
        let (it, _) = render_args(vec!["!R".into(), LogArg::Null, LogArg::from(1)]);
        assert_eq!(it, format!("{R}{R}{R}null{E} {R}{R}1{E}{E}\n"));
    }

    #[test]
    fn structured_is_colorized_only_w_o_active_color() {
        let (it, _) = render_args(vec![json!({"a": 1}).into()]);
        assert_eq!(it, format!("{{ a: \x1b[33m1{E} }}{E}\n"));

        let (it, _) = render_args(vec!["!R".into(), json!({"a": 1}).into()]);
        assert_eq!(it, format!("{R}{R}{{ a: 1 }}{E}\n"));
    }

    #[test]
    fn callable() {
        let (it, _) = render_args(vec!["!R".into(), LogArg::callable("main")]);
        assert_eq!(it, format!("{R}{R}[Function: main]{E}\n"));
    }

    #[test]
    fn literal_lookalike_is_printed() {
        let (it, _) = render_args(vec!["!zz".into(), "x".into()]);
        assert_eq!(it, format!("!zz x{E}\n"));
    }

    #[test]
    fn unsupported_reports_and_continues() {
        let (it, diagnostics) = render_args(vec![
            "a".into(),
            LogArg::unsupported::<std::fs::File>(),
            "b".into(),
        ]);
        assert_eq!(it, format!("a  b{E}\n"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].to_string(),
            "[r3bl_pprint] unknown type std::fs::File"
        );
    }

    #[test]
    fn render_writes_to_sinks() {
        let mut out = Vec::<u8>::new();
        let mut diagnostics = Vec::<u8>::new();
        with_context(8, |context| {
            let args = parse(
                vec!["!Y".into(), "warn".into(), LogArg::unsupported::<u8>()],
                context.palette,
            );
            render(&args, context, &mut out, &mut diagnostics).unwrap();
        });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[93m\x1b[93mwarn \x1b[93m\x1b[0m\n"
        );
        assert_eq!(
            String::from_utf8(diagnostics).unwrap(),
            "[r3bl_pprint] unknown type u8\n"
        );
    }

    #[test]
    fn render_to_string_matches_render() {
        let args: Vec<LogArg> = vec![
            "!bWr".into(),
            "ALERT".into(),
            "!  ".into(),
            json!({"disk": [97.5, null]}).into(),
            LogArg::unsupported::<u8>(),
            LogArg::from(-0.0),
        ];
        with_context(8, |context| {
            let parsed = parse(args, context.palette);

            let mut out = Vec::<u8>::new();
            let mut diagnostics = Vec::<u8>::new();
            render(&parsed, context, &mut out, &mut diagnostics).unwrap();

            let (it, errors) = render_to_string(&parsed, context);
            assert_eq!(it, String::from_utf8(out).unwrap());
            let errors = errors
                .iter()
                .map(|error| format!("{error}\n"))
                .collect::<String>();
            assert_eq!(errors, String::from_utf8(diagnostics).unwrap());
        });
    }

    #[test]
    fn render_reports_write_failures() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("broken pipe"))
            }
            fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
        }

        let result = with_context(8, |context| {
            render(&[LogArg::from("x")], context, &mut Broken, &mut Vec::<u8>::new())
        });
        let report = result.unwrap_err();
        assert_eq!(report.to_string(), "[r3bl_pprint] could not write to the output sink");
    }
}
