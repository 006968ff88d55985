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

use std::{backtrace::Backtrace,
          io::{Stderr, Stdout, Write, stderr, stdout},
          iter::once,
          ops::Add};

use crate::{DEFAULT_INSPECT_DEPTH, Inspect, LogArg, NodeStyleInspector, Palette,
            RenderContext, parse, render};

pub const DEBUG_DIRECTIVE: &str = "!G";
pub const INFO_DIRECTIVE: &str = "!C";
pub const WARN_DIRECTIVE: &str = "!Y";
pub const ERROR_DIRECTIVE: &str = "!R";

/// Number of innermost frames a trace leaves out, once the `std::backtrace` frames are
/// gone: the capture helper, and the entry point ([Printer::trace] or [trace]) that
/// called it. The first frame printed is the caller of the entry point.
pub const TRACE_SKIP_FRAMES: usize = 2;

// XMARK: Clever Rust, use of `impl Into<ConfigStruct>` for elegant constructor config options.
/// [Printer::new] and [Printer::with_sinks] receive a type that implements
/// [`Into<PrinterConfig>`], so a plain depth works as well as a full config.
///
/// ```
/// use r3bl_pprint::PrinterConfig;
///
/// let config_1: PrinterConfig = 3_usize.into();
/// let config_2 = PrinterConfig::default();
///
/// assert_eq!(config_1.depth, 3);
/// assert_eq!(config_2.depth, 8);
/// assert_eq!((config_2 + config_1).depth, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// How deep the inspector expands nested structured values.
    pub depth: usize,
}

pub mod printer_config_options {
    use super::*;

    impl Default for PrinterConfig {
        fn default() -> Self {
            Self {
                depth: DEFAULT_INSPECT_DEPTH,
            }
        }
    }

    impl From<usize> for PrinterConfig {
        fn from(depth: usize) -> Self { Self { depth } }
    }

    /// Merge two [PrinterConfig] instances. The `rhs` has higher specificity, so any of
    /// its fields that differ from the default clobber the `self` value.
    impl Add<PrinterConfig> for PrinterConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            let default = Self::default();
            Self {
                depth: if rhs.depth == default.depth {
                    self.depth
                } else {
                    rhs.depth
                },
            }
        }
    }
}

/// Renders log arguments to an output sink, reporting diagnostics to a separate sink.
/// Both default to the process' standard output and standard error.
///
/// ```
/// use r3bl_pprint::{LogArg, Printer, PrinterConfig};
///
/// let mut printer = Printer::with_sinks(PrinterConfig::default(), Vec::<u8>::new(), Vec::<u8>::new());
/// printer.log(["!R".into(), "fail".into(), "!".into(), LogArg::from("ok")]);
/// let (out, _) = printer.into_sinks();
/// assert_eq!(out, b"\x1b[91m\x1b[91mfail\x1b[0m\x1b[0mok\x1b[0m\n");
/// ```
pub struct Printer<W: Write = Stdout, E: Write = Stderr> {
    out: W,
    diagnostics: E,
    config: PrinterConfig,
    palette: &'static Palette,
    inspector: Box<dyn Inspect + Send + Sync>,
}

impl<W: Write, E: Write> std::fmt::Debug for Printer<W, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Printer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Printer {
    /// Bound to the process' standard output and standard error.
    pub fn new(config: impl Into<PrinterConfig>) -> Self {
        Self::with_sinks(config, stdout(), stderr())
    }
}

impl<W: Write, E: Write> Printer<W, E> {
    pub fn with_sinks(config: impl Into<PrinterConfig>, out: W, diagnostics: E) -> Self {
        Self {
            out,
            diagnostics,
            config: config.into(),
            palette: Palette::global(),
            inspector: Box::new(NodeStyleInspector::default()),
        }
    }

    /// Swap out the pretty printer used for structured values and callables.
    #[must_use]
    pub fn with_inspector(mut self, inspector: impl Inspect + Send + Sync + 'static) -> Self {
        self.inspector = Box::new(inspector);
        self
    }

    pub fn config(&self) -> PrinterConfig { self.config }

    pub fn into_sinks(self) -> (W, E) { (self.out, self.diagnostics) }

    /// Parse the directives in `args`, then render everything, ending w/ a reset and a
    /// newline. Returns an error only if one of the sinks fails.
    pub fn try_log(&mut self, args: impl IntoIterator<Item = LogArg>) -> miette::Result<()> {
        let parsed = parse(args, self.palette);
        let context = RenderContext {
            palette: self.palette,
            inspector: self.inspector.as_ref(),
            depth: self.config.depth,
        };
        render(&parsed, context, &mut self.out, &mut self.diagnostics)
    }

    /// Same as [Self::try_log], but a failing sink is only reported to [tracing].
    pub fn log(&mut self, args: impl IntoIterator<Item = LogArg>) {
        if let Err(report) = self.try_log(args) {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "Could not write log output",
                error = ?report,
            );
        }
    }

    /// Same as [Self::log] w/ [DEBUG_DIRECTIVE] (green) in front of `args`.
    pub fn debug(&mut self, args: impl IntoIterator<Item = LogArg>) {
        self.log(prepend(DEBUG_DIRECTIVE, args));
    }

    /// Same as [Self::log] w/ [INFO_DIRECTIVE] (cyan) in front of `args`.
    pub fn info(&mut self, args: impl IntoIterator<Item = LogArg>) {
        self.log(prepend(INFO_DIRECTIVE, args));
    }

    /// Same as [Self::log] w/ [WARN_DIRECTIVE] (yellow) in front of `args`.
    pub fn warn(&mut self, args: impl IntoIterator<Item = LogArg>) {
        self.log(prepend(WARN_DIRECTIVE, args));
    }

    /// Same as [Self::log] w/ [ERROR_DIRECTIVE] (red) in front of `args`.
    pub fn error(&mut self, args: impl IntoIterator<Item = LogArg>) {
        self.log(prepend(ERROR_DIRECTIVE, args));
    }

    /// Log the current call stack in red, as one multi line argument that starts w/
    /// `Trace`. The innermost frame shown is the caller of this method.
    #[inline(never)]
    pub fn trace(&mut self) {
        let text = capture_trace();
        self.log_trace(text);
    }

    fn log_trace(&mut self, text: String) {
        self.log([LogArg::from(ERROR_DIRECTIVE), LogArg::Text(text)]);
    }
}

/// Must be called directly by the entry point, so that [TRACE_SKIP_FRAMES] holds.
#[inline(never)]
fn capture_trace() -> String {
    let backtrace = Backtrace::force_capture();
    format_trace(&backtrace.to_string(), TRACE_SKIP_FRAMES)
}

fn prepend(
    directive: &'static str,
    args: impl IntoIterator<Item = LogArg>,
) -> impl Iterator<Item = LogArg> {
    once(LogArg::from(directive)).chain(args)
}

/// Group the lines of a rendered [Backtrace] into frames (a frame starts w/ its
/// `<number>: ` line), drop the `std::backtrace` machinery and the `skip` innermost
/// frames that remain, and put `Trace` on top.
pub fn format_trace(backtrace: &str, skip: usize) -> String {
    let mut frames: Vec<Vec<&str>> = vec![];
    for line in backtrace.lines() {
        if is_frame_start(line) {
            frames.push(vec![line]);
        } else if let Some(frame) = frames.last_mut() {
            frame.push(line);
        }
    }

    let lines = frames
        .into_iter()
        .filter(|frame| !frame[0].contains("std::backtrace"))
        .skip(skip)
        .flatten();

    once("Trace").chain(lines).collect::<Vec<_>>().join("\n")
}

fn is_frame_start(line: &str) -> bool {
    let trimmed = line.trim_start();
    match trimmed.split_once(": ") {
        Some((index, _)) => !index.is_empty() && index.chars().all(|ch| ch.is_ascii_digit()),
        None => false,
    }
}

/// [Printer::log] on a printer bound to standard output.
pub fn log(args: impl IntoIterator<Item = LogArg>) {
    Printer::new(PrinterConfig::default()).log(args);
}

/// [Printer::debug] on a printer bound to standard output.
pub fn debug(args: impl IntoIterator<Item = LogArg>) {
    Printer::new(PrinterConfig::default()).debug(args);
}

/// [Printer::info] on a printer bound to standard output.
pub fn info(args: impl IntoIterator<Item = LogArg>) {
    Printer::new(PrinterConfig::default()).info(args);
}

/// [Printer::warn] on a printer bound to standard output.
pub fn warn(args: impl IntoIterator<Item = LogArg>) {
    Printer::new(PrinterConfig::default()).warn(args);
}

/// [Printer::error] on a printer bound to standard output.
pub fn error(args: impl IntoIterator<Item = LogArg>) {
    Printer::new(PrinterConfig::default()).error(args);
}

/// [Printer::trace] on a printer bound to standard output. The innermost frame shown is
/// the caller of this function.
#[inline(never)]
pub fn trace() {
    let text = capture_trace();
    Printer::new(PrinterConfig::default()).log_trace(text);
}
