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

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use strum_macros::Display;

/// Which of the [crate::Printer] sinks a write failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SinkKind {
    #[strum(serialize = "output")]
    Output,
    #[strum(serialize = "diagnostics")]
    Diagnostics,
}

/// None of these ever reach the callers of [crate::log] and friends. Sink failures are
/// only visible through [crate::Printer::try_log], and
/// [PprintError::UnsupportedArgType] is written to the diagnostics sink while the rest
/// of the arguments keep rendering.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum PprintError {
    #[error("[r3bl_pprint] unknown type {type_name}")]
    #[diagnostic(
        code(r3bl_pprint::unsupported_arg_type),
        help("Convert the value into one of the `LogArg` variants before logging it")
    )]
    UnsupportedArgType { type_name: String },

    #[error("[r3bl_pprint] could not write to the {sink} sink")]
    #[diagnostic(code(r3bl_pprint::write))]
    Write {
        sink: SinkKind,
        #[source]
        source: std::io::Error,
    },
}
