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

//! # r3bl_pprint
//!
//! Colorized, type aware console logging. Short strings that start w/ `!` are color
//! directives, and everything else is printed according to its type.
//!
//! ```no_run
//! use r3bl_pprint::log;
//!
//! // Red "fail", then a reset, then plain "ok".
//! log!("!R", "fail", "!", "ok");
//! ```
//!
//! # Directive grammar
//!
//! `!` followed by up to three characters. The number of characters decides what each
//! position means:
//!
//! | directive | meaning                                              |
//! |-----------|------------------------------------------------------|
//! | `!`       | reset                                                |
//! | `!  `     | reset, then print two spaces (`!!` works too)        |
//! | `!R`      | foreground                                           |
//! | `!rg`     | foreground, background                               |
//! | `!uYb`    | attribute, foreground, background                    |
//!
//! A space or `!` leaves a position empty. Colors are the first letter of `dark`,
//! `white`, `red`, `yellow`, `green`, `cyan`, `blue`, `purple` (capital for bright).
//! Attributes are the first letter of `bold`, `dim`, `italic`, `underline`, `sblink`,
//! `fblink`, `reverse`, `hidden`, `cross`. Anything else makes the string plain text,
//! and there is no way to print a literal string that is also a valid directive.
//!
//! # Types
//!
//! Strings are printed as is. `null` (bold), `undefined` (dark), symbols (green),
//! booleans, numbers and big integers (yellow) use the active color instead when there
//! is one. Structured values go through an [Inspect] implementation, which only adds its
//! own colors when no directive color is active. Every call ends w/ a reset and a
//! newline.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod alias;
pub mod color_state;
pub mod decl_macros;
pub mod directive_parser;
pub mod inspect;
pub mod log_arg;
pub mod palette;
pub mod pprint_error;
pub mod printer;
pub mod render;
pub mod sgr_code;
pub mod sizing;

#[cfg(test)]
mod test_fixtures;

// Re-export.
pub use alias::*;
pub use color_state::*;
pub use directive_parser::*;
pub use inspect::*;
pub use log_arg::*;
pub use palette::*;
pub use pprint_error::*;
pub use printer::*;
pub use render::*;
pub use sgr_code::*;
pub use sizing::*;
