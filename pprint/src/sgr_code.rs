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

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result, Write};

use crate::InlineString;

pub const ESC: &str = "\x1b";
pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// The plain reset sequence. Closes whatever color or attribute is currently active.
pub const RESET: &str = "\x1b[0m";

/// A single SGR escape sequence. [SgrCode::Params] lists several parameters which are
/// joined with `;` into one sequence, eg: `\x1b[1;91;44m`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SgrCode<'a> {
    Reset,
    Param(u8),
    Params(&'a [u8]),
}

mod sgr_code_impl {
    use super::*;

    impl Display for SgrCode<'_> {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset => f.write_str(RESET),
                SgrCode::Param(code) => write!(f, "{CSI}{code}{SGR}"),
                SgrCode::Params(codes) => {
                    f.write_str(CSI)?;
                    for (index, code) in codes.iter().enumerate() {
                        if index > 0 {
                            f.write_char(';')?;
                        }
                        write!(f, "{code}")?;
                    }
                    f.write_str(SGR)
                }
            }
        }
    }

    impl SgrCode<'_> {
        /// Same as the [Display] output, but stored in an [InlineString].
        pub fn to_inline_string(&self) -> InlineString {
            let mut acc = InlineString::new();
            // Writing into an in-memory string can't fail.
            let _ = write!(acc, "{self}");
            acc
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::SgrCode;

    #[test]
    fn reset() {
        let sgr_code = SgrCode::Reset;
        assert_eq!(sgr_code.to_string(), "\x1b[0m");
    }

    #[test]
    fn single_param() {
        let sgr_code = SgrCode::Param(91);
        assert_eq!(sgr_code.to_string(), "\x1b[91m");
    }

    #[test]
    fn multiple_params() {
        let sgr_code = SgrCode::Params(&[1, 91, 44]);
        assert_eq!(sgr_code.to_string(), "\x1b[1;91;44m");
    }

    #[test]
    fn inline_string_matches_display() {
        let sgr_code = SgrCode::Params(&[1, 97, 107]);
        assert_eq!(sgr_code.to_inline_string().as_str(), "\x1b[1;97;107m");
        assert!(!sgr_code.to_inline_string().spilled());
    }
}
