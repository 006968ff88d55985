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

//! Turns short strings like `!R`, `!rg`, `!bWk`, `!` and `!  ` into [ColorState]s.
//!
//! A string is a directive candidate if it starts w/ [SENTINEL] and is at most
//! [MAX_DIRECTIVE_LEN] characters long. What follows the sentinel is read positionally,
//! and the meaning of each position depends on how many characters there are (see
//! [DIRECTIVE_GRAMMAR]):
//!
//! | remainder | positions                       | example          |
//! |-----------|---------------------------------|------------------|
//! | 1 char    | foreground                      | `!R`             |
//! | 2 chars   | foreground, background          | `!rg`, `!W!`     |
//! | 3 chars   | attribute, foreground, background | `!uYb`, `!b R` |
//!
//! A space or a sentinel in any position leaves that slot unset. A remainder made only
//! of spaces and sentinels is a reset that also pads (eg: `!!` prints a reset and one
//! space). A character that isn't in the slot's table means the string wasn't a
//! directive after all, and it is printed as is.

use crate::{ColorState, LogArg, Palette, PaletteKind, RESET_CODE};

pub const SENTINEL: char = '!';

/// The sentinel plus up to three directive characters.
pub const MAX_DIRECTIVE_LEN: usize = 4;

/// Slot meanings, indexed by the length of the remainder minus one.
pub const DIRECTIVE_GRAMMAR: [&[PaletteKind]; 3] = [
    &[PaletteKind::Foreground],
    &[PaletteKind::Foreground, PaletteKind::Background],
    &[
        PaletteKind::Attribute,
        PaletteKind::Foreground,
        PaletteKind::Background,
    ],
];

/// Replace every directive string in `args` w/ a [LogArg::Color]. Everything else is
/// passed through unchanged, in order.
pub fn parse(args: impl IntoIterator<Item = LogArg>, palette: &Palette) -> Vec<LogArg> {
    args.into_iter()
        .map(|arg| match arg {
            LogArg::Text(text) => match parse_directive(&text, palette) {
                Some(color_state) => LogArg::Color(color_state),
                None => LogArg::Text(text),
            },
            other => other,
        })
        .collect()
}

/// Returns [None] if `text` isn't a directive, in which case it should be printed as
/// plain text.
pub fn parse_directive(text: &str, palette: &Palette) -> Option<ColorState> {
    let remainder = text.strip_prefix(SENTINEL)?;
    let chars = remainder.chars().collect::<Vec<_>>();
    if chars.len() + 1 > MAX_DIRECTIVE_LEN {
        return None;
    }

    if chars.is_empty() {
        return Some(ColorState::new_end(""));
    }

    if chars.iter().all(|&ch| is_skip_char(ch)) {
        let padding = " ".repeat(chars.len());
        return Some(ColorState::new_end(&padding));
    }

    let slots = DIRECTIVE_GRAMMAR[chars.len() - 1];
    let mut color_state = ColorState::new();
    for (&ch, &kind) in chars.iter().zip(slots) {
        if is_skip_char(ch) {
            continue;
        }
        match lookup(palette, kind, ch) {
            Some(code) => color_state.set(kind, code),
            None => {
                color_state.clear();
                break;
            }
        }
    }

    (!color_state.is_empty()).then_some(color_state)
}

fn is_skip_char(ch: char) -> bool { ch == SENTINEL || ch == ' ' }

/// A name that resolves to [RESET_CODE] counts as not found. The attribute table maps
/// `e` to it, so `!e  ` is plain text.
fn lookup(palette: &Palette, kind: PaletteKind, ch: char) -> Option<u8> {
    let mut buffer = [0_u8; 4];
    let name = ch.encode_utf8(&mut buffer);
    palette
        .code(kind, name)
        .filter(|&code| code != RESET_CODE)
}
