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

use std::fmt::{Display, Formatter, Result};

use crate::{InlineString, InlineVec, PaletteKind, RESET, SgrCode};

/// The SGR parameter that resets every attribute and color.
pub const RESET_CODE: u8 = 0;

/// The color that a single directive (eg: `!R`, `!rg`, `!bWk`, `!`) asks for. A state
/// w/ [ColorState::attribute] set to [RESET_CODE] and no colors is the "end" state,
/// which closes the currently active color, and may carry trailing whitespace that is
/// printed right after the reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorState {
    pub attribute: Option<u8>,
    pub foreground: Option<u8>,
    pub background: Option<u8>,
    pub trailing: InlineString,
}

mod color_state_impl {
    use super::*;

    impl ColorState {
        pub fn new() -> Self { Self::default() }

        /// The "end" state, w/ `trailing` printed after the reset.
        pub fn new_end(trailing: &str) -> Self {
            let mut it = Self::default();
            it.end(trailing);
            it
        }

        /// No attribute and no colors.
        pub fn is_empty(&self) -> bool {
            self.attribute.is_none() && self.foreground.is_none() && self.background.is_none()
        }

        pub fn is_end(&self) -> bool {
            self.attribute == Some(RESET_CODE)
                && self.foreground.is_none()
                && self.background.is_none()
        }

        pub fn end(&mut self, trailing: &str) {
            self.attribute = Some(RESET_CODE);
            self.foreground = None;
            self.background = None;
            self.trailing = trailing.into();
        }

        /// Drop the attribute and both colors. The trailing text is left alone.
        pub fn clear(&mut self) {
            self.attribute = None;
            self.foreground = None;
            self.background = None;
        }

        pub fn set(&mut self, kind: PaletteKind, code: u8) {
            match kind {
                PaletteKind::Attribute => self.attribute = Some(code),
                PaletteKind::Foreground => self.foreground = Some(code),
                PaletteKind::Background => self.background = Some(code),
            }
        }

        /// The codes that are present, in attribute, foreground, background order.
        pub fn codes(&self) -> InlineVec<u8> {
            [self.attribute, self.foreground, self.background]
                .into_iter()
                .flatten()
                .collect()
        }

        /// - No codes: the plain reset sequence (the trailing text is not printed).
        /// - Otherwise: one escape sequence listing the codes, followed by the trailing
        ///   text.
        pub fn build(&self) -> InlineString {
            let codes = self.codes();
            if codes.is_empty() {
                return RESET.into();
            }
            let mut acc = SgrCode::Params(&codes).to_inline_string();
            acc.push_str(&self.trailing);
            acc
        }
    }

    impl Display for ColorState {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.build()) }
    }
}
