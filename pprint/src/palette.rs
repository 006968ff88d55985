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

//! The three base tables that map a short mnemonic to an SGR parameter number, plus the
//! namespace of precompiled escape sequences derived from them. Both are built once
//! (see [Palette::global]) and are read only afterwards.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

use std::sync::LazyLock;

use ordermap::OrderMap;
use strum_macros::{Display, EnumCount, EnumIter};

use crate::{ALIAS_RULES, ESC, InlineString, RESET, expand_aliases};

/// The category of a palette table. The [Display] output is the short name used in
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum PaletteKind {
    #[strum(serialize = "sgr")]
    Attribute,
    #[strum(serialize = "fg")]
    Foreground,
    #[strum(serialize = "bg")]
    Background,
}

/// Select graphics rendition.
#[rustfmt::skip]
pub const ATTRIBUTE_CODES: [(&str, u8); 10] = [
    ("end",       0),
    ("bold",      1),
    ("dim",       2),
    ("italic",    3),
    ("underline", 4),
    ("sblink",    5),
    ("fblink",    6),
    ("reverse",   7),
    ("hidden",    8),
    ("cross",     9),
];

/// Capital letters are bright, except black (which is gray when bright) and blue.
#[rustfmt::skip]
pub const FOREGROUND_CODES: [(&str, u8); 16] = [
    ("DARK",   90),
    ("dark",   30),
    ("WHITE",  97),
    ("white",  37),
    ("RED",    91),
    ("red",    31),
    ("YELLOW", 93),
    ("yellow", 33),
    ("GREEN",  92),
    ("green",  32),
    ("CYAN",   96),
    ("cyan",   36),
    ("BLUE",   34),
    ("blue",   94),
    ("PURPLE", 95),
    ("purple", 35),
];

#[rustfmt::skip]
pub const BACKGROUND_CODES: [(&str, u8); 16] = [
    ("DARK",   100),
    ("dark",    40),
    ("WHITE",  107),
    ("white",   47),
    ("RED",    101),
    ("red",     41),
    ("YELLOW", 103),
    ("yellow",  43),
    ("GREEN",  102),
    ("green",   42),
    ("CYAN",   106),
    ("cyan",    46),
    ("BLUE",    44),
    ("blue",   104),
    ("PURPLE", 105),
    ("purple",  45),
];

/// Mnemonic (or derived alias) to raw SGR parameter. Insertion order is registration
/// order.
pub type CodeTable = OrderMap<InlineString, u8>;

/// Name to fully compiled escape sequence, eg: `bold` to `\x1b[1m`.
pub type EscapeTable = OrderMap<InlineString, InlineString>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub attribute: CodeTable,
    pub foreground: CodeTable,
    pub background: CodeTable,
    pub escapes: EscapeTable,
}

static GLOBAL_PALETTE: LazyLock<Palette> = LazyLock::new(Palette::new);

mod palette_impl {
    use super::*;

    impl Default for Palette {
        fn default() -> Self { Self::new() }
    }

    impl Palette {
        /// The fully expanded palette, w/ every alias from [ALIAS_RULES] registered.
        pub fn new() -> Self {
            let mut palette = Self::base();
            expand_aliases(&mut palette, &ALIAS_RULES);
            palette
        }

        /// Only the base tables, and the escape namespace seeded w/ `esc` and `e`. No
        /// aliases.
        pub fn base() -> Self {
            let mut escapes = EscapeTable::new();
            escapes.insert(InlineString::from("esc"), InlineString::from(ESC));
            escapes.insert(InlineString::from("e"), InlineString::from(RESET));

            Self {
                attribute: code_table(&ATTRIBUTE_CODES),
                foreground: code_table(&FOREGROUND_CODES),
                background: code_table(&BACKGROUND_CODES),
                escapes,
            }
        }

        /// The process wide palette. It is built on first use.
        pub fn global() -> &'static Palette { &GLOBAL_PALETTE }

        pub fn table(&self, kind: PaletteKind) -> &CodeTable {
            match kind {
                PaletteKind::Attribute => &self.attribute,
                PaletteKind::Foreground => &self.foreground,
                PaletteKind::Background => &self.background,
            }
        }

        pub fn table_mut(&mut self, kind: PaletteKind) -> &mut CodeTable {
            match kind {
                PaletteKind::Attribute => &mut self.attribute,
                PaletteKind::Foreground => &mut self.foreground,
                PaletteKind::Background => &mut self.background,
            }
        }

        /// Look up a mnemonic or alias in one of the code tables.
        pub fn code(&self, kind: PaletteKind, name: &str) -> Option<u8> {
            self.table(kind).get(name).copied()
        }

        /// Look up a precompiled escape sequence, eg: `bold`, `dark`, `R`, `bR`, `e`.
        pub fn escape(&self, name: &str) -> Option<&str> {
            self.escapes.get(name).map(InlineString::as_str)
        }
    }

    fn code_table(entries: &[(&str, u8)]) -> CodeTable {
        entries
            .iter()
            .map(|(name, code)| (InlineString::from(*name), *code))
            .collect()
    }
}
