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

//! Derives the short names (`R`, `fR`, `bR`, `sb`, ...) from the base palette tables.
//!
//! The rules in [ALIAS_RULES] run in order, and every name is registered with "insert
//! if absent" semantics. So the first registration of a name wins, and every later
//! derivation of the same name is silently dropped. A handful of names collide (eg:
//! `f` in the foreground table, `S` in the attribute table), and the order of the rules
//! and of the entries inside each table decides who owns them. The one exception: a name
//! in a code table that holds the reset code (`0`) can still be taken by a later entry.

use crate::{InlineString, InlineVec, Palette, PaletteKind, RESET_CODE, SgrCode};

/// Set this to `true` to log a summary of each alias rule as it runs.
pub const DEBUG_PPRINT_ALIASES: bool = false;

/// Where the names derived by an [AliasRule] are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasTarget {
    /// The namespace of compiled escape sequences ([Palette::escapes]).
    Escapes,
    /// The rule's own source table, as raw codes. The directive parser looks single
    /// characters up here.
    SourceTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasRule {
    pub source: PaletteKind,
    pub target: AliasTarget,
    /// Each prefix is combined w/ the first character of every mnemonic.
    pub prefixes: &'static [char],
    /// Also register the full mnemonic.
    pub allow_full: bool,
    /// Also register the first character of every mnemonic on its own.
    pub allow_single: bool,
}

#[rustfmt::skip]
pub const ALIAS_RULES: [AliasRule; 6] = [
    AliasRule { source: PaletteKind::Attribute,  target: AliasTarget::Escapes,     prefixes: &['s', 'S'], allow_full: true,  allow_single: false },
    AliasRule { source: PaletteKind::Foreground, target: AliasTarget::Escapes,     prefixes: &['f', 'F'], allow_full: true,  allow_single: true  },
    AliasRule { source: PaletteKind::Background, target: AliasTarget::Escapes,     prefixes: &['b', 'B'], allow_full: false, allow_single: false },
    AliasRule { source: PaletteKind::Attribute,  target: AliasTarget::SourceTable, prefixes: &['s', 'S'], allow_full: false, allow_single: true  },
    AliasRule { source: PaletteKind::Foreground, target: AliasTarget::SourceTable, prefixes: &['f', 'F'], allow_full: false, allow_single: true  },
    AliasRule { source: PaletteKind::Background, target: AliasTarget::SourceTable, prefixes: &['b', 'B'], allow_full: false, allow_single: true  },
];

/// Run each rule against the palette, in order.
pub fn expand_aliases(palette: &mut Palette, rules: &[AliasRule]) {
    for rule in rules {
        let (registered, skipped) = apply_rule(palette, rule);
        DEBUG_PPRINT_ALIASES.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Expanded palette aliases",
                source = %rule.source,
                target = ?rule.target,
                registered,
                skipped,
            );
        });
    }
}

/// Each pass re-reads the source table. When a rule writes into its own source table,
/// the single character pass also sees the two character names that the prefix pass just
/// registered.
fn apply_rule(palette: &mut Palette, rule: &AliasRule) -> (usize, usize) {
    let mut tally = Tally::default();

    for (name, code) in snapshot(palette, rule.source) {
        let Some(first) = name.chars().next() else {
            continue;
        };
        for prefix in rule.prefixes {
            let mut key = InlineString::new();
            key.push(*prefix);
            key.push(first);
            tally.record(register(palette, rule, key, code));
        }
    }

    if rule.allow_single {
        for (name, code) in snapshot(palette, rule.source) {
            let Some(first) = name.chars().next() else {
                continue;
            };
            let mut key = InlineString::new();
            key.push(first);
            tally.record(register(palette, rule, key, code));
        }
    }

    if rule.allow_full {
        for (name, code) in snapshot(palette, rule.source) {
            tally.record(register(palette, rule, name, code));
        }
    }

    (tally.registered, tally.skipped)
}

fn snapshot(palette: &Palette, kind: PaletteKind) -> Vec<(InlineString, u8)> {
    palette
        .table(kind)
        .iter()
        .map(|(name, code)| (name.clone(), *code))
        .collect()
}

/// Insert if absent. In a code table, a name that holds [RESET_CODE] counts as absent
/// and is overwritten. Returns `true` if the name was registered.
fn register(palette: &mut Palette, rule: &AliasRule, key: InlineString, code: u8) -> bool {
    match rule.target {
        AliasTarget::Escapes => {
            if palette.escapes.contains_key(&key) {
                return false;
            }
            palette
                .escapes
                .insert(key, SgrCode::Param(code).to_inline_string());
            true
        }
        AliasTarget::SourceTable => {
            let table = palette.table_mut(rule.source);
            if table.get(&key).is_some_and(|&it| it != RESET_CODE) {
                return false;
            }
            table.insert(key, code);
            true
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    registered: usize,
    skipped: usize,
}

impl Tally {
    fn record(&mut self, registered: bool) {
        if registered {
            self.registered += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// All the names that resolve to `code` in the given table, in registration order.
pub fn aliases_for(palette: &Palette, kind: PaletteKind, code: u8) -> InlineVec<InlineString> {
    palette
        .table(kind)
        .iter()
        .filter(|(_, it)| **it == code)
        .map(|(name, _)| name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::{ATTRIBUTE_CODES, BACKGROUND_CODES, FOREGROUND_CODES};

    fn base_entries(kind: PaletteKind) -> &'static [(&'static str, u8)] {
        match kind {
            PaletteKind::Attribute => &ATTRIBUTE_CODES,
            PaletteKind::Foreground => &FOREGROUND_CODES,
            PaletteKind::Background => &BACKGROUND_CODES,
        }
    }

    fn prefixes(kind: PaletteKind) -> [char; 2] {
        match kind {
            PaletteKind::Attribute => ['s', 'S'],
            PaletteKind::Foreground => ['f', 'F'],
            PaletteKind::Background => ['b', 'B'],
        }
    }

    #[test]
    fn two_char_alias_resolves_to_base_code() {
        let palette = Palette::new();
        for kind in PaletteKind::iter() {
            for (name, code) in base_entries(kind) {
                let first = name.chars().next().unwrap();
                for prefix in prefixes(kind) {
                    let alias = format!("{prefix}{first}");
                    assert_eq!(
                        palette.code(kind, &alias),
                        Some(*code),
                        "{kind} alias {alias} for {name}"
                    );
                }
            }
        }
    }

    #[test_case(PaletteKind::Foreground, "R", 91)]
    #[test_case(PaletteKind::Foreground, "r", 31)]
    #[test_case(PaletteKind::Foreground, "B", 34)]
    #[test_case(PaletteKind::Foreground, "b", 94)]
    #[test_case(PaletteKind::Background, "g", 42)]
    #[test_case(PaletteKind::Background, "D", 100)]
    #[test_case(PaletteKind::Attribute, "u", 4)]
    #[test_case(PaletteKind::Attribute, "c", 9)]
    fn single_char_alias(kind: PaletteKind, alias: &str, code: u8) {
        assert_eq!(Palette::new().code(kind, alias), Some(code));
    }

    #[test]
    fn foreground_f_collision_first_writer_wins() {
        // `fD` (DARK, 90) is registered before `fd` (dark, 30), so the single character
        // pass hands `f` and `F` to DARK.
        let palette = Palette::new();
        assert_eq!(palette.code(PaletteKind::Foreground, "f"), Some(90));
        assert_eq!(palette.code(PaletteKind::Foreground, "F"), Some(90));
    }

    #[test]
    fn attribute_s_collision_zero_code_is_overwritten() {
        // `s` already belongs to sblink. `Se` (end) hands `S` the reset code first, which
        // doesn't hold the name, so `Sb` (bold) takes it over.
        let palette = Palette::new();
        assert_eq!(palette.code(PaletteKind::Attribute, "s"), Some(5));
        assert_eq!(palette.code(PaletteKind::Attribute, "S"), Some(1));
        assert_eq!(palette.code(PaletteKind::Attribute, "e"), Some(0));
        assert_eq!(palette.code(PaletteKind::Attribute, "Se"), Some(0));
    }

    #[test]
    fn zero_code_name_in_code_table_is_overwritten() {
        let mut palette = Palette::base();
        palette.attribute.insert("x".into(), RESET_CODE);
        palette.attribute.insert("y".into(), 4);
        let rule = AliasRule {
            source: PaletteKind::Attribute,
            target: AliasTarget::SourceTable,
            prefixes: &[],
            allow_full: false,
            allow_single: false,
        };

        assert!(register(&mut palette, &rule, "x".into(), 7));
        assert!(!register(&mut palette, &rule, "y".into(), 7));
        assert_eq!(palette.code(PaletteKind::Attribute, "x"), Some(7));
        assert_eq!(palette.code(PaletteKind::Attribute, "y"), Some(4));
    }

    #[test]
    fn background_gains_no_prefix_letters() {
        // `b` and `B` are already taken by blue / BLUE when the prefixed names show up.
        let palette = Palette::new();
        assert_eq!(palette.code(PaletteKind::Background, "b"), Some(104));
        assert_eq!(palette.code(PaletteKind::Background, "B"), Some(44));
    }

    #[test]
    fn escapes_namespace() {
        let palette = Palette::new();
        assert_eq!(palette.escape("bold"), Some("\x1b[1m"));
        assert_eq!(palette.escape("Sb"), Some("\x1b[1m"));
        assert_eq!(palette.escape("dark"), Some("\x1b[30m"));
        assert_eq!(palette.escape("green"), Some("\x1b[32m"));
        assert_eq!(palette.escape("yellow"), Some("\x1b[33m"));
        assert_eq!(palette.escape("R"), Some("\x1b[91m"));
        assert_eq!(palette.escape("fR"), Some("\x1b[91m"));
        assert_eq!(palette.escape("bR"), Some("\x1b[101m"));
        // The seeded reset keeps its name, and background full names are not exposed.
        assert_eq!(palette.escape("e"), Some("\x1b[0m"));
        assert_eq!(palette.escape("end"), Some("\x1b[0m"));
        assert_eq!(palette.escape("b"), Some("\x1b[94m"));
        assert_eq!(palette.escape("purple"), Some("\x1b[35m"));
    }

    #[test]
    fn attribute_single_letters_are_not_escapes() {
        // Rule 1 doesn't allow single letters, so `u` is never an escape name.
        let palette = Palette::new();
        assert_eq!(palette.escape("u"), None);
        assert_eq!(palette.escape("su"), Some("\x1b[4m"));
    }

    #[test]
    fn register_never_overwrites() {
        let mut palette = Palette::base();
        let rule = AliasRule {
            source: PaletteKind::Foreground,
            target: AliasTarget::SourceTable,
            prefixes: &[],
            allow_full: true,
            allow_single: false,
        };
        let (registered, skipped) = apply_rule(&mut palette, &rule);
        assert_eq!(registered, 0);
        assert_eq!(skipped, FOREGROUND_CODES.len());
        assert_eq!(palette, Palette::base());
    }

    #[test]
    fn expansion_is_deterministic() {
        assert_eq!(Palette::new(), Palette::new());
        assert_eq!(Palette::global(), &Palette::new());
    }

    #[test]
    fn aliases_in_registration_order() {
        let palette = Palette::new();
        let names = aliases_for(&palette, PaletteKind::Foreground, 90);
        let names = names.iter().map(InlineString::as_str).collect::<Vec<_>>();
        assert_eq!(names, vec!["DARK", "fD", "FD", "D", "f", "F"]);
    }
}
