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

use smallstr::SmallString;
use smallvec::SmallVec;

/// Stack allocated string storage for short strings like palette mnemonics, alias names
/// and compiled escape sequences. When this gets larger than
/// [DEFAULT_STRING_STORAGE_SIZE], it will be [smallvec::SmallVec::spilled] on the heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

// PERF: Every escape sequence built from the palette fits in 16 bytes, eg: "\x1b[1;97;107m".
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated list, that can [smallvec::SmallVec::spilled] into the heap if it gets
/// larger than [VEC_ARRAY_SIZE].
pub type InlineVec<T> = SmallVec<[T; VEC_ARRAY_SIZE]>;
pub const VEC_ARRAY_SIZE: usize = 8;
