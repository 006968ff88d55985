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

//! Rust has no variadic functions, so these macros stand in for them. Each argument is
//! converted w/ [crate::LogArg::from], and the whole list is handed to the function of
//! the same name, which renders it to standard output.
//!
//! ```no_run
//! use r3bl_pprint::{debug, error, info, log, trace, warn};
//!
//! log!("!R", "failed", "!", "retrying in", 3, "seconds");
//! log!("!bWr", "ALERT", "!  ", "disk is", 97.5, "% full");
//! debug!("cache hit ratio", 0.93);
//! info!("listening on port", 8080_u16);
//! warn!("deprecated flag", "--legacy");
//! error!("exit code", -1, None::<i32>);
//! trace!();
//! ```

#[macro_export]
macro_rules! log {
    ($($arg:expr),* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::LogArg> = ::std::vec![$($crate::LogArg::from($arg)),*];
        $crate::log(args)
    }};
}

#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::LogArg> = ::std::vec![$($crate::LogArg::from($arg)),*];
        $crate::debug(args)
    }};
}

#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::LogArg> = ::std::vec![$($crate::LogArg::from($arg)),*];
        $crate::info(args)
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:expr),* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::LogArg> = ::std::vec![$($crate::LogArg::from($arg)),*];
        $crate::warn(args)
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::LogArg> = ::std::vec![$($crate::LogArg::from($arg)),*];
        $crate::error(args)
    }};
}

#[macro_export]
macro_rules! trace {
    () => {
        $crate::trace()
    };
}
