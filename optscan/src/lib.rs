//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Portable POSIX short-option scanner.
//!
//! The scanner walks an argument vector one short option at a time, with the
//! same rules on every target: packed flags (`-gsv`), inline or separate
//! option-arguments (`-w10`, `-w 10`), and `--` as the end of options.

pub mod scanner;
pub mod spec;

pub use scanner::{Scanner, Token};
pub use spec::{OptSpec, OptSpecError};
