//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use gettextrs::gettext;
use optscan::OptSpecError;
use std::fmt;

/// Exit status for every usage display, including an explicit help request.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Range-checked numeric options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WindowSize,
    BorderType,
    Distance,
    DirectionType,
}

impl Field {
    fn range_message(self) -> String {
        match self {
            Field::WindowSize => gettext(
                "ERROR! The size of the sliding windows to be extracted. \
                 Option (-w) must have a value between 2 and 100",
            ),
            Field::BorderType => gettext("ERROR! Option (-p) must be a value between 0 and 2"),
            Field::Distance => gettext("ERROR! The distance between each pixel pair must be >= 1"),
            Field::DirectionType => gettext(
                "ERROR! The type of directions to be computed. \
                 Option (-t) must be a value between 1 and 4",
            ),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{} -- {}", gettext("illegal option"), .0)]
    UnknownOption(char),
    #[error("{} -- {}", gettext("option requires an argument"), .0)]
    MissingArgument(char),
    #[error("{} (got {value})", .field.range_message())]
    OutOfRange { field: Field, value: i64 },
    #[error("{} (-{option}): '{value}'", gettext("ERROR! Expected an integer value for option"))]
    InvalidNumber { option: char, value: String },
    #[error("{}", gettext("ERROR! Missing image path!"))]
    MissingImagePath,
    #[error(
        "{} (-{})",
        gettext("Warning! In the current version, just one direction can be computed at each time"),
        .0
    )]
    RetiredOption(char),
    #[error("{}", gettext("help requested"))]
    HelpRequested,
    #[error("invalid option table: {0}")]
    Spec(#[from] OptSpecError),
}

impl ArgsError {
    /// Text printed to the error stream ahead of the usage summary.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            ArgsError::HelpRequested => None,
            _ => Some(self.to_string()),
        }
    }

    pub fn exit_code(&self) -> i32 {
        USAGE_EXIT_CODE
    }
}

/// Non-fatal repairs made while resolving the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    DistanceCorrected { distance: u64, window_size: u32 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DistanceCorrected {
                distance,
                window_size,
            } => write!(
                f,
                "WARNING: distance ({distance}) can't be > of each window size ({window_size}); \
                 distance value corrected to 1"
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArgsError>;
