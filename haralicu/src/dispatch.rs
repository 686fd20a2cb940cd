//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::config::{
    BorderType, DEFAULT_DIRECTION_TYPE, DEFAULT_DISTANCE, DEFAULT_WINDOW_SIZE, MAX_DIRECTION_TYPE,
    MAX_WINDOW_SIZE, MIN_WINDOW_SIZE,
};
use crate::error::{ArgsError, Field, Result};
use log::debug;
use optscan::Token;

/// Option table in getopt notation. `n` is the retired direction-count
/// option: it is still recognised so its value is consumed, then rejected.
pub const OPTSTRING: &str = "gsw:d:n:ht:vo:i:q:p:";

/// Configuration under construction, one scanner token at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBuilder {
    pub(crate) image_path: String,
    pub(crate) output_folder: String,
    pub(crate) window_size: u32,
    pub(crate) border_type: BorderType,
    pub(crate) distance: u64,
    pub(crate) direction_type: u8,
    pub(crate) quantization_max: Option<u32>,
    pub(crate) symmetric: bool,
    pub(crate) create_images: bool,
    pub(crate) verbose: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            output_folder: String::new(),
            window_size: DEFAULT_WINDOW_SIZE,
            border_type: BorderType::default(),
            distance: u64::from(DEFAULT_DISTANCE),
            direction_type: DEFAULT_DIRECTION_TYPE,
            quantization_max: None,
            symmetric: false,
            create_images: false,
            verbose: false,
        }
    }
}

fn parse_int(option: char, value: &str) -> Result<i64> {
    value
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .parse::<i64>()
        .map_err(|_| ArgsError::InvalidNumber {
            option,
            value: value.to_string(),
        })
}

fn check_range(field: Field, value: i64, low: i64, high: i64) -> Result<i64> {
    if (low..=high).contains(&value) {
        Ok(value)
    } else {
        Err(ArgsError::OutOfRange { field, value })
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, token: Token<'_>) -> Result<()> {
        match token {
            Token::Option { letter, value } => self.apply_option(letter, value),
            // '?' is outside the option table, so it always arrives here
            Token::Unknown('?') => Err(ArgsError::HelpRequested),
            Token::Unknown(letter) => Err(ArgsError::UnknownOption(letter)),
            Token::MissingArgument(letter) => Err(ArgsError::MissingArgument(letter)),
            Token::End => Ok(()),
        }
    }

    fn apply_option(&mut self, letter: char, value: Option<&str>) -> Result<()> {
        debug!("option -{} {:?}", letter, value);

        let required = || value.ok_or(ArgsError::MissingArgument(letter));

        match letter {
            'i' => self.image_path = required()?.to_string(),
            'o' => self.output_folder = required()?.to_string(),
            'w' => {
                let size = parse_int(letter, required()?)?;
                let size = check_range(
                    Field::WindowSize,
                    size,
                    i64::from(MIN_WINDOW_SIZE),
                    i64::from(MAX_WINDOW_SIZE),
                )?;
                self.window_size = size as u32;
            }
            'p' => {
                let code = parse_int(letter, required()?)?;
                self.border_type =
                    BorderType::from_code(code).ok_or(ArgsError::OutOfRange {
                        field: Field::BorderType,
                        value: code,
                    })?;
            }
            'd' => {
                let distance = parse_int(letter, required()?)?;
                let distance = check_range(Field::Distance, distance, 1, i64::MAX)?;
                self.distance = distance as u64;
            }
            't' => {
                let directions = parse_int(letter, required()?)?;
                let directions = check_range(
                    Field::DirectionType,
                    directions,
                    1,
                    i64::from(MAX_DIRECTION_TYPE),
                )?;
                self.direction_type = directions as u8;
            }
            'q' => {
                let text = required()?;
                let max = u32::try_from(parse_int(letter, text)?).map_err(|_| {
                    ArgsError::InvalidNumber {
                        option: letter,
                        value: text.to_string(),
                    }
                })?;
                self.quantization_max = Some(max);
            }
            'n' => return Err(ArgsError::RetiredOption(letter)),
            'g' => self.symmetric = true,
            's' => self.create_images = true,
            'v' => self.verbose = true,
            'h' => return Err(ArgsError::HelpRequested),
            other => return Err(ArgsError::UnknownOption(other)),
        }

        Ok(())
    }
}
