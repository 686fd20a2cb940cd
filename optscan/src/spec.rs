//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OptSpecError {
    #[error("option specification has ':' without an option letter at offset {0}")]
    DanglingColon(usize),
    #[error("option letter '{0}' is listed more than once")]
    Duplicate(char),
    #[error("'{0}' cannot be used as an option letter")]
    Reserved(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OptEntry {
    letter: char,
    takes_value: bool,
}

/// Compact option table in getopt notation: each letter, optionally
/// followed by `:` when it requires a value (`"gsw:d:"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptSpec {
    entries: Vec<OptEntry>,
}

impl OptSpec {
    /// A leading `:` (getopt's quiet-errors marker) is accepted and ignored;
    /// scanner tokens always distinguish a missing option-argument.
    pub fn parse(optstring: &str) -> Result<Self, OptSpecError> {
        let body = optstring.strip_prefix(':').unwrap_or(optstring);
        let base = optstring.len() - body.len();

        let mut entries: Vec<OptEntry> = Vec::new();
        let mut chars = body.char_indices().peekable();
        while let Some((pos, letter)) = chars.next() {
            match letter {
                ':' => return Err(OptSpecError::DanglingColon(base + pos)),
                '-' | '?' => return Err(OptSpecError::Reserved(letter)),
                _ => {}
            }
            if entries.iter().any(|e| e.letter == letter) {
                return Err(OptSpecError::Duplicate(letter));
            }

            let takes_value = chars.next_if(|(_, c)| *c == ':').is_some();
            entries.push(OptEntry {
                letter,
                takes_value,
            });
        }

        Ok(Self { entries })
    }

    /// `None` if the letter is not an option, otherwise whether it
    /// requires a value.
    pub fn takes_value(&self, letter: char) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.letter == letter)
            .map(|e| e.takes_value)
    }
}

impl FromStr for OptSpec {
    type Err = OptSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
