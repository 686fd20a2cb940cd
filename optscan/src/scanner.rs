//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::spec::OptSpec;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A letter from the option table, with its option-argument when the
    /// table says it takes one.
    Option {
        letter: char,
        value: Option<&'a str>,
    },
    /// A letter missing from the option table (including `:`).
    Unknown(char),
    /// A letter that requires a value appeared as the last argument.
    MissingArgument(char),
    /// No more options; the remaining arguments are operands.
    End,
}

/// Resumable short-option scanner over an argument vector.
///
/// `args[0]` is the program name, scanning starts at index 1. Each scanner
/// owns its position, so independent parses never share state.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    args: &'a [String],
    spec: &'a OptSpec,
    /// Index of the argument being scanned (getopt's `optind`).
    index: usize,
    /// Byte offset of the next letter inside `args[index]`; 0 when the next
    /// call must load a fresh argument.
    cursor: usize,
    last_option: Option<char>,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(args: &'a [String], spec: &'a OptSpec) -> Self {
        Self {
            args,
            spec,
            index: 1,
            cursor: 0,
            last_option: None,
            done: false,
        }
    }

    /// Index of the first argument not yet consumed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The option character most recently examined (getopt's `optopt`).
    pub fn last_option(&self) -> Option<char> {
        self.last_option
    }

    /// Arguments left after the scanner reported [`Token::End`].
    pub fn operands(&self) -> &'a [String] {
        let args: &'a [String] = self.args;
        &args[self.index.min(args.len())..]
    }

    pub fn next_token(&mut self) -> Token<'a> {
        if self.done {
            return Token::End;
        }

        let args: &'a [String] = self.args;

        if self.cursor == 0 {
            let Some(arg) = args.get(self.index) else {
                return self.finish();
            };
            if !arg.starts_with('-') {
                return self.finish();
            }
            if arg.len() == 1 {
                // a lone "-" is an operand
                self.last_option = Some('-');
                return self.finish();
            }
            if arg[1..].starts_with('-') {
                // "--" and anything starting with it end the options
                self.index += 1;
                return self.finish();
            }
            self.cursor = 1;
        }

        let arg = &args[self.index];
        let Some(letter) = arg[self.cursor..].chars().next() else {
            // unreachable while `cursor` stays inside the argument
            self.advance();
            return self.next_token();
        };
        self.cursor += letter.len_utf8();
        self.last_option = Some(letter);
        let exhausted = self.cursor >= arg.len();

        let token = match self.spec.takes_value(letter) {
            None => {
                if letter == '-' {
                    return self.finish();
                }
                if exhausted {
                    self.advance();
                }
                Token::Unknown(letter)
            }
            Some(false) => {
                if exhausted {
                    self.advance();
                }
                Token::Option {
                    letter,
                    value: None,
                }
            }
            Some(true) if !exhausted => {
                let value = &arg[self.cursor..];
                self.advance();
                Token::Option {
                    letter,
                    value: Some(value),
                }
            }
            Some(true) => {
                self.advance();
                match args.get(self.index) {
                    Some(value) => {
                        self.index += 1;
                        Token::Option {
                            letter,
                            value: Some(value.as_str()),
                        }
                    }
                    None => Token::MissingArgument(letter),
                }
            }
        };

        trace!("optscan: {:?} (index {})", token, self.index);
        token
    }

    fn advance(&mut self) {
        self.index += 1;
        self.cursor = 0;
    }

    fn finish(&mut self) -> Token<'a> {
        self.done = true;
        self.cursor = 0;
        trace!("optscan: end of options at index {}", self.index);
        Token::End
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token::End => None,
            token => Some(token),
        }
    }
}
