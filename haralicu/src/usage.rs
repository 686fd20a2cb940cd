//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::error::ArgsError;
use crate::pathutil::basename;
use gettextrs::gettext;
use std::io::{self, Write};

pub const PROGRAM_NAME: &str = "haralicu";

// flag, description, default
const OPTIONS: &[(&str, &str, Option<&str>)] = &[
    ("-i <path>", "input image path", Some("(required)")),
    ("-o <path>", "output folder", Some("(default: image file name)")),
    ("-w <int>", "window size, 2..100", Some("(default: 5)")),
    ("-p <0|1|2>", "padding: 0 none, 1 zero, 2 symmetric", Some("(default: 1)")),
    ("-d <int>", "pixel pair distance, >= 1", Some("(default: 1)")),
    ("-t <1..4>", "number of directions computed", Some("(default: 1)")),
    ("-q <int>", "max gray level for quantization", Some("(default: image max value)")),
    ("-g", "make GLCM pairs symmetric", None),
    ("-s", "save the feature maps", None),
    ("-v", "verbose", None),
    ("-h, -?", "print this help", None),
];

/// Name to show in usage output, from `argv[0]`.
pub fn program_name(args: &[String]) -> String {
    match args.first().map(|arg0| basename(arg0)) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => String::from(PROGRAM_NAME),
    }
}

pub fn usage_text(program: &str) -> String {
    let mut text = format!(
        "{}: {} -i <path> [-o <path>] [-w <int>] [-p <0|1|2>] [-d <int>]\n",
        gettext("Usage"),
        program
    );
    text.push_str("       [-t <1..4>] [-q <int>] [-g] [-s] [-v]\n\n");
    text.push_str(&gettext("Options:"));
    text.push('\n');

    for (flag, description, default) in OPTIONS {
        let line = match default {
            Some(default) => format!(
                "  {:<11} {:<38}{}",
                flag,
                gettext(*description),
                gettext(*default)
            ),
            None => format!("  {:<11} {}", flag, gettext(*description)),
        };
        text.push_str(&line);
        text.push('\n');
    }

    text
}

/// Writes the diagnostic for `error` (if it has one) to `err` and the usage
/// summary to `out`, returning the exit status for the process.
pub fn report<O: Write, E: Write>(
    error: &ArgsError,
    program: &str,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    if let Some(diagnostic) = error.diagnostic() {
        writeln!(err, "{}: {}", program, diagnostic)?;
        err.flush()?;
    }
    out.write_all(usage_text(program).as_bytes())?;
    out.flush()?;

    Ok(error.exit_code())
}
