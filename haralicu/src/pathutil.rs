//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

// Windows-style separators count too.
const SEPARATORS: [char; 2] = ['/', '\\'];

/// Non-directory portion of a pathname, ignoring trailing separators.
/// A path made only of separators has an empty basename.
pub fn basename(pathname: &str) -> &str {
    let trimmed = pathname.trim_end_matches(SEPARATORS);
    match trimmed.rfind(SEPARATORS) {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

/// Strip the last extension; a leading dot is part of the name.
pub fn remove_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    }
}
