//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

/// Metadata of a decoded image, as handed over by the image loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageData {
    rows: u32,
    columns: u32,
    min_gray_level: u32,
    max_gray_level: u32,
    /// Pixels of padding applied to each side of the original image.
    applied_borders: u32,
}

impl ImageData {
    pub fn new(
        rows: u32,
        columns: u32,
        borders: u32,
        min_gray_level: u32,
        max_gray_level: u32,
    ) -> Self {
        Self {
            rows,
            columns,
            min_gray_level,
            max_gray_level,
            applied_borders: borders,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn min_gray_level(&self) -> u32 {
        self.min_gray_level
    }

    pub fn max_gray_level(&self) -> u32 {
        self.max_gray_level
    }

    pub fn border_size(&self) -> u32 {
        self.applied_borders
    }
}
