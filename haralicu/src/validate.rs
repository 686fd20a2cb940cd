//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::config::{Configuration, DEFAULT_OUTPUT_FOLDER};
use crate::dispatch::ConfigBuilder;
use crate::error::{ArgsError, Result, Warning};
use crate::pathutil::{basename, remove_extension};
use log::debug;

/// Output folder used when `-o` is absent: the image file name without
/// directories or extension.
pub fn derive_output_folder(image_path: &str) -> String {
    match remove_extension(basename(image_path)) {
        "" => String::from(DEFAULT_OUTPUT_FOLDER),
        name => name.to_string(),
    }
}

impl ConfigBuilder {
    /// Cross-field checks and defaulting, run once every option is applied.
    ///
    /// Repairs are pushed to `warnings` as they happen, so they are kept
    /// even when a later check rejects the configuration.
    pub fn resolve(self, warnings: &mut Vec<Warning>) -> Result<Configuration> {
        // A distance larger than the window is repaired, not rejected.
        let distance = if self.distance > u64::from(self.window_size) {
            debug!(
                "distance {} exceeds window size {}, using 1",
                self.distance, self.window_size
            );
            warnings.push(Warning::DistanceCorrected {
                distance: self.distance,
                window_size: self.window_size,
            });
            1
        } else {
            self.distance as u32
        };

        if self.image_path.is_empty() {
            return Err(ArgsError::MissingImagePath);
        }

        let output_folder = if self.output_folder.is_empty() {
            derive_output_folder(&self.image_path)
        } else {
            self.output_folder
        };

        let config = Configuration {
            image_path: self.image_path,
            output_folder,
            window_size: self.window_size,
            border_type: self.border_type,
            distance,
            direction_type: self.direction_type,
            quantization_max: self.quantization_max,
            symmetric: self.symmetric,
            create_images: self.create_images,
            verbose: self.verbose,
        };
        debug!("resolved configuration: {:?}", config);

        Ok(config)
    }
}
