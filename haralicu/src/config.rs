//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::image::ImageData;
use std::fmt;

pub const DEFAULT_WINDOW_SIZE: u32 = 5;
pub const MIN_WINDOW_SIZE: u32 = 2;
pub const MAX_WINDOW_SIZE: u32 = 100;
pub const DEFAULT_DISTANCE: u32 = 1;
pub const DEFAULT_DIRECTION_TYPE: u8 = 1;
pub const MAX_DIRECTION_TYPE: u8 = 4;

/// Folder used when none can be derived from the image path.
pub const DEFAULT_OUTPUT_FOLDER: &str = "output";

/// Padding applied around the image so edge pixels get a full window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderType {
    NoPadding,
    #[default]
    Zero,
    Symmetric,
}

impl BorderType {
    pub fn from_code(code: i64) -> Option<BorderType> {
        match code {
            0 => Some(BorderType::NoPadding),
            1 => Some(BorderType::Zero),
            2 => Some(BorderType::Symmetric),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            BorderType::NoPadding => 0,
            BorderType::Zero => 1,
            BorderType::Symmetric => 2,
        }
    }
}

impl fmt::Display for BorderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BorderType::NoPadding => "none",
            BorderType::Zero => "zero",
            BorderType::Symmetric => "symmetric",
        };
        write!(f, "{} ({})", name, self.code())
    }
}

/// Resolved settings for one feature-extraction run.
///
/// Only the resolver builds these, so a value in hand always satisfies:
/// the image path and output folder are non-empty, the window size is in
/// `2..=100`, the distance is in `1..=window_size` and the direction type is
/// in `1..=4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) image_path: String,
    pub(crate) output_folder: String,
    pub(crate) window_size: u32,
    pub(crate) border_type: BorderType,
    pub(crate) distance: u32,
    pub(crate) direction_type: u8,
    pub(crate) quantization_max: Option<u32>,
    pub(crate) symmetric: bool,
    pub(crate) create_images: bool,
    pub(crate) verbose: bool,
}

impl Configuration {
    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    pub fn output_folder(&self) -> &str {
        &self.output_folder
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    pub fn border_type(&self) -> BorderType {
        self.border_type
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn direction_type(&self) -> u8 {
        self.direction_type
    }

    pub fn quantize(&self) -> bool {
        self.quantization_max.is_some()
    }

    pub fn quantization_max(&self) -> Option<u32> {
        self.quantization_max
    }

    pub fn symmetric(&self) -> bool {
        self.symmetric
    }

    pub fn create_images(&self) -> bool {
        self.create_images
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Pixels of padding added to each side of the image.
    pub fn border_size(&self) -> u32 {
        match self.border_type {
            BorderType::NoPadding => 0,
            BorderType::Zero | BorderType::Symmetric => self.window_size / 2,
        }
    }

    /// Metadata of `image` once this configuration's padding is applied
    /// around it, on top of any borders it already carries.
    pub fn padded_image(&self, image: &ImageData) -> ImageData {
        let border = self.border_size();
        ImageData::new(
            image.rows() + 2 * border,
            image.columns() + 2 * border,
            image.border_size() + border,
            image.min_gray_level(),
            image.max_gray_level(),
        )
    }

    /// Highest gray level the feature pipeline should consider: the
    /// quantization ceiling when set, the image's own maximum otherwise.
    pub fn max_gray_level(&self, image: &ImageData) -> u32 {
        self.quantization_max.unwrap_or(image.max_gray_level())
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |b: bool| if b { "yes" } else { "no" };

        writeln!(f, "image path:        {}", self.image_path)?;
        writeln!(f, "output folder:     {}", self.output_folder)?;
        writeln!(f, "window size:       {}", self.window_size)?;
        writeln!(f, "padding:           {}", self.border_type)?;
        writeln!(f, "distance:          {}", self.distance)?;
        writeln!(f, "directions:        {}", self.direction_type)?;
        match self.quantization_max {
            Some(max) => writeln!(f, "quantization:      max {}", max)?,
            None => writeln!(f, "quantization:      off")?,
        }
        writeln!(f, "symmetric pairs:   {}", yes_no(self.symmetric))?;
        writeln!(f, "save feature maps: {}", yes_no(self.create_images))
    }
}
