//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Command line front end for GLCM texture feature extraction.
//!
//! [`parse_args`] turns an argument vector into a validated
//! [`Configuration`]. It never exits the process; the binary reports
//! warnings and errors and picks the exit status.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod image;
pub mod pathutil;
pub mod usage;
pub mod validate;

use log::debug;
use optscan::{OptSpec, Scanner};

pub use config::{BorderType, Configuration};
pub use dispatch::{ConfigBuilder, OPTSTRING};
pub use error::{ArgsError, Result, Warning, USAGE_EXIT_CODE};
pub use image::ImageData;

pub const PROJECT_NAME: &str = "haralicu";

/// Scan, apply and validate `args` (`args[0]` is the program name).
///
/// Repairs made while validating are pushed to `warnings`, on success and
/// on failure alike.
pub fn parse_args(args: &[String], warnings: &mut Vec<Warning>) -> Result<Configuration> {
    let spec = OptSpec::parse(OPTSTRING)?;
    let mut scanner = Scanner::new(args, &spec);
    let mut builder = ConfigBuilder::new();

    for token in scanner.by_ref() {
        builder.apply(token)?;
    }

    let operands = scanner.operands();
    if !operands.is_empty() {
        debug!("ignoring operands {:?}", operands);
    }

    builder.resolve(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_warned(args: &[&str]) -> (Result<Configuration>, Vec<Warning>) {
        let argv: Vec<String> = std::iter::once("haralicu")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        let mut warnings = Vec::new();
        let result = parse_args(&argv, &mut warnings);
        (result, warnings)
    }

    fn parse(args: &[&str]) -> Result<Configuration> {
        parse_warned(args).0
    }

    fn config(args: &[&str]) -> Configuration {
        parse(args).unwrap()
    }

    #[test]
    fn text_domain_is_the_program_name() {
        assert_eq!(PROJECT_NAME, usage::PROGRAM_NAME);
    }

    #[test]
    fn option_table_is_valid() {
        let spec = OptSpec::parse(OPTSTRING).unwrap();
        for letter in "iowpdtqn".chars() {
            assert_eq!(spec.takes_value(letter), Some(true));
        }
        for letter in "gsvh".chars() {
            assert_eq!(spec.takes_value(letter), Some(false));
        }
    }

    #[test]
    fn window_and_oversized_distance() {
        let (result, warnings) = parse_warned(&["-i", "img.png", "-w", "8", "-d", "20"]);
        let config = result.unwrap();
        assert_eq!(config.window_size(), 8);
        assert_eq!(config.distance(), 1);
        assert_eq!(config.output_folder(), "img");
        assert_eq!(
            warnings,
            vec![Warning::DistanceCorrected {
                distance: 20,
                window_size: 8
            }]
        );
    }

    #[test]
    fn quantized_symmetric_with_maps() {
        let (result, warnings) = parse_warned(&["-i", "img.png", "-q", "128", "-g", "-s"]);
        assert!(warnings.is_empty());
        let config = result.unwrap();
        assert!(config.quantize());
        assert_eq!(config.quantization_max(), Some(128));
        assert!(config.symmetric());
        assert!(config.create_images());
        assert!(!config.verbose());
        assert_eq!(config.window_size(), 5);
        assert_eq!(config.border_type(), BorderType::Zero);
        assert_eq!(config.distance(), 1);
        assert_eq!(config.direction_type(), 1);
        assert_eq!(config.output_folder(), "img");
    }

    #[test]
    fn packed_flags_match_separate_flags() {
        assert_eq!(
            config(&["-i", "img.png", "-gsv"]),
            config(&["-i", "img.png", "-g", "-s", "-v"])
        );
    }

    #[test]
    fn inline_values_match_separate_values() {
        assert_eq!(
            config(&["-iimg.png", "-w10", "-p2", "-d3", "-t4", "-q64", "-oout"]),
            config(&["-i", "img.png", "-w", "10", "-p", "2", "-d", "3", "-t", "4", "-q", "64", "-o", "out"])
        );
    }

    #[test]
    fn value_packed_after_flags() {
        let config = config(&["-gsw12", "-i", "img.png"]);
        assert!(config.symmetric());
        assert!(config.create_images());
        assert_eq!(config.window_size(), 12);
    }

    #[test]
    fn output_folder_derived_from_path() {
        assert_eq!(config(&["-i", "/data/scans/leaf.png"]).output_folder(), "leaf");
    }

    #[test]
    fn missing_image_path_regardless_of_other_flags() {
        assert_eq!(parse(&[]), Err(ArgsError::MissingImagePath));
        assert_eq!(
            parse(&["-w", "10", "-g", "-o", "out", "-d", "50"]),
            Err(ArgsError::MissingImagePath)
        );
        assert_eq!(parse(&["-i", ""]), Err(ArgsError::MissingImagePath));
    }

    #[test]
    fn distance_warning_kept_when_image_path_missing() {
        let (result, warnings) = parse_warned(&["-w", "8", "-d", "20"]);
        assert_eq!(result, Err(ArgsError::MissingImagePath));
        assert_eq!(
            warnings,
            vec![Warning::DistanceCorrected {
                distance: 20,
                window_size: 8
            }]
        );
    }

    #[test]
    fn options_after_operand_are_ignored() {
        let config = config(&["-i", "img.png", "extra", "-w", "500"]);
        assert_eq!(config.window_size(), 5);
    }

    #[test]
    fn options_after_terminator_are_ignored() {
        let config = config(&["-i", "img.png", "--", "-w", "500"]);
        assert_eq!(config.window_size(), 5);
    }

    #[test]
    fn first_error_stops_the_parse() {
        assert_eq!(
            parse(&["-w", "1", "-x"]),
            Err(ArgsError::OutOfRange {
                field: error::Field::WindowSize,
                value: 1
            })
        );
        assert_eq!(
            parse(&["-x", "-w", "1"]),
            Err(ArgsError::UnknownOption('x'))
        );
    }

    #[test]
    fn help_unknown_and_missing_argument() {
        assert_eq!(parse(&["-h"]), Err(ArgsError::HelpRequested));
        assert_eq!(parse(&["-?"]), Err(ArgsError::HelpRequested));
        assert_eq!(parse(&["-i", "img.png", "-z"]), Err(ArgsError::UnknownOption('z')));
        assert_eq!(parse(&["-i"]), Err(ArgsError::MissingArgument('i')));
        assert_eq!(parse(&["-i", "img.png", "-n", "1"]), Err(ArgsError::RetiredOption('n')));
    }

    #[test]
    fn image_path_can_start_with_dash() {
        assert_eq!(config(&["-i", "-v"]).image_path(), "-v");
    }

    mod property_tests {
        use super::*;
        use proptest::{prop_assert, prop_assert_eq, test_runner::TestRunner};

        fn get_test_runner(cases: u32) -> TestRunner {
            TestRunner::new(proptest::test_runner::Config {
                cases,
                failure_persistence: None,

                ..proptest::test_runner::Config::default()
            })
        }

        #[test]
        fn window_size_accepted_only_in_range() {
            get_test_runner(512)
                .run(&(-1_000_i64..1_000_i64), |size| {
                    let size_text = size.to_string();
                    let result = parse(&["-i", "img.png", "-w", size_text.as_str()]);
                    if (2..=100).contains(&size) {
                        prop_assert_eq!(result.unwrap().window_size() as i64, size);
                    } else {
                        prop_assert_eq!(
                            result,
                            Err(ArgsError::OutOfRange {
                                field: error::Field::WindowSize,
                                value: size
                            })
                        );
                    }
                    Ok(())
                })
                .unwrap();
        }

        #[test]
        fn oversized_distance_always_becomes_one() {
            get_test_runner(512)
                .run(&(2_u32..=100_u32, 1_u64..1_000_000_u64), |(window, distance)| {
                    let window_text = window.to_string();
                    let distance_text = distance.to_string();
                    let (result, warnings) = parse_warned(&[
                        "-i",
                        "img.png",
                        "-w",
                        window_text.as_str(),
                        "-d",
                        distance_text.as_str(),
                    ]);
                    let config = result.unwrap();
                    if distance > u64::from(window) {
                        prop_assert_eq!(config.distance(), 1);
                        prop_assert_eq!(warnings.len(), 1);
                    } else {
                        prop_assert_eq!(u64::from(config.distance()), distance);
                        prop_assert!(warnings.is_empty());
                    }
                    Ok(())
                })
                .unwrap();
        }
    }
}
