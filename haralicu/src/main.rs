//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use gettextrs::{bind_textdomain_codeset, setlocale, textdomain, LocaleCategory};
use haralicu::{parse_args, usage, PROJECT_NAME};
use log::{debug, info};
use std::io::{self, Write};
use std::process;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let program = usage::program_name(&args);

    let mut warnings = Vec::new();
    let result = parse_args(&args, &mut warnings);

    let mut stdout = io::stdout().lock();
    for warning in &warnings {
        writeln!(stdout, "{}", warning)?;
    }

    let config = match result {
        Ok(config) => config,
        Err(e) => {
            debug!("argument error: {:?}", e);
            let code = usage::report(&e, &program, &mut stdout, &mut io::stderr())?;
            process::exit(code);
        }
    };

    if config.verbose() {
        write!(stdout, "{}", config)?;
    }
    info!(
        "feature extraction input {} -> {}",
        config.image_path(),
        config.output_folder()
    );

    Ok(())
}
