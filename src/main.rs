// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::ffi::OsString;
use std::io;

use anyhow::Result;
use clap::Parser;

use welcome::write_greeting;

/// Print a greeting to standard output.
///
/// Every argument is accepted and ignored, including `--help` and
/// `--version`, so the auto flags are disabled and anything on the command
/// line is swallowed as a trailing value.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"))]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct App {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    _ignored: Vec<OsString>,
}

fn main() -> Result<()> {
    let _ = App::parse();
    write_greeting(&mut io::stdout().lock())?;
    Ok(())
}
