//! Command-line interface for platemate.
//!
//! The binary takes no arguments and prints a short banner:
//!
//! ```text
//! $ platemate
//! platemate
//! =========
//! Library for plate based assays like ELISAs or Luminex
//! ```

use clap::Parser;

#[derive(Parser)]
#[command(name = "platemate")]
#[command(about = "Library for plate based assays like ELISAs or Luminex")]
pub struct Cli {}

/// The banner printed by the binary
#[must_use]
pub fn banner() -> String {
    let name = env!("CARGO_PKG_NAME");
    format!(
        "{name}\n{}\n{}",
        "=".repeat(name.len()),
        env!("CARGO_PKG_DESCRIPTION")
    )
}

pub fn run(_cli: &Cli) {
    println!("{}", banner());
}
