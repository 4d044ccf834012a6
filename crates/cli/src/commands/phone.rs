//! Phone input subcommands.

use brewhaven_core::Phone;

/// `bh-cli phone format`
pub fn format(input: &str) {
    println!("{}", Phone::format_digits(input));
}
