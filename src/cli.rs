// File: ./src/cli.rs
//! Command-line interface: argument parsing and help text.

use anyhow::{Result, bail};
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliArgs {
    pub profile: Option<String>,
    pub max_pages: Option<u32>,
    pub include_dlc: bool,
    pub locale: Option<String>,
    pub output: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub help: bool,
}

impl CliArgs {
    /// Parse raw process arguments (without the binary name).
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = Self::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" | "help" => parsed.help = true,
                "-d" | "--include-dlc" => parsed.include_dlc = true,
                "-i" | "--id" => parsed.profile = Some(expect_value(&mut iter, arg)?),
                "-p" | "--max-page" => {
                    let value = expect_value(&mut iter, arg)?;
                    parsed.max_pages = Some(value.parse().map_err(|_| {
                        anyhow::anyhow!("'{}' expects a number, got '{}'", arg, value)
                    })?);
                }
                "-l" | "--locale" => parsed.locale = Some(expect_value(&mut iter, arg)?),
                "-o" | "--output" => {
                    parsed.output = Some(PathBuf::from(expect_value(&mut iter, arg)?));
                }
                "-r" | "--root" => {
                    parsed.root = Some(PathBuf::from(expect_value(&mut iter, arg)?));
                }
                other => bail!("Unknown argument '{}'. Try --help.", other),
            }
        }
        Ok(parsed)
    }
}

fn expect_value(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<String> {
    match iter.next() {
        Some(value) => Ok(value.clone()),
        None => bail!("Missing value for '{}'", flag),
    }
}

pub fn print_help() {
    println!(
        "wishcal v{} - Turns a Steam wishlist into an ICS release calendar",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    wishcal -i <profile> [-p <pages>] [-d] [-l <locale>] [-o <dir>]");
    println!("    wishcal --help");
    println!();
    println!("OPTIONS:");
    println!("    -i, --id <profile>      SteamID64 or vanity profile name.");
    println!("    -p, --max-page <n>      Maximum wishlist pages to fetch (default 20).");
    println!("    -d, --include-dlc       Create calendar events for DLC too.");
    println!("    -l, --locale <locale>   Storefront localization (default schinese).");
    println!("    -o, --output <dir>      Output directory (default ./output).");
    println!("    -r, --root <path>       Use a different directory for config and output.");
    println!("    -h, --help              Show this help message.");
    println!();
    println!("OUTPUT FILES:");
    println!("    wishlist.ics                      Release calendar");
    println!("    successful.txt                    Resolved release dates");
    println!("    failed_deductions.txt             Strings that could not be parsed");
    println!("    history.json                      Per-day wishlist counters");
    println!("    wishlist_history_chart.png        Counter history, line chart");
    println!("    wishlist_history_stack_plot.png   Counter history, stacked");
    println!();
    println!("Command-line values override config.toml.");
}
