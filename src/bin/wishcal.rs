use anyhow::Result;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;
use wishcal::cli::{self, CliArgs};
use wishcal::client::{DEFAULT_BASE_URL, WishlistClient};
use wishcal::config::Config;
use wishcal::context::StandardContext;
use wishcal::controller;

#[tokio::main]
async fn main() -> Result<()> {
    let raw_args: Vec<String> = env::args().skip(1).collect();
    let args = match CliArgs::parse(&raw_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    if args.help {
        cli::print_help();
        return Ok(());
    }

    TermLogger::init(
        log::LevelFilter::Info,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let ctx = StandardContext::new(args.root.clone(), args.output.clone());

    // The config file is optional; command-line arguments fill the gaps.
    let mut config = match Config::load(&ctx) {
        Ok(config) => config,
        Err(e) if Config::is_missing_config_error(&e) => Config::default(),
        Err(e) => return Err(e),
    };
    if let Some(profile) = args.profile {
        config.profile = profile;
    }
    if let Some(pages) = args.max_pages {
        config.max_pages = pages;
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if args.include_dlc {
        config.include_dlc = true;
    }

    if config.profile.is_empty() {
        eprintln!("No profile given. Pass -i <profile> or set 'profile' in config.toml.");
        std::process::exit(2);
    }

    let client = WishlistClient::new(DEFAULT_BASE_URL)?;
    controller::run(&ctx, &config, &client).await?;
    Ok(())
}
