//! Locale Switcher - Main Entry Point
//!
//! Terminal shell around the locale switcher widget.

use locale_switcher::app::application::{run_app, AppOptions};

const HELP: &str = "\
locale-switcher

USAGE:
  locale-switcher [OPTIONS]

OPTIONS:
  --url <URL>              Page URL, may carry ?locale=<code>
  --browser-lang <TAG>     Override the OS language (e.g. en-US)
  --memory                 Keep preferences in memory only
  --sync-url               Rewrite the URL on every selection
  -h, --help               Print help
";

fn parse_args() -> Result<AppOptions, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let options = AppOptions {
        url: args.opt_value_from_str("--url")?,
        browser_language: args.opt_value_from_str("--browser-lang")?,
        memory: args.contains("--memory"),
        sync_url: args.contains("--sync-url"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "Ignoring unknown arguments");
    }
    Ok(options)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting locale switcher...");

    let options = parse_args()?;
    run_app(options)
}
