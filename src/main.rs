use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use log::LevelFilter;

use md2html::Config;

#[derive(Parser)]
#[command(name = "md2html")]
#[command(version, about = "Convert Markdown files to HTML")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file
    output: PathBuf,

    /// Config file for logging settings
    #[arg(short, long, default_value = "md2html.toml")]
    config: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors exit with 1 rather than clap's 2
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config, cli.verbose);

    if let Err(e) = md2html::convert_file(&cli.input, &cli.output) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        config.log.level_filter()
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
