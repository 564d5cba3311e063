mod cli;
mod handlers;

use anyhow::Result;
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "circlink";
}

fn init_logging(verbose: bool) {
    let level = match verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let app = cli::build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag(cli::VERBOSE_FLAG));

    handlers::run_circlink(&matches)?;

    Ok(())
}
