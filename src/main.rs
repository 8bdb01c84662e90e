use anyhow::Result;
use clap::{App as Cli, Arg};
use todo_tui::app::{App, Options};
use todo_tui::config::{self, Config};

fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("data")
                .short("d")
                .long("data")
                .value_name("DIR")
                .help("Directory the item list is stored in")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-level")
                .short("l")
                .long("log-level")
                .value_name("LEVEL")
                .help("One of off, error, warn, info, debug, trace")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let options = Options {
        data_dir: matches.value_of("data").map(Into::into),
        log_level: matches
            .value_of("log-level")
            .map(config::parse_log_level)
            .transpose()?,
    };

    App::start(config, options)
}
