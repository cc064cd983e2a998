mod app;
mod config;
mod error;
mod events;
mod nutrition;
mod state;
mod ui;
mod utils;

use crate::app::App;
use crate::config::Config;
use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("dieta-tui")
        .version(crate_version!())
        .about("Terminal client for AI-generated diet plans")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory containing the configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("host")
                .long("host")
                .value_name("HOST")
                .help("Diet service host, overriding the configuration")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("port")
                .long("port")
                .value_name("PORT")
                .help("Diet service port, overriding the configuration")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(host) = matches.value_of("host") {
        config.host = host.to_string();
    }
    if let Some(port) = matches.value_of("port") {
        config.port = port.parse()?;
    }

    App::start(config).await
}
