use clap::Parser;

use crate::cli::App;
use crate::config::Config;

mod cli;
mod config;
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::parse();
    let config = Config::load(app.config.as_deref())?;
    logging::init(&config.log.filter);

    app.run(config).await
}
