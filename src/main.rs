//! SkyCast entrypoint: one-shot lookup or interactive prompt.

mod cli;
mod repl;
mod report;

use anyhow::{bail, Result};
use clap::Parser;
use skycast_core::{config_user_message, Config, DisplayUnit};
use skycast_weather::{SessionState, WeatherProvider, WeatherSession};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    skycast_core::init(cli.verbose)?;

    let (config, _) = match Config::load_validated(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            if let Some(hint) = config_user_message(&err) {
                eprintln!("{}", hint);
            }
            return Err(err);
        }
    };
    let unit = if cli.celsius {
        DisplayUnit::Celsius
    } else {
        config.weather.display_unit
    };

    let provider = WeatherProvider::new(&config.weather)?;
    let mut session = WeatherSession::new(provider, unit);
    tracing::info!("SkyCast started ({} display)", unit.name());

    match cli.location {
        Some(location) => {
            let state = session.submit(&location).await?;
            if let SessionState::Failed(message) = state {
                bail!("{}", message);
            }
            if let Some(report) = report::render(&session) {
                println!("{}", report);
            }
        }
        None => repl::run(&mut session).await?,
    }

    Ok(())
}
