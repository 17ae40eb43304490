mod config;
mod controller;
mod error;
mod http;
mod radar;
mod wifi;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

use crate::{controller::Controller, http::DefaultHttpClient, wifi::NmcliStation};

/// A console client that finds an iNav Radar access point and streams peer telemetry
#[derive(Parser, Debug)]
#[command(
    name = "radarlink",
    about = "Finds an iNav Radar access point, joins it, and streams peer telemetry to the console.",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    disable_version_flag = true
)]
struct Args {
    /// Print version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),
}

#[tokio::main]
async fn main() -> Result<()> {
    let _args = Args::parse();

    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let station = NmcliStation::detect().await?;
    let http = DefaultHttpClient::new()?;
    let mut controller = Controller::new(station, http, std::io::stdout());

    info!("setup complete");

    tokio::select! {
        _ = controller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("received Ctrl-C, shutting down");
        }
    }

    Ok(())
}
