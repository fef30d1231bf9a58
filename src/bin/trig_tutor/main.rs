/*
    Trig Tutor, sine, cosine and tangent on the unit circle
    Copyright (C) 2024 Trig Tutor contributors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

extern crate pretty_env_logger;
extern crate trig_tutor;

use clap::Parser;
use log::{error, info};
use std::env::var;
use std::path::PathBuf;
use trig_tutor::io::ConfigRepr;
use trig_tutor::server::{serve, AppConfig};

const LOG_VAR: &str = "TRIG_TUTOR_LOG";

/// Serves the sine, cosine and tangent explorer API.
#[derive(Parser, Debug)]
#[command(name = "trig-tutor", version, about)]
struct Cli {
    /// YAML configuration file with `server` and `render` sections
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Overrides the host to bind to
    #[arg(long)]
    host: Option<String>,
    /// Overrides the port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filters = var(LOG_VAR).unwrap_or_else(|_| "INFO".to_string());
    if pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .try_init()
        .is_err()
    {
        println!("could not init logger");
    }

    let mut cfg = match &cli.config {
        Some(path) => {
            info!("Loading configuration from `{}`", path.display());
            AppConfig::load(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(host) = cli.host {
        cfg.server.host = host;
    }
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }

    if let Err(e) = cfg.render.validate() {
        error!("{e}");
        return Err(e.into());
    }

    serve(cfg).await?;
    Ok(())
}
